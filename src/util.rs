//! Helpers for standing the panel up without a host editor.

use std::sync::Arc;

use norad::glyph::{Contour, ContourPoint, Outline, PointType};
use norad::Glyph;

use crate::data::{GlyphDetail, Layer, Rgba, Workspace};

/// A workspace with a simple placeholder glyph, for the demo binary and
/// for exercising the panel before a host editor is wired up.
pub fn create_demo_workspace() -> Workspace {
    let glyph = GlyphDetail::from_norad(&demo_glyph());
    let layers = vec![
        Layer {
            name: Arc::new("foreground".to_string()),
            color: None,
        },
        Layer {
            name: Arc::new("background".to_string()),
            color: Some(Rgba::new(1.0, 0.75, 0.0, 0.7)),
        },
    ];
    Workspace::new(Some(glyph), layers)
}

fn demo_glyph() -> Glyph {
    let mut glyph = Glyph::new_named("placeholder");
    glyph.codepoints = Some(vec!['\u{FFFD}']);
    glyph.advance = Some(norad::Advance {
        height: 0.,
        width: 656.,
    });
    glyph.outline = Some(Outline {
        components: vec![],
        contours: vec![
            box_contour(78., 10., 578., 510.),
            box_contour(128., 60., 528., 460.),
        ],
    });
    glyph
}

fn box_contour(x0: f32, y0: f32, x1: f32, y1: f32) -> Contour {
    let corner = |x, y| ContourPoint::new(x, y, PointType::Line, false, None, None, None);
    let points = vec![
        corner(x0, y0),
        corner(x1, y0),
        corner(x1, y1),
        corner(x0, y1),
    ];
    Contour::new(points, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_workspace_is_populated() {
        let workspace = create_demo_workspace();
        let glyph = workspace.selected.as_ref().unwrap();
        assert!(glyph.bounds().is_some());
        assert_eq!(glyph.advance, 656.0);
        assert_eq!(workspace.layers.len(), 2);
    }
}
