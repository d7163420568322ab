//! The nine anchor positions used as transform origins.

use druid::kurbo::{Point, Rect};
use druid::Data;

/// One of nine reference positions on a bounding box: the corners, the
/// edge midpoints, and the center.
///
/// Anchors are ordered row-major from the top-left, matching the 3×3 grid
/// drawn by [`AlignmentPicker`](crate::widgets::AlignmentPicker). The
/// selected anchor is the pivot for scaling the inspected glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Data)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

static ALL_ANCHORS: &[Anchor] = &[
    Anchor::TopLeft,
    Anchor::Top,
    Anchor::TopRight,
    Anchor::Left,
    Anchor::Center,
    Anchor::Right,
    Anchor::BottomLeft,
    Anchor::Bottom,
    Anchor::BottomRight,
];

impl Anchor {
    /// All anchors, in row-major grid order.
    pub fn all() -> &'static [Anchor] {
        ALL_ANCHORS
    }

    /// The anchor at a row-major grid index.
    ///
    /// Indices outside `0..9` are a caller bug; the grid cannot produce them.
    pub fn from_index(idx: usize) -> Anchor {
        assert!(idx < 9, "anchor index out of range: {}", idx);
        ALL_ANCHORS[idx]
    }

    /// This anchor's row-major grid index.
    pub fn index(self) -> usize {
        match self {
            Anchor::TopLeft => 0,
            Anchor::Top => 1,
            Anchor::TopRight => 2,
            Anchor::Left => 3,
            Anchor::Center => 4,
            Anchor::Right => 5,
            Anchor::BottomLeft => 6,
            Anchor::Bottom => 7,
            Anchor::BottomRight => 8,
        }
    }

    /// (row, column) of this anchor in the grid, with row 0 at the top.
    pub(crate) fn grid_pos(self) -> (usize, usize) {
        (self.index() / 3, self.index() % 3)
    }

    /// Given bounds in design space (y-up), the point for this anchor.
    ///
    /// The top row maps to the rect's `max_y`, since design space has y
    /// increasing upwards.
    pub fn point_in_design_rect(self, bounds: Rect) -> Point {
        let (row, col) = self.grid_pos();
        let x = match col {
            0 => bounds.min_x(),
            1 => (bounds.min_x() + bounds.max_x()) / 2.0,
            _ => bounds.max_x(),
        };
        let y = match row {
            0 => bounds.max_y(),
            1 => (bounds.min_y() + bounds.max_y()) / 2.0,
            _ => bounds.min_y(),
        };
        Point::new(x, y)
    }
}

/// The pivot for a scale, given the picker state and the glyph's bounds.
///
/// Returns `Point::ZERO` when no anchor is selected or the glyph has no
/// outline to take bounds from; a scale about the origin is the least
/// surprising fallback.
pub fn transform_origin(anchor: Option<Anchor>, bounds: Option<Rect>) -> Point {
    match (anchor, bounds) {
        (Some(anchor), Some(bounds)) => anchor.point_in_design_rect(bounds),
        _ => Point::ZERO,
    }
}

/// Selection behavior for the picker: clicking the selected anchor again
/// clears the selection.
pub fn toggle(selection: &mut Option<Anchor>, anchor: Anchor) {
    if *selection == Some(anchor) {
        *selection = None;
    } else {
        *selection = Some(anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, anchor) in Anchor::all().iter().enumerate() {
            assert_eq!(anchor.index(), i);
            assert_eq!(Anchor::from_index(i), *anchor);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn bogus_index() {
        Anchor::from_index(9);
    }

    #[test]
    fn origin_rows_and_columns() {
        // left = 0, bottom = 0, right = 100, top = 200
        let bounds = Rect::new(0.0, 0.0, 100.0, 200.0);
        assert_eq!(
            transform_origin(Some(Anchor::TopLeft), Some(bounds)),
            Point::new(0.0, 200.0)
        );
        assert_eq!(
            transform_origin(Some(Anchor::Center), Some(bounds)),
            Point::new(50.0, 100.0)
        );
        assert_eq!(
            transform_origin(Some(Anchor::BottomRight), Some(bounds)),
            Point::new(100.0, 0.0)
        );
    }

    #[test]
    fn origin_covers_all_nine_combinations() {
        let bounds = Rect::new(10.0, 20.0, 110.0, 220.0);
        let xs = [10.0, 60.0, 110.0];
        let ys = [220.0, 120.0, 20.0];
        for anchor in Anchor::all() {
            let (row, col) = anchor.grid_pos();
            let pt = anchor.point_in_design_rect(bounds);
            assert_eq!(pt, Point::new(xs[col], ys[row]), "{:?}", anchor);
        }
    }

    #[test]
    fn missing_inputs_mean_no_offset() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(transform_origin(None, Some(bounds)), Point::ZERO);
        assert_eq!(transform_origin(Some(Anchor::Top), None), Point::ZERO);
        assert_eq!(transform_origin(None, None), Point::ZERO);
    }

    #[test]
    fn toggling_twice_clears() {
        let mut sel = None;
        toggle(&mut sel, Anchor::Center);
        assert_eq!(sel, Some(Anchor::Center));
        toggle(&mut sel, Anchor::Center);
        assert_eq!(sel, None);
        toggle(&mut sel, Anchor::Left);
        toggle(&mut sel, Anchor::Right);
        assert_eq!(sel, Some(Anchor::Right));
    }

    #[test]
    fn origin_is_stable_across_queries() {
        let bounds = Rect::new(-5.0, -5.0, 25.0, 35.0);
        let first = transform_origin(Some(Anchor::Bottom), Some(bounds));
        let second = transform_origin(Some(Anchor::Bottom), Some(bounds));
        assert_eq!(first, second);
    }
}
