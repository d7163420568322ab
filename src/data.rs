//! Inspector state: the glyph under inspection, its layers, and the
//! transform panel's fields.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use druid::kurbo::{Affine, BezPath, PathEl, Point, Rect, Shape, Vec2};
use druid::{Data, Lens};
use norad::GlyphName;

use crate::alignment::{self, Anchor};

/// The data the inspector panel operates on.
///
/// A host editor embeds the panel as a `Widget<Workspace>` and keeps
/// `selected` pointed at whatever glyph has focus; everything in the panel
/// updates through druid's ordinary data flow.
#[derive(Clone, Data, Lens)]
pub struct Workspace {
    /// The glyph under inspection, if any.
    pub selected: Option<GlyphDetail>,
    /// The font's layers, in display order.
    pub layers: Arc<Vec<Layer>>,
    pub transform: TransformState,
}

/// The editor-side view of a glyph: metadata fields plus a cached outline,
/// detached from whatever font object owns the canonical data.
#[derive(Clone, Data, Lens)]
pub struct GlyphDetail {
    pub name: GlyphName,
    pub codepoints: CodepointList,
    /// Advance width, in design units.
    pub advance: f64,
    pub outline: Arc<BezPath>,
    /// The glyph's mark color, if one is set.
    pub mark: Option<Rgba>,
}

/// A named layer of the font, with its display color.
#[derive(Clone, Data, Lens)]
pub struct Layer {
    pub name: Arc<String>,
    pub color: Option<Rgba>,
}

/// An RGBA color with unit-interval components, as UFO-style fonts store
/// mark and layer colors.
#[derive(Debug, Clone, Copy, PartialEq, Data)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Rgba {
        Rgba { r, g, b, a }
    }

    pub fn to_druid(self) -> druid::Color {
        druid::Color::rgba(self.r, self.g, self.b, self.a)
    }
}

/// A glyph's Unicode codepoints.
///
/// Formats as space-separated uppercase hex (four digits, or six above
/// U+FFFF) and parses the same representation back; an empty string is an
/// empty list.
#[derive(Debug, Clone, Data)]
pub struct CodepointList(Arc<Vec<char>>);

impl CodepointList {
    pub fn new(codepoints: Vec<char>) -> CodepointList {
        CodepointList(Arc::new(codepoints))
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for CodepointList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, chr) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let cp = *chr as u32;
            if cp > 0xFFFF {
                write!(f, "{:06X}", cp)?;
            } else {
                write!(f, "{:04X}", cp)?;
            }
        }
        Ok(())
    }
}

impl FromStr for CodepointList {
    type Err = ParseCodepointError;

    fn from_str(s: &str) -> Result<CodepointList, ParseCodepointError> {
        let mut codepoints = Vec::new();
        for token in s.split_whitespace() {
            if token.len() < 4 || token.len() > 6 {
                return Err(ParseCodepointError::BadLength(token.into()));
            }
            let cp = u32::from_str_radix(token, 16)
                .map_err(|_| ParseCodepointError::BadHex(token.into()))?;
            let chr = std::char::from_u32(cp).ok_or(ParseCodepointError::NotAScalar(cp))?;
            codepoints.push(chr);
        }
        Ok(CodepointList::new(codepoints))
    }
}

/// Why a codepoint field failed to parse.
#[derive(Debug, Clone)]
pub enum ParseCodepointError {
    /// Codepoints are written with four to six hex digits.
    BadLength(String),
    BadHex(String),
    /// Valid hex, but not a Unicode scalar value (a surrogate, or > U+10FFFF).
    NotAScalar(u32),
}

impl fmt::Display for ParseCodepointError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseCodepointError::BadLength(s) => {
                write!(f, "'{}' should be four to six hex digits", s)
            }
            ParseCodepointError::BadHex(s) => write!(f, "'{}' is not hexadecimal", s),
            ParseCodepointError::NotAScalar(cp) => {
                write!(f, "{:X} is not a Unicode scalar value", cp)
            }
        }
    }
}

impl std::error::Error for ParseCodepointError {}

/// A glyph's left and right side bearings.
#[derive(Debug, Clone, Copy, Default, Data, Lens)]
pub struct Sidebearings {
    pub left: f64,
    pub right: f64,
}

impl GlyphDetail {
    /// a lens to the glyph's side bearings
    #[allow(non_upper_case_globals)]
    pub const sidebearings: lenses::SidebearingLens = lenses::SidebearingLens;

    /// Build the editor-side view of a norad glyph.
    pub fn from_norad(glyph: &norad::Glyph) -> GlyphDetail {
        let outline = glyph
            .outline
            .as_ref()
            .map(outline_to_bez)
            .unwrap_or_default();
        GlyphDetail {
            name: glyph.name.clone(),
            codepoints: CodepointList::new(glyph.codepoints.clone().unwrap_or_default()),
            advance: glyph
                .advance
                .as_ref()
                .map(|adv| f64::from(adv.width))
                .unwrap_or(0.0),
            outline: Arc::new(outline),
            mark: None,
        }
    }

    /// The bounds of the inked outline, or `None` for an empty glyph.
    pub fn bounds(&self) -> Option<Rect> {
        if self.outline.elements().is_empty() {
            None
        } else {
            Some(self.outline.bounding_box())
        }
    }

    pub fn left_side_bearing(&self) -> Option<f64> {
        self.bounds().map(|b| b.min_x())
    }

    pub fn right_side_bearing(&self) -> Option<f64> {
        self.bounds().map(|b| self.advance - b.max_x())
    }

    /// Move the outline so its left edge sits at `new`; the advance grows
    /// by the same delta so the right side bearing is unchanged.
    pub fn set_left_side_bearing(&mut self, new: f64) {
        if let Some(old) = self.left_side_bearing() {
            let delta = new - old;
            self.nudge(Vec2::new(delta, 0.0));
            self.advance += delta;
        }
    }

    pub fn set_right_side_bearing(&mut self, new: f64) {
        if let Some(old) = self.right_side_bearing() {
            self.advance += new - old;
        }
    }

    fn apply(&mut self, affine: Affine) {
        Arc::make_mut(&mut self.outline).apply_affine(affine);
    }

    pub fn nudge(&mut self, delta: Vec2) {
        self.apply(Affine::translate(delta));
    }

    /// Scale the outline about `origin` (in design units).
    pub fn scale(&mut self, scale: Vec2, origin: Point) {
        let center = origin.to_vec2();
        self.apply(
            Affine::translate(center)
                * Affine::scale_non_uniform(scale.x, scale.y)
                * Affine::translate(-center),
        );
    }

    /// Rotate the outline counter-clockwise about the design-space origin.
    pub fn rotate(&mut self, degrees: f64) {
        self.apply(Affine::rotate(degrees.to_radians()));
    }

    /// Skew the outline; `angles` are x/y shear angles in degrees.
    pub fn skew(&mut self, angles: Vec2) {
        let x_shear = angles.x.to_radians().tan();
        let y_shear = angles.y.to_radians().tan();
        self.apply(Affine::new([1.0, y_shear, x_shear, 1.0, 0.0, 0.0]));
    }

    /// Mirror the outline about the vertical centerline of its bounds.
    pub fn flip_horizontal(&mut self) {
        if let Some(bounds) = self.bounds() {
            let span = bounds.min_x() + bounds.max_x();
            self.apply(Affine::new([-1.0, 0.0, 0.0, 1.0, span, 0.0]));
        }
    }

    /// Mirror the outline about the horizontal centerline of its bounds.
    pub fn flip_vertical(&mut self) {
        if let Some(bounds) = self.bounds() {
            let span = bounds.min_y() + bounds.max_y();
            self.apply(Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, span]));
        }
    }

    /// Round every outline coordinate to the nearest multiple of `base`.
    pub fn snap(&mut self, base: f64) {
        if base <= 0.0 {
            return;
        }
        let round = |p: Point| {
            Point::new(
                (p.x / base).round() * base,
                (p.y / base).round() * base,
            )
        };
        let snapped: BezPath = self
            .outline
            .elements()
            .iter()
            .map(|el| match el {
                PathEl::MoveTo(p) => PathEl::MoveTo(round(*p)),
                PathEl::LineTo(p) => PathEl::LineTo(round(*p)),
                PathEl::QuadTo(p1, p2) => PathEl::QuadTo(round(*p1), round(*p2)),
                PathEl::CurveTo(p1, p2, p3) => {
                    PathEl::CurveTo(round(*p1), round(*p2), round(*p3))
                }
                PathEl::ClosePath => PathEl::ClosePath,
            })
            .collect();
        self.outline = Arc::new(snapped);
    }
}

/// Field state for the transform section of the panel.
#[derive(Debug, Clone, Data, Lens)]
pub struct TransformState {
    /// The selected scale pivot, if any.
    pub anchor: Option<Anchor>,
    pub move_x: f64,
    pub move_y: f64,
    /// When set, the y amount mirrors the x amount.
    pub uniform_move: bool,
    /// Scale factors, as percentages.
    pub scale_x: f64,
    pub scale_y: f64,
    pub uniform_scale: bool,
    /// Rotation, in degrees counter-clockwise.
    pub rotate: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    pub uniform_skew: bool,
    /// The grid base for the snap action.
    pub snap_grid: f64,
}

impl Default for TransformState {
    fn default() -> TransformState {
        TransformState {
            anchor: None,
            move_x: 0.0,
            move_y: 0.0,
            uniform_move: false,
            scale_x: 100.0,
            scale_y: 100.0,
            uniform_scale: false,
            rotate: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            uniform_skew: false,
            snap_grid: 1.0,
        }
    }
}

impl TransformState {
    fn move_amount(&self) -> Vec2 {
        let y = if self.uniform_move {
            self.move_x
        } else {
            self.move_y
        };
        Vec2::new(self.move_x, y)
    }

    fn scale_factors(&self) -> Vec2 {
        let y = if self.uniform_scale {
            self.scale_x
        } else {
            self.scale_y
        };
        Vec2::new(self.scale_x / 100.0, y / 100.0)
    }

    fn skew_angles(&self) -> Vec2 {
        let y = if self.uniform_skew {
            self.skew_x
        } else {
            self.skew_y
        };
        Vec2::new(self.skew_x, y)
    }
}

impl Workspace {
    pub fn new(selected: Option<GlyphDetail>, layers: Vec<Layer>) -> Workspace {
        Workspace {
            selected,
            layers: Arc::new(layers),
            transform: TransformState::default(),
        }
    }

    fn selected_bounds(&self) -> Option<Rect> {
        self.selected.as_ref().and_then(GlyphDetail::bounds)
    }

    /// The pivot the scale action will use, from the picker state and the
    /// inspected glyph's bounds.
    pub fn transform_origin(&self) -> Point {
        alignment::transform_origin(self.transform.anchor, self.selected_bounds())
    }

    pub fn nudge_selected(&mut self) {
        let delta = self.transform.move_amount();
        self.with_selected("move", |glyph| glyph.nudge(delta));
    }

    pub fn scale_selected(&mut self) {
        let origin = self.transform_origin();
        let scale = self.transform.scale_factors();
        self.with_selected("scale", |glyph| glyph.scale(scale, origin));
    }

    pub fn rotate_selected(&mut self) {
        let degrees = self.transform.rotate;
        self.with_selected("rotate", |glyph| glyph.rotate(degrees));
    }

    pub fn skew_selected(&mut self) {
        let angles = self.transform.skew_angles();
        self.with_selected("skew", |glyph| glyph.skew(angles));
    }

    pub fn snap_selected(&mut self) {
        let base = self.transform.snap_grid;
        self.with_selected("snap", |glyph| glyph.snap(base));
    }

    pub fn flip_selected_horizontal(&mut self) {
        self.with_selected("flip", GlyphDetail::flip_horizontal);
    }

    pub fn flip_selected_vertical(&mut self) {
        self.with_selected("flip", GlyphDetail::flip_vertical);
    }

    fn with_selected(&mut self, verb: &str, f: impl FnOnce(&mut GlyphDetail)) {
        match self.selected.as_mut() {
            Some(glyph) => f(glyph),
            None => log::warn!("{} with no glyph under inspection", verb),
        }
    }
}

/// Convert a norad outline to a kurbo path.
fn outline_to_bez(outline: &norad::glyph::Outline) -> BezPath {
    let mut bez = BezPath::new();
    for contour in &outline.contours {
        append_contour(contour, &mut bez);
    }
    bez
}

fn append_contour(contour: &norad::glyph::Contour, bez: &mut BezPath) {
    use norad::glyph::PointType;

    let points = &contour.points;
    // single points are anchors in older UFOs; they have no ink
    if points.len() < 2 {
        return;
    }
    let closed = !matches!(points[0].typ, PointType::Move);
    let mut ordered: Vec<&norad::glyph::ContourPoint> = points.iter().collect();
    if closed {
        // a closed contour can begin anywhere; start drawing from an
        // on-curve point
        match ordered
            .iter()
            .position(|p| !matches!(p.typ, PointType::OffCurve))
        {
            Some(idx) => ordered.rotate_left(idx),
            None => {
                log::warn!("contour has no on-curve points, skipping");
                return;
            }
        }
    }

    let start = ordered[0];
    bez.move_to(design_point(start));
    let mut off_curves: Vec<Point> = Vec::new();
    let mut rest: Vec<&norad::glyph::ContourPoint> = ordered[1..].to_vec();
    if closed {
        // revisit the start point to emit the closing segment
        rest.push(start);
    }
    for point in rest {
        match point.typ {
            PointType::OffCurve => off_curves.push(design_point(point)),
            _ => emit_segment(bez, &mut off_curves, design_point(point)),
        }
    }
    if closed {
        bez.close_path();
    }
}

fn emit_segment(bez: &mut BezPath, off_curves: &mut Vec<Point>, to: Point) {
    match off_curves.len() {
        0 => bez.line_to(to),
        1 => bez.quad_to(off_curves[0], to),
        2 => bez.curve_to(off_curves[0], off_curves[1], to),
        n => {
            log::warn!("{} off-curve points before an on-curve, flattening", n);
            bez.line_to(to);
        }
    }
    off_curves.clear();
}

fn design_point(point: &norad::glyph::ContourPoint) -> Point {
    Point::new(f64::from(point.x), f64::from(point.y))
}

pub mod lenses {
    use super::*;
    use druid::Lens;

    /// Reads a glyph's side bearings; writes move the outline (left) or
    /// adjust the advance (right).
    pub struct SidebearingLens;

    impl Lens<GlyphDetail, Sidebearings> for SidebearingLens {
        fn with<V, F: FnOnce(&Sidebearings) -> V>(&self, data: &GlyphDetail, f: F) -> V {
            let bearings = Sidebearings {
                left: data.left_side_bearing().unwrap_or(0.0),
                right: data.right_side_bearing().unwrap_or(0.0),
            };
            f(&bearings)
        }

        fn with_mut<V, F: FnOnce(&mut Sidebearings) -> V>(
            &self,
            data: &mut GlyphDetail,
            f: F,
        ) -> V {
            let old = Sidebearings {
                left: data.left_side_bearing().unwrap_or(0.0),
                right: data.right_side_bearing().unwrap_or(0.0),
            };
            let mut new = old;
            let r = f(&mut new);
            // empty glyphs have no bearings to edit
            if data.bounds().is_some() {
                if (new.left - old.left).abs() > f64::EPSILON {
                    data.set_left_side_bearing(new.left);
                }
                if (new.right - old.right).abs() > f64::EPSILON {
                    data.set_right_side_bearing(new.right);
                }
            }
            r
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use druid::Lens;

    fn test_glyph() -> GlyphDetail {
        let mut outline = BezPath::new();
        outline.move_to((20.0, 0.0));
        outline.line_to((80.0, 0.0));
        outline.line_to((80.0, 200.0));
        outline.line_to((20.0, 200.0));
        outline.close_path();
        GlyphDetail {
            name: "I".into(),
            codepoints: CodepointList::new(vec!['I']),
            advance: 100.0,
            outline: Arc::new(outline),
            mark: None,
        }
    }

    #[test]
    fn codepoint_display() {
        assert_eq!(CodepointList::new(vec!['A']).to_string(), "0041");
        assert_eq!(CodepointList::new(vec!['A', 'a']).to_string(), "0041 0061");
        assert_eq!(CodepointList::new(vec!['\u{1F600}']).to_string(), "01F600");
        assert_eq!(CodepointList::new(vec![]).to_string(), "");
    }

    #[test]
    fn codepoint_parse() {
        let list: CodepointList = "0041 0061".parse().unwrap();
        assert_eq!(list.as_slice(), &['A', 'a']);
        let empty: CodepointList = "".parse().unwrap();
        assert!(empty.as_slice().is_empty());
        let six: CodepointList = "01F600".parse().unwrap();
        assert_eq!(six.as_slice(), &['\u{1F600}']);

        assert!("41".parse::<CodepointList>().is_err());
        assert!("zzzz".parse::<CodepointList>().is_err());
        // a surrogate is valid hex but not a scalar value
        assert!("D800".parse::<CodepointList>().is_err());
    }

    #[test]
    fn sidebearings() {
        let glyph = test_glyph();
        assert_eq!(glyph.left_side_bearing(), Some(20.0));
        assert_eq!(glyph.right_side_bearing(), Some(20.0));

        let mut glyph = test_glyph();
        glyph.set_left_side_bearing(30.0);
        assert_eq!(glyph.left_side_bearing(), Some(30.0));
        assert_eq!(glyph.advance, 110.0);
        // moving the left edge leaves the right bearing alone
        assert_eq!(glyph.right_side_bearing(), Some(20.0));

        glyph.set_right_side_bearing(5.0);
        assert_eq!(glyph.advance, 95.0);
        assert_eq!(glyph.right_side_bearing(), Some(5.0));
    }

    #[test]
    fn sidebearing_lens_ignores_empty_glyph() {
        let mut glyph = test_glyph();
        glyph.outline = Arc::new(BezPath::new());
        GlyphDetail::sidebearings.with_mut(&mut glyph, |sb| {
            assert_eq!(sb.left, 0.0);
            sb.left = 50.0;
        });
        assert_eq!(glyph.advance, 100.0);
    }

    #[test]
    fn scale_keeps_anchor_fixed() {
        let mut glyph = test_glyph();
        let origin = Point::new(20.0, 0.0); // bottom-left of the bounds
        glyph.scale(Vec2::new(2.0, 0.5), origin);
        let bounds = glyph.bounds().unwrap();
        assert_eq!(bounds.min_x(), 20.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.max_x(), 140.0);
        assert_eq!(bounds.max_y(), 100.0);
    }

    #[test]
    fn flip_twice_is_identity() {
        let mut glyph = test_glyph();
        let before = glyph.bounds().unwrap();
        glyph.flip_horizontal();
        assert_eq!(glyph.bounds().unwrap(), before);
        glyph.flip_vertical();
        glyph.flip_vertical();
        assert_eq!(glyph.bounds().unwrap(), before);
    }

    #[test]
    fn snap_rounds_coordinates() {
        let mut glyph = test_glyph();
        glyph.nudge(Vec2::new(1.4, 2.6));
        glyph.snap(1.0);
        let bounds = glyph.bounds().unwrap();
        assert_eq!(bounds.min_x(), 21.0);
        assert_eq!(bounds.min_y(), 3.0);

        // a degenerate base leaves the outline alone
        let before = glyph.bounds().unwrap();
        glyph.snap(0.0);
        assert_eq!(glyph.bounds().unwrap(), before);
    }

    #[test]
    fn transform_actions_use_panel_state() {
        let mut workspace = Workspace::new(Some(test_glyph()), Vec::new());
        workspace.transform.move_x = 10.0;
        workspace.transform.uniform_move = true;
        workspace.nudge_selected();
        let bounds = workspace.selected.as_ref().unwrap().bounds().unwrap();
        assert_eq!(bounds.min_x(), 30.0);
        assert_eq!(bounds.min_y(), 10.0);

        // no glyph selected: actions are no-ops rather than errors
        let mut empty = Workspace::new(None, Vec::new());
        empty.scale_selected();
        assert!(empty.selected.is_none());
    }

    #[test]
    fn scale_origin_follows_picker() {
        let mut workspace = Workspace::new(Some(test_glyph()), Vec::new());
        assert_eq!(workspace.transform_origin(), Point::ZERO);
        workspace.transform.anchor = Some(Anchor::TopRight);
        assert_eq!(workspace.transform_origin(), Point::new(80.0, 200.0));
    }

    #[test]
    fn norad_conversion() {
        use norad::glyph::{Contour, ContourPoint, Outline, PointType};
        let points = vec![
            ContourPoint::new(0.0, 0.0, PointType::Line, false, None, None, None),
            ContourPoint::new(100.0, 0.0, PointType::Line, false, None, None, None),
            ContourPoint::new(100.0, 100.0, PointType::Line, false, None, None, None),
            ContourPoint::new(0.0, 100.0, PointType::Line, false, None, None, None),
        ];
        let outline = Outline {
            contours: vec![Contour::new(points, None, None)],
            components: vec![],
        };
        let mut glyph = norad::Glyph::new_named("box");
        glyph.outline = Some(outline);
        let detail = GlyphDetail::from_norad(&glyph);
        assert_eq!(
            detail.bounds().unwrap(),
            Rect::new(0.0, 0.0, 100.0, 100.0)
        );
    }
}
