//! The 3×3 grid for picking a transform origin.

use druid::kurbo::Circle;
use druid::widget::prelude::*;
use druid::{Point, Rect};

use crate::alignment::{self, Anchor};
use crate::theme;

const CIRCLE_RADIUS: f64 = 4.0;
const PADDING: f64 = 1.0;

/// A widget for picking one of nine anchor positions, or none.
///
/// The anchors are drawn as radio-style circles sitting on the corners,
/// edge midpoints, and center of a square border; the selected one is
/// filled solid. Clicking the selected circle again clears the selection.
#[derive(Debug, Default)]
pub struct AlignmentPicker;

impl AlignmentPicker {
    pub fn new() -> AlignmentPicker {
        AlignmentPicker
    }

    /// The square the border is drawn in: the largest square that fits the
    /// frame, horizontally centered, inset so the circles on its edges stay
    /// inside the frame.
    fn border_rect(size: Size) -> Rect {
        let side = size.min_side();
        let x_offset = (size.width - side) / 2.0;
        Rect::from_origin_size((x_offset, 0.0), Size::new(side, side))
            .inset(-(CIRCLE_RADIUS + PADDING))
    }

    fn circle_for(border: Rect, anchor: Anchor) -> Circle {
        let (row, col) = anchor.grid_pos();
        let center = Point::new(
            border.min_x() + col as f64 * 0.5 * border.width(),
            border.min_y() + row as f64 * 0.5 * border.height(),
        );
        Circle::new(center, CIRCLE_RADIUS)
    }

    /// The anchor whose circle contains `pos`, scanning in row-major order.
    fn anchor_at(pos: Point, size: Size) -> Option<Anchor> {
        let border = Self::border_rect(size);
        Anchor::all()
            .iter()
            .copied()
            .find(|anchor| Self::circle_for(border, *anchor).center.distance(pos) <= CIRCLE_RADIUS)
    }
}

impl Widget<Option<Anchor>> for AlignmentPicker {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Option<Anchor>, _env: &Env) {
        match event {
            Event::MouseDown(mouse) if mouse.button.is_left() => {
                ctx.set_active(true);
                if let Some(anchor) = Self::anchor_at(mouse.pos, ctx.size()) {
                    alignment::toggle(data, anchor);
                    ctx.request_paint();
                }
            }
            Event::MouseUp(_) => {
                if ctx.is_active() {
                    ctx.set_active(false);
                }
            }
            _ => (),
        }
    }

    fn lifecycle(&mut self, _: &mut LifeCycleCtx, _: &LifeCycle, _: &Option<Anchor>, _: &Env) {}

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old_data: &Option<Anchor>,
        data: &Option<Anchor>,
        _env: &Env,
    ) {
        if old_data != data {
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &Option<Anchor>,
        _env: &Env,
    ) -> Size {
        let side = bc.max().min_side();
        bc.constrain(Size::new(side, side))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Option<Anchor>, env: &Env) {
        let border = Self::border_rect(ctx.size());
        let outline = env.get(theme::PICKER_OUTLINE_COLOR);
        let hole = env.get(theme::PANEL_BACKGROUND);
        ctx.stroke(border, &outline, 1.0);
        for anchor in Anchor::all() {
            let circle = Self::circle_for(border, *anchor);
            // knock the circle out of the border stroke before outlining it
            ctx.fill(circle, &hole);
            ctx.stroke(circle, &outline, 1.0);
            if *data == Some(*anchor) {
                ctx.fill(circle, &env.get(theme::PRIMARY_TEXT_COLOR));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(48.0, 48.0);

    #[test]
    fn circles_span_the_border() {
        let border = AlignmentPicker::border_rect(SIZE);
        let top_left = AlignmentPicker::circle_for(border, Anchor::TopLeft);
        assert_eq!(top_left.center, border.origin());
        let bottom_right = AlignmentPicker::circle_for(border, Anchor::BottomRight);
        assert_eq!(
            bottom_right.center,
            Point::new(border.max_x(), border.max_y())
        );
        let center = AlignmentPicker::circle_for(border, Anchor::Center);
        assert_eq!(center.center, border.center());
    }

    #[test]
    fn hit_center_circle() {
        let border = AlignmentPicker::border_rect(SIZE);
        assert_eq!(
            AlignmentPicker::anchor_at(border.center(), SIZE),
            Some(Anchor::Center)
        );
        assert_eq!(Anchor::Center.index(), 4);
    }

    #[test]
    fn hit_corner_circle() {
        let border = AlignmentPicker::border_rect(SIZE);
        assert_eq!(
            AlignmentPicker::anchor_at(border.origin(), SIZE),
            Some(Anchor::TopLeft)
        );
    }

    #[test]
    fn miss_between_circles() {
        let border = AlignmentPicker::border_rect(SIZE);
        // a quarter of the way along the top edge is well clear of any circle
        let pos = Point::new(border.min_x() + border.width() * 0.25, border.min_y());
        assert_eq!(AlignmentPicker::anchor_at(pos, SIZE), None);
    }

    #[test]
    fn wide_frames_center_the_square() {
        let size = Size::new(96.0, 48.0);
        let border = AlignmentPicker::border_rect(size);
        assert_eq!(border.min_x(), 24.0 + CIRCLE_RADIUS + PADDING);
        // the grid still hit-tests in the centered square
        assert_eq!(
            AlignmentPicker::anchor_at(border.center(), size),
            Some(Anchor::Center)
        );
    }
}
