//! A little swatch for editing mark-style colors.

use druid::kurbo::Line;
use druid::widget::prelude::*;

use crate::data::Rgba;
use crate::theme;

const WELL_SIZE: Size = Size::new(28.0, 14.0);
const CORNER_RADIUS: f64 = 2.0;

/// The colors a well steps through, in order.
///
/// There is no system color dialog to reach for here, so the well cycles
/// a small palette of the usual mark colors on click.
static PALETTE: &[Rgba] = &[
    Rgba::new(1.0, 0.0, 0.0, 0.5),
    Rgba::new(1.0, 0.5, 0.0, 0.5),
    Rgba::new(1.0, 1.0, 0.0, 0.5),
    Rgba::new(0.0, 0.8, 0.0, 0.5),
    Rgba::new(0.0, 0.4, 1.0, 0.5),
    Rgba::new(0.6, 0.0, 0.8, 0.5),
];

/// A clickable color swatch bound to an `Option<Rgba>`.
///
/// Each click advances to the next palette color; wells that may clear
/// their color step to `None` after the last one, drawn as a slashed
/// empty well.
pub struct ColorWell {
    may_clear: bool,
}

impl ColorWell {
    pub fn new() -> ColorWell {
        ColorWell { may_clear: true }
    }

    /// Builder-style method for wells whose color can't be removed, like
    /// layer colors.
    pub fn may_clear(mut self, may_clear: bool) -> Self {
        self.may_clear = may_clear;
        self
    }
}

impl Default for ColorWell {
    fn default() -> Self {
        ColorWell::new()
    }
}

/// The palette entry after `current`, wrapping through `None` when the
/// well may clear.
fn next_color(current: Option<Rgba>, may_clear: bool) -> Option<Rgba> {
    let idx = current.and_then(|c| PALETTE.iter().position(|p| *p == c));
    match idx {
        None => Some(PALETTE[0]),
        Some(i) if i + 1 < PALETTE.len() => Some(PALETTE[i + 1]),
        Some(_) if may_clear => None,
        Some(_) => Some(PALETTE[0]),
    }
}

impl Widget<Option<Rgba>> for ColorWell {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Option<Rgba>, _env: &Env) {
        match event {
            Event::MouseDown(mouse) if mouse.button.is_left() => {
                ctx.set_active(true);
                *data = next_color(*data, self.may_clear);
                ctx.request_paint();
            }
            Event::MouseUp(_) => {
                if ctx.is_active() {
                    ctx.set_active(false);
                }
            }
            _ => (),
        }
    }

    fn lifecycle(&mut self, _: &mut LifeCycleCtx, _: &LifeCycle, _: &Option<Rgba>, _: &Env) {}

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old_data: &Option<Rgba>,
        data: &Option<Rgba>,
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
        _data: &Option<Rgba>,
        _env: &Env,
    ) -> Size {
        bc.constrain(WELL_SIZE)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Option<Rgba>, env: &Env) {
        let frame = ctx.size().to_rect().inset(-0.5);
        let rounded = frame.to_rounded_rect(CORNER_RADIUS);
        match data {
            Some(color) => ctx.fill(rounded, &color.to_druid()),
            None => {
                // an empty well reads as "no color": white with a slash
                ctx.fill(rounded, &druid::Color::WHITE);
                let slash = Line::new(
                    (frame.min_x(), frame.max_y()),
                    (frame.max_x(), frame.min_y()),
                );
                ctx.stroke(slash, &env.get(theme::COLOR_WELL_STROKE), 1.0);
            }
        }
        ctx.stroke(rounded, &env.get(theme::COLOR_WELL_STROKE), 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_reaches_none_and_wraps() {
        let mut color = None;
        for expected in PALETTE {
            color = next_color(color, true);
            assert_eq!(color, Some(*expected));
        }
        color = next_color(color, true);
        assert_eq!(color, None);
        assert_eq!(next_color(color, true), Some(PALETTE[0]));
    }

    #[test]
    fn non_clearing_wells_skip_none() {
        let last = Some(PALETTE[PALETTE.len() - 1]);
        assert_eq!(next_color(last, false), Some(PALETTE[0]));
    }

    #[test]
    fn unknown_colors_restart_the_cycle() {
        let custom = Some(Rgba::new(0.1, 0.2, 0.3, 1.0));
        assert_eq!(next_color(custom, true), Some(PALETTE[0]));
    }
}
