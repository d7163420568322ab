//! Colors and other things that we like.

use druid::{Color, Env, FontDescriptor, Key};

pub const PANEL_BACKGROUND: Key<Color> = Key::new("glyph-inspector.panel-background");

/// The color for primary text and the picker's selected circle.
pub const PRIMARY_TEXT_COLOR: Key<Color> = Key::new("glyph-inspector.primary-text-color");
/// The color for secondary text like field labels.
pub const SECONDARY_TEXT_COLOR: Key<Color> = Key::new("glyph-inspector.secondary-text-color");

/// The stroke color for the alignment picker's border and circles.
pub const PICKER_OUTLINE_COLOR: Key<Color> = Key::new("glyph-inspector.picker-outline-color");

/// The border color for color wells.
pub const COLOR_WELL_STROKE: Key<Color> = Key::new("glyph-inspector.color-well-stroke");

/// The font used for field and section labels.
pub const UI_DETAIL_FONT: Key<FontDescriptor> = Key::new("glyph-inspector.detail-font");

pub fn configure_env(env: &mut Env) {
    env.set(PANEL_BACKGROUND, Color::grey8(0xDD));
    env.set(PRIMARY_TEXT_COLOR, Color::grey8(0x10));
    env.set(SECONDARY_TEXT_COLOR, Color::grey8(0x4a));
    env.set(PICKER_OUTLINE_COLOR, Color::grey8(0x2d));
    env.set(COLOR_WELL_STROKE, Color::grey8(0x2d));
    env.set(UI_DETAIL_FONT, FontDescriptor::default().with_size(12.0));
}
