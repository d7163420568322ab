//! An inspector panel for a druid-based font editor: glyph metadata
//! fields, transform actions around a pickable origin, and the font's
//! layer list.

pub mod alignment;
pub mod consts;
pub mod data;
pub mod formatters;
pub mod theme;
pub mod util;
pub mod widgets;

pub use alignment::Anchor;
pub use data::{GlyphDetail, Layer, Workspace};
pub use widgets::InspectorPanel;
