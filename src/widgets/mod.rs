//! Druid `Widget`s.

mod alignment_picker;
mod color_well;
mod inspector;
mod maybe;

pub use alignment_picker::AlignmentPicker;
pub use color_well::ColorWell;
pub use inspector::InspectorPanel;

use maybe::Maybe;
