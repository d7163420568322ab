//! shared constants

/// Commands and Selectors
pub mod cmd {
    use std::sync::Arc;

    use druid::Selector;

    use crate::data::{GlyphDetail, Layer};

    /// Sent by a host when the glyph under inspection changes.
    ///
    /// The payload is the new glyph, or `None` to clear the panel. Hosts
    /// that mutate `Workspace::selected` directly don't need this; it
    /// exists for editors that drive their panels by notification.
    pub const SET_GLYPH: Selector<Option<GlyphDetail>> =
        Selector::new("glyph-inspector.set-glyph");

    /// Sent by a host when the open font (and so its layer set) changes.
    pub const SET_LAYERS: Selector<Arc<Vec<Layer>>> =
        Selector::new("glyph-inspector.set-layers");
}
