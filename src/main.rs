//! A small shell that runs the inspector panel on its own, with a
//! placeholder glyph.

use druid::{AppLauncher, LocalizedString, WindowDesc};

use glyph_inspector::widgets::InspectorPanel;
use glyph_inspector::{theme, util};

fn main() {
    let state = util::create_demo_workspace();
    let window = WindowDesc::new(InspectorPanel::new)
        .title(LocalizedString::new("Inspector"))
        .window_size((340.0, 560.0));
    AppLauncher::with_window(window)
        .configure_env(|env, _| theme::configure_env(env))
        .use_simple_logger()
        .launch(state)
        .expect("failed to launch application");
}
