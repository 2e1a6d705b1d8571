//! Top-level rendering coordinator.
//!
//! Provides the main rendering entry point: compute the view model from the
//! current state snapshot, then delegate to the component renderers. The
//! filtered view is recomputed here on every call; nothing about rendering
//! mutates stored state.

use crate::app::SessionState;
use crate::ui::components;
use crate::ui::theme::Theme;

/// Renders the current session state to stdout.
///
/// # Parameters
///
/// * `state` - Current session state snapshot
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
pub fn render(state: &SessionState, theme: &Theme, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    components::render_list_view(&viewmodel, theme, cols);
}
