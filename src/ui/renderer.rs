//! Top-level rendering entry point.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from state, then hand
//! it to the component layout. Keeping them apart lets tests assert on the
//! view model without capturing stdout.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel: UIViewModel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
