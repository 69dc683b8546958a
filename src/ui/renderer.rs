//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the route's layout

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, ViewBody};

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using `print!`. Does not clear the screen; the
/// host does that before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        ViewBody::List(list) => components::render_list_view(vm, list, theme, cols, rows),
        ViewBody::Details(details) => components::render_details_view(vm, details, theme, cols, rows),
    }
}
