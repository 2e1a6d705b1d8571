//! Composable UI component renderers.
//!
//! Each component renders one part of the list view to stdout. Output flows
//! line by line in document order; there is no cursor addressing, so the view
//! scrolls naturally in the terminal history after each command.
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header: filter label + count]
//! [Border]
//! [Item rows, or empty state]
//! [Draft prompt, when a buffer is pending]
//! [Border]
//! [Footer: command hints]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod prompt;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListViewModel;

/// Renders the full list view from a view model.
pub fn render_list_view(vm: &ListViewModel, theme: &Theme, cols: usize) {
    println!();
    header::render_header(&vm.header, theme, cols);
    render_border(&theme.colors.border, cols);

    if let Some(state) = &vm.empty_state {
        empty::render_empty_state(state, theme, cols);
    } else {
        list::render_rows(&vm.rows, theme);
    }

    if let Some(draft) = &vm.prompt {
        prompt::render_prompt(draft, theme);
    }

    render_border(&theme.colors.border, cols);
    footer::render_footer(&vm.footer, theme, cols);
}

/// Renders a horizontal separator line.
fn render_border(color: &str, cols: usize) {
    println!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
}
