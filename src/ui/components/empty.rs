//! Empty state component renderer.
//!
//! Renders the centered two-line message shown when the active view has no
//! items: the primary message in the empty-state color, the subtitle dimmed.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message and subtitle.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    println!();

    let msg_padding = helpers::centered_padding(&empty.message, cols);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    println!("{}", Theme::reset());

    let sub_padding = helpers::centered_padding(&empty.subtitle, cols);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    println!("{}", Theme::reset());

    println!();
}
