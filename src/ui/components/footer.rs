//! Footer component renderer.
//!
//! Renders the centered command-hint line below the list.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help line with dimmed styling.
///
/// Hints longer than the terminal width are printed as-is rather than
/// truncated; narrow terminals wrap instead of losing commands.
pub fn render_footer(footer: &FooterInfo, theme: &Theme, cols: usize) {
    let padding = helpers::centered_padding(&footer.commands, cols);

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", footer.commands);
    println!("{}", Theme::reset());
}
