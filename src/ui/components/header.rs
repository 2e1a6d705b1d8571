//! Header component renderer.
//!
//! Renders the title bar (filter label plus visible count) centered, bold,
//! and padded to the full terminal width.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar.
///
/// Padding is split evenly on both sides; when the width cannot divide
/// evenly, the left side gets the smaller half.
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = header.title.chars().count();
    let padding = helpers::centered_padding(&header.title, cols);

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    println!("{}", Theme::reset());
}
