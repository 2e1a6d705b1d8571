//! List component renderer.
//!
//! Renders one line per visible item: ordinal, checkbox, text, and creation
//! age. Completed text is struck through in the done color; soft-deleted text
//! is dimmed in the removed color with a trash marker.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ItemRow;

/// Fixed width of the text column, in characters.
const TEXT_COLUMN_WIDTH: usize = 44;

/// Renders all item rows in list order.
pub fn render_rows(rows: &[ItemRow], theme: &Theme) {
    for row in rows {
        render_row(row, theme);
    }
}

/// Renders a single item row.
///
/// Styling precedence: the removed style wins over the completed style, so a
/// completed item in the trash reads as trashed.
fn render_row(row: &ItemRow, theme: &Theme) {
    let checkbox = if row.completed { "[x]" } else { "[ ]" };

    print!("{}", Theme::fg(&theme.colors.accent));
    print!(" {:>3}. {checkbox} ", row.ordinal);
    print!("{}", Theme::reset());

    let text = helpers::truncate(&row.text, TEXT_COLUMN_WIDTH);
    if row.removed {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_removed));
    } else if row.completed {
        print!("{}{}", Theme::strike(), Theme::fg(&theme.colors.text_done));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", helpers::pad_right(&text, TEXT_COLUMN_WIDTH));
    print!("{}", Theme::reset());

    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("  {}", row.age);
    if row.removed {
        print!("  (in trash)");
    }
    println!("{}", Theme::reset());
}
