//! Draft prompt component renderer.
//!
//! Shows the not-yet-submitted input buffer so the user can see what
//! `submit` would create.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::PromptInfo;

/// Renders the pending-draft line.
pub fn render_prompt(prompt: &PromptInfo, theme: &Theme) {
    print!("{}", Theme::fg(&theme.colors.prompt_fg));
    print!(" draft: {}", prompt.buffer);
    println!("{}", Theme::reset());
}
