use std::io::Write;

use ticklist::{Config, Theme, TicklistError};

#[test]
fn builtin_themes_load_by_name() {
    let mocha = Theme::from_name("catppuccin-mocha").unwrap();
    assert_eq!(mocha.name, "catppuccin-mocha");
    assert!(mocha.colors.header_bg.is_none());

    let latte = Theme::from_name("catppuccin-latte").unwrap();
    assert_eq!(latte.name, "catppuccin-latte");
    assert!(latte.colors.header_bg.is_some());

    assert!(Theme::from_name("solarized").is_none());
}

#[test]
fn default_theme_is_mocha() {
    assert_eq!(Theme::default().name, "catppuccin-mocha");
}

#[test]
fn custom_theme_loads_from_a_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
name = "plain"

[colors]
header_fg = "#ffffff"
text_normal = "#ffffff"
text_dim = "#888888"
text_done = "#00ff00"
text_removed = "#ff0000"
accent = "#0000ff"
border = "#444444"
prompt_fg = "#ff00ff"
empty_state_fg = "#0000ff"
"##
    )
    .unwrap();

    let theme = Theme::from_file(file.path()).unwrap();
    assert_eq!(theme.name, "plain");
    assert_eq!(theme.colors.text_done, "#00ff00");
    assert!(theme.colors.header_bg.is_none());
}

#[test]
fn theme_loading_reports_missing_and_malformed_files() {
    let missing = Theme::from_file("/nonexistent/theme.toml");
    assert!(matches!(missing, Err(TicklistError::Theme(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name = \"broken\"").unwrap();
    let malformed = Theme::from_file(file.path());
    assert!(matches!(malformed, Err(TicklistError::Theme(_))));
}

#[test]
fn fg_produces_truecolor_escapes_and_tolerates_bad_hex() {
    assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
    assert_eq!(Theme::bg("00ff00"), "\u{1b}[48;2;0;255;0m");

    // Malformed colors fall back to white instead of breaking rendering.
    assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
}

#[test]
fn non_ascii_color_values_fall_back_to_white() {
    // Six bytes but two characters; slicing by byte range would panic.
    assert_eq!(Theme::fg("✓✓"), "\u{1b}[38;2;255;255;255m");
    assert_eq!(Theme::fg("#ααα"), "\u{1b}[38;2;255;255;255m");
    assert_eq!(Theme::bg("é0é0"), "\u{1b}[48;2;255;255;255m");
}

#[test]
fn config_parses_from_a_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
theme = "catppuccin-latte"
trace_level = "debug"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.theme.as_deref(), Some("catppuccin-latte"));
    assert_eq!(config.theme_file, None);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
}

#[test]
fn config_rejects_malformed_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme = [not toml").unwrap();

    let result = Config::from_file(file.path());
    assert!(matches!(result, Err(TicklistError::Config(_))));
}

#[test]
fn empty_config_yields_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.theme, None);
    assert_eq!(config.theme_file, None);
    assert_eq!(config.trace_level, None);
}

#[test]
fn theme_resolution_falls_back_to_default() {
    let config = Config {
        theme: Some("does-not-exist".to_string()),
        theme_file: None,
        trace_level: None,
    };
    assert_eq!(ticklist::load_theme(&config).name, "catppuccin-mocha");

    let config = Config {
        theme: None,
        theme_file: Some("/nonexistent/theme.toml".to_string()),
        trace_level: None,
    };
    assert_eq!(ticklist::load_theme(&config).name, "catppuccin-mocha");
}
