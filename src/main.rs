//! Interactive frontend and entry point.
//!
//! A line-oriented loop around the state core: read a command, translate it
//! to actions, dispatch each through the transition function, then re-render
//! the filtered view from the new snapshot. The loop owns the session state
//! for the whole run; there is no other copy and no global.
//!
//! Display-only commands (`show`, `export`, `help`, `quit`) are handled here
//! without touching the core. Parse and resolution errors print a styled
//! message and leave the state exactly as it was.

use std::io::{BufRead, Write};

use ticklist::repl::{self, Command};
use ticklist::{transition, ui, Config, Theme, TicklistError};

/// Fallback terminal width when `COLUMNS` is unset or unparsable.
const DEFAULT_COLS: usize = 80;

fn main() {
    let config = Config::load();
    ticklist::observability::init_tracing(&config);

    let span = tracing::debug_span!("session");
    let _guard = span.entered();

    let theme = ticklist::load_theme(&config);
    let mut state = ticklist::initialize(&config);
    let cols = terminal_cols();

    println!("ticklist - type 'help' for commands");
    ui::render(&state, &theme, cols);

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "stdin read failed");
                break;
            }
        }

        let command = match repl::parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                print_error(&e, &theme);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", repl::help_text()),
            Command::Show => ui::render(&state, &theme, cols),
            Command::Export => export_items(&state, &theme),
            other => match repl::resolve(other, &state) {
                Ok(actions) => {
                    for action in actions {
                        state = transition(state, action);
                    }
                    ui::render(&state, &theme, cols);
                }
                Err(e) => print_error(&e, &theme),
            },
        }
    }

    tracing::debug!(items = state.items.len(), "session ended");
}

/// Prints the full item list as pretty JSON.
fn export_items(state: &ticklist::SessionState, theme: &Theme) {
    match serde_json::to_string_pretty(&state.items) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&TicklistError::Command(format!("export failed: {e}")), theme),
    }
}

/// Prints an error message in the removed color.
fn print_error(error: &TicklistError, theme: &Theme) {
    println!(
        "{}{error}{}",
        Theme::fg(&theme.colors.text_removed),
        Theme::reset()
    );
}

/// Reads the terminal width from the `COLUMNS` environment variable.
fn terminal_cols() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_COLS)
}
