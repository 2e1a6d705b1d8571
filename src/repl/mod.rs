//! Text command parsing for the interactive frontend.
//!
//! This module translates REPL input lines into [`Command`] values and
//! resolves item-addressing commands into concrete [`Action`] dispatches.
//! It is the boundary between what the user types and the fixed action
//! interface of the state core: everything here is wiring, and none of it
//! changes core semantics.
//!
//! # Addressing Items
//!
//! Commands refer to items by the 1-based ordinal shown in the current view
//! (`check 2` means the second visible row). [`resolve`] maps the ordinal
//! back to the item's stable id against a state snapshot before dispatching,
//! exactly like a click handler capturing the id of the row it sits on.
//!
//! # Example
//!
//! ```
//! use ticklist::repl::{parse_command, resolve};
//! use ticklist::SessionState;
//!
//! let state = SessionState::new();
//! let command = parse_command("add buy milk").unwrap();
//! let actions = resolve(command, &state).unwrap();
//! assert_eq!(actions.len(), 2); // SetInputText + Submit
//! ```

use crate::app::{Action, Filter, SessionState};
use crate::domain::{Result, TicklistError};

/// A parsed REPL command.
///
/// Item-addressing variants carry the 1-based ordinal from the visible list;
/// [`resolve`] turns them into id-addressed actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the input buffer without submitting.
    Input(String),
    /// Submit the current input buffer.
    Submit,
    /// Set the buffer and submit in one step.
    Add(String),
    /// Replace the text of a visible item.
    Edit { target: usize, text: String },
    /// Set the completion flag of a visible item.
    Check { target: usize, completed: bool },
    /// Flip the soft-delete flag of a visible item.
    Remove { target: usize },
    /// Permanently drop everything in the trash.
    Purge,
    /// Switch the active view filter.
    SetFilter(Filter),
    /// Re-render the current view.
    Show,
    /// Print the item list as JSON.
    Export,
    /// Print the command reference.
    Help,
    /// Leave the session.
    Quit,
}

/// Parses one input line into a [`Command`].
///
/// The first whitespace-separated token selects the command; the remainder
/// of the line (untrimmed between words) becomes the text argument where one
/// applies. A blank line re-renders the current view.
///
/// # Errors
///
/// Returns [`TicklistError::Command`] for unknown commands and malformed
/// item ordinals.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Show);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    match verb {
        "input" | "i" => Ok(Command::Input(rest.to_string())),
        "submit" => Ok(Command::Submit),
        "add" | "a" => Ok(Command::Add(rest.to_string())),
        "edit" | "e" => {
            let (target, text) = match rest.split_once(char::is_whitespace) {
                Some((ordinal, text)) => (parse_ordinal(ordinal)?, text.trim_start()),
                None => (parse_ordinal(rest)?, ""),
            };
            Ok(Command::Edit {
                target,
                text: text.to_string(),
            })
        }
        "check" | "done" => Ok(Command::Check {
            target: parse_ordinal(rest)?,
            completed: true,
        }),
        "uncheck" | "undone" => Ok(Command::Check {
            target: parse_ordinal(rest)?,
            completed: false,
        }),
        "rm" | "del" => Ok(Command::Remove {
            target: parse_ordinal(rest)?,
        }),
        "purge" => Ok(Command::Purge),
        "filter" | "f" => Ok(Command::SetFilter(rest.parse()?)),
        "show" | "ls" => Ok(Command::Show),
        "export" => Ok(Command::Export),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(TicklistError::Command(format!(
            "unknown command '{other}' (try 'help')"
        ))),
    }
}

/// Resolves a dispatchable command into actions against a state snapshot.
///
/// Ordinals are looked up in the currently visible list, newest first, and
/// replaced with the matching item's stable id. Display-only commands
/// ([`Command::Show`], [`Command::Export`], [`Command::Help`],
/// [`Command::Quit`]) resolve to an empty action list; the frontend handles
/// them without touching the core.
///
/// # Errors
///
/// Returns [`TicklistError::Command`] when an ordinal falls outside the
/// visible list.
pub fn resolve(command: Command, state: &SessionState) -> Result<Vec<Action>> {
    match command {
        Command::Input(text) => Ok(vec![Action::SetInputText(text)]),
        Command::Submit => Ok(vec![Action::Submit]),
        Command::Add(text) => Ok(vec![Action::SetInputText(text), Action::Submit]),
        Command::Edit { target, text } => {
            let id = target_id(state, target)?;
            Ok(vec![Action::EditItem { id, text }])
        }
        Command::Check { target, completed } => {
            let id = target_id(state, target)?;
            Ok(vec![Action::SetCompleted { id, completed }])
        }
        Command::Remove { target } => {
            let id = target_id(state, target)?;
            Ok(vec![Action::ToggleDeleted { id }])
        }
        Command::Purge => Ok(vec![Action::PurgeDeleted]),
        Command::SetFilter(filter) => Ok(vec![Action::SetFilter(filter)]),
        Command::Show | Command::Export | Command::Help | Command::Quit => Ok(vec![]),
    }
}

/// Returns the command reference printed by `help`.
#[must_use]
pub const fn help_text() -> &'static str {
    "Commands:\n\
     \x20 add <text>        create a task (input + submit in one step)\n\
     \x20 input <text>      stage text without submitting\n\
     \x20 submit            submit the staged text\n\
     \x20 edit <n> <text>   replace the text of visible item n\n\
     \x20 check <n>         mark visible item n as done\n\
     \x20 uncheck <n>       reopen visible item n\n\
     \x20 rm <n>            move item n to the trash (or restore it)\n\
     \x20 purge             permanently empty the trash\n\
     \x20 filter <view>     switch view: all, done, todo, trash\n\
     \x20 show              re-render the current view\n\
     \x20 export            print all items as JSON\n\
     \x20 help              this text\n\
     \x20 quit              leave"
}

/// Maps a 1-based visible ordinal to the item's stable id.
fn target_id(state: &SessionState, ordinal: usize) -> Result<i64> {
    let visible = state.visible_items();

    ordinal
        .checked_sub(1)
        .and_then(|idx| visible.get(idx))
        .map(|item| item.id)
        .ok_or_else(|| {
            TicklistError::Command(format!(
                "no item {ordinal} in the current view (showing {})",
                visible.len()
            ))
        })
}

/// Parses a 1-based ordinal token.
fn parse_ordinal(token: &str) -> Result<usize> {
    let token = token.trim();
    token.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
        TicklistError::Command(format!("'{token}' is not an item number"))
    })
}
