//! Command parsing for the monco prompt
//!
//! Parses user input in Command mode, supporting both long and short names:
//! - `help` / `h` → Help
//! - `add` / `a` → Add an entry
//! - `del` / `d` → Delete an entry
//! - `list` / `l` → List all entries
//! - `search` / `s` → Search entries with a query
//! - `quit` / `q` → Quit
//!
//! Lines submitted while a prompt is pending (entry text, entry number,
//! search query) are not commands and are passed through untouched.

use crate::app::{AppEvent, AppMode};

/// Commands that can be parsed from the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Add,
    Delete,
    List,
    Search,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse a command-mode input line into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    match input {
        "" => Command::Empty,
        "help" | "h" => Command::Help,
        "add" | "a" => Command::Add,
        "del" | "d" => Command::Delete,
        "list" | "l" => Command::List,
        "search" | "s" => Command::Search,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Help => AppEvent::Help,
        Command::Add => AppEvent::BeginAdd,
        Command::Delete => AppEvent::BeginDelete,
        Command::List => AppEvent::List,
        Command::Search => AppEvent::BeginSearch,
        Command::Quit => AppEvent::Quit,
        Command::Empty => AppEvent::None,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

/// Translate a submitted line into an AppEvent for the given mode
pub fn line_to_app_event(mode: AppMode, line: &str) -> AppEvent {
    match mode {
        AppMode::Command => command_to_app_event(parse_command(line)),
        AppMode::AddEntry => AppEvent::SubmitEntry(line.to_string()),
        AppMode::DeleteEntry => AppEvent::SubmitIndex(line.to_string()),
        AppMode::Search => AppEvent::SubmitQuery(line.to_string()),
        AppMode::Quit => AppEvent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_names() {
        let cases = [
            ("help", "h", Command::Help),
            ("add", "a", Command::Add),
            ("del", "d", Command::Delete),
            ("list", "l", Command::List),
            ("search", "s", Command::Search),
            ("quit", "q", Command::Quit),
        ];
        for (long, short, expected) in cases {
            assert_eq!(parse_command(long), expected);
            assert_eq!(parse_command(short), expected);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_command("  list "), Command::List);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn test_parse_invalid_command() {
        assert_eq!(
            parse_command("delete"),
            Command::Unknown("delete".to_string())
        );
        assert_eq!(parse_command("H"), Command::Unknown("H".to_string()));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Add), AppEvent::BeginAdd);
        assert_eq!(command_to_app_event(Command::Search), AppEvent::BeginSearch);
        assert_eq!(command_to_app_event(Command::Empty), AppEvent::None);
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }

    #[test]
    fn test_line_in_search_mode_is_a_query() {
        assert_eq!(
            line_to_app_event(AppMode::Search, " a | b "),
            AppEvent::SubmitQuery(" a | b ".to_string())
        );
    }

    #[test]
    fn test_line_in_add_mode_is_not_parsed_as_command() {
        assert_eq!(
            line_to_app_event(AppMode::AddEntry, "q"),
            AppEvent::SubmitEntry("q".to_string())
        );
    }

    #[test]
    fn test_line_in_delete_mode_is_an_index() {
        assert_eq!(
            line_to_app_event(AppMode::DeleteEntry, "2"),
            AppEvent::SubmitIndex("2".to_string())
        );
    }
}
