/// Command loop state
///
/// Every mode other than `Command` and `Quit` waits for exactly one line of
/// input and then falls back to `Command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Command,
    AddEntry,
    DeleteEntry,
    Search,
    Quit,
}

impl AppMode {
    /// Whether the next submitted line is a payload rather than a command
    pub fn awaits_input(self) -> bool {
        matches!(self, AppMode::AddEntry | AppMode::DeleteEntry | AppMode::Search)
    }

    pub fn label(self) -> &'static str {
        match self {
            AppMode::Command => " COMMAND ",
            AppMode::AddEntry => " ADD ",
            AppMode::DeleteEntry => " DELETE ",
            AppMode::Search => " SEARCH ",
            AppMode::Quit => " QUIT ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awaits_input() {
        assert!(!AppMode::Command.awaits_input());
        assert!(AppMode::AddEntry.awaits_input());
        assert!(AppMode::DeleteEntry.awaits_input());
        assert!(AppMode::Search.awaits_input());
        assert!(!AppMode::Quit.awaits_input());
    }
}
