// Configuration for monco's entry store and terminal UI
// Defaults match the classic monco command loop

use std::time::Duration;

/// Entry store configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Maximum number of entries kept in memory (default 100)
    pub max_entries: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { max_entries: 100 }
    }
}

/// Prompt strings shown on the input line, one per app mode
#[derive(Debug, Clone, PartialEq)]
pub struct PromptConfig {
    pub command: String,
    pub add_entry: String,
    pub delete_entry: String,
    pub search: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            command: "monco > ".to_string(),
            add_entry: "Enter text: ".to_string(),
            delete_entry: "Enter number: ".to_string(),
            search: "Search: ".to_string(),
        }
    }
}

/// Terminal UI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// How long the event loop waits for a key before redrawing (default 100ms)
    pub tick: Duration,

    /// Lines scrolled by PageUp/PageDown (default 10)
    pub scroll_step: u16,

    /// Output lines retained in the scrollback (default 1000)
    pub scrollback_limit: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            scroll_step: 10,
            scrollback_limit: 1000,
        }
    }
}

/// Master configuration combining all monco settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub store: StoreConfig,
    pub prompts: PromptConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.store.max_entries = max_entries;
        self
    }
}
