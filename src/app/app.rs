use super::event::AppEvent;
use super::mode::AppMode;
use super::output::OutputLine;
use super::store::EntryStore;
use crate::config::Config;
use crate::query::parse_query;

const HELP_COMMANDS: &[(char, &str, &str)] = &[
    ('a', "add", "Add an entry"),
    ('d', "del", "Delete an entry"),
    ('h', "help", "Read this help"),
    ('l', "list", "List all entries"),
    ('s', "search", "Search for an entry"),
    ('q', "quit", "Quit the application"),
];

fn help_line(short: char, long: &str, description: &str) -> String {
    format!("{:>10}, {:<10}    {}", short, long, description)
}

pub struct App {
    mode: AppMode,
    store: EntryStore,
    output: Vec<OutputLine>,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            mode: AppMode::Command,
            store: EntryStore::new(config.store.max_entries),
            output: Vec::new(),
            config,
        };
        app.print(OutputLine::info("Welcome to monco! Type 'help' for help."));
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Prompt for the input line in the current mode
    pub fn prompt(&self) -> &str {
        let prompts = &self.config.prompts;
        match self.mode {
            AppMode::AddEntry => &prompts.add_entry,
            AppMode::DeleteEntry => &prompts.delete_entry,
            AppMode::Search => &prompts.search,
            AppMode::Command | AppMode::Quit => &prompts.command,
        }
    }

    /// Routes a submitted input line according to the current mode
    pub fn submit_line(&mut self, line: &str) {
        let event = crate::ui::command::line_to_app_event(self.mode, line);
        self.handle_event(event);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Help => self.show_help(),
            AppEvent::BeginAdd => self.begin_add(),
            AppEvent::BeginDelete => self.begin_delete(),
            AppEvent::List => self.list_entries(),
            AppEvent::BeginSearch => self.mode = AppMode::Search,
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::SubmitEntry(text) => self.add_entry(text),
            AppEvent::SubmitIndex(input) => self.delete_entry(&input),
            AppEvent::SubmitQuery(raw) => self.search(&raw),
            AppEvent::Cancel => {
                if self.mode.awaits_input() {
                    self.mode = AppMode::Command;
                }
            }
            AppEvent::InvalidCommand(input) => {
                tracing::warn!(input = %input, "Unknown command");
                self.print(OutputLine::error(format!(
                    "Unknown command: {}. Type 'help' for help.",
                    input
                )));
            }
            AppEvent::None => {}
        }
    }

    fn print(&mut self, line: OutputLine) {
        self.output.push(line);
        let limit = self.config.ui.scrollback_limit;
        if self.output.len() > limit {
            let excess = self.output.len() - limit;
            self.output.drain(..excess);
        }
    }

    fn show_help(&mut self) {
        self.print(OutputLine::info("Available commands:"));
        for &(short, long, description) in HELP_COMMANDS {
            self.print(OutputLine::info(help_line(short, long, description)));
        }
    }

    fn begin_add(&mut self) {
        if self.store.is_full() {
            self.print(OutputLine::info(
                "Maximum number of entries reached! Will not add more.",
            ));
            return;
        }
        self.mode = AppMode::AddEntry;
    }

    fn begin_delete(&mut self) {
        if self.store.is_empty() {
            self.print(OutputLine::info("No entries to delete!"));
            return;
        }
        self.mode = AppMode::DeleteEntry;
    }

    fn list_entries(&mut self) {
        let lines: Vec<OutputLine> = self
            .store
            .iter()
            .enumerate()
            .map(|(i, entry)| OutputLine::entry(i, entry))
            .collect();
        for line in lines {
            self.print(line);
        }
        let total = match self.store.len() {
            0 => "No entries yet!".to_string(),
            1 => "Total: 1 entry".to_string(),
            n => format!("Total: {} entries", n),
        };
        self.print(OutputLine::info(total));
    }

    fn add_entry(&mut self, text: String) {
        self.mode = AppMode::Command;
        match self.store.add(text) {
            Ok(index) => tracing::info!(index, "Added entry"),
            Err(err) => self.print(OutputLine::error(err.to_string())),
        }
    }

    fn delete_entry(&mut self, input: &str) {
        self.mode = AppMode::Command;
        let index = match input.trim().parse::<usize>() {
            Ok(index) => index,
            Err(_) => {
                self.print(OutputLine::error(format!(
                    "Not an entry number: {}",
                    input.trim()
                )));
                return;
            }
        };
        match self.store.remove(index) {
            Ok(_) => tracing::info!(index, "Deleted entry"),
            Err(err) => self.print(OutputLine::error(err.to_string())),
        }
    }

    fn search(&mut self, raw: &str) {
        self.mode = AppMode::Command;
        let query = match parse_query(raw) {
            Ok(query) => query,
            Err(err) => {
                tracing::warn!(raw, "Rejected query: {}", err);
                self.print(OutputLine::error(err.to_string()));
                return;
            }
        };
        let hits: Vec<OutputLine> = self
            .store
            .search(&query)
            .map(|(i, entry)| OutputLine::entry(i, entry))
            .collect();
        if hits.is_empty() {
            self.print(OutputLine::info("No matching entries"));
        }
        for line in hits {
            self.print(line);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
