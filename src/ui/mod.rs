pub mod command;
pub mod input;
pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{command_to_app_event, line_to_app_event, parse_command, Command};
pub use input::InputLine;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
