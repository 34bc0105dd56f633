use crossterm::cursor::Show;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Puts the terminal in raw mode on the alternate screen and restores it on
/// drop, and on panic.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        if let Err(err) = io::stdout().execute(terminal::EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = io::stdout().execute(Show);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            tracing::error!("Panic: {}", panic_info);
            default_hook(panic_info);
        }));
    });
}
