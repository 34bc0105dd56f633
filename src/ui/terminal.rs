use crate::app::{App, AppEvent, AppMode};
use crate::ui::input::InputLine;
use crate::ui::render;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Submit(String),
    Cancel,
    Quit,
    ScrollUp,
    ScrollDown,
    Edited,
    Ignored,
}

/// Applies a key press to the prompt's input line
pub fn handle_key(input: &mut InputLine, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            KeyCode::Char('d') if input.is_empty() => KeyAction::Quit,
            _ => KeyAction::Ignored,
        };
    }

    match key.code {
        KeyCode::Enter => KeyAction::Submit(input.take()),
        KeyCode::Esc => {
            input.take();
            KeyAction::Cancel
        }
        KeyCode::Char(c) => {
            input.insert(c);
            KeyAction::Edited
        }
        KeyCode::Backspace => {
            input.backspace();
            KeyAction::Edited
        }
        KeyCode::Delete => {
            input.delete();
            KeyAction::Edited
        }
        KeyCode::Left => {
            input.move_left();
            KeyAction::Edited
        }
        KeyCode::Right => {
            input.move_right();
            KeyAction::Edited
        }
        KeyCode::Home => {
            input.move_home();
            KeyAction::Edited
        }
        KeyCode::End => {
            input.move_end();
            KeyAction::Edited
        }
        KeyCode::PageUp => KeyAction::ScrollUp,
        KeyCode::PageDown => KeyAction::ScrollDown,
        _ => KeyAction::Ignored,
    }
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: InputLine,
    scroll: usize,
    theme: Theme,
    // Dropped after `terminal` so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            input: InputLine::new(),
            scroll: 0,
            theme: Theme::default(),
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let tick = app.config().ui.tick;
        let scroll_step = app.config().ui.scroll_step as usize;

        while app.mode() != AppMode::Quit {
            self.render_frame(app)?;

            if !event::poll(tick)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_key(&mut self.input, key) {
                KeyAction::Submit(line) => {
                    app.submit_line(&line);
                    self.scroll = 0;
                }
                KeyAction::Cancel => app.handle_event(AppEvent::Cancel),
                KeyAction::Quit => app.handle_event(AppEvent::Quit),
                // Clamped to the top of the output on the next draw
                KeyAction::ScrollUp => self.scroll = self.scroll.saturating_add(scroll_step),
                KeyAction::ScrollDown => self.scroll = self.scroll.saturating_sub(scroll_step),
                KeyAction::Edited | KeyAction::Ignored => {}
            }
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let input = &self.input;
        let theme = &self.theme;
        let mut scroll = self.scroll;
        self.terminal
            .draw(|frame| scroll = render::draw(frame, app, input, scroll, theme))?;
        self.scroll = scroll;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut InputLine, code: KeyCode) -> KeyAction {
        handle_key(input, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(input: &mut InputLine, c: char) -> KeyAction {
        handle_key(input, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_typing_then_enter_submits_line() {
        let mut input = InputLine::new();
        for c in "a & b".chars() {
            assert_eq!(press(&mut input, KeyCode::Char(c)), KeyAction::Edited);
        }
        assert_eq!(
            press(&mut input, KeyCode::Enter),
            KeyAction::Submit("a & b".to_string())
        );
        assert!(input.is_empty());
    }

    #[test]
    fn test_escape_clears_and_cancels() {
        let mut input = InputLine::new();
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(press(&mut input, KeyCode::Esc), KeyAction::Cancel);
        assert!(input.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut input = InputLine::new();
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(ctrl(&mut input, 'c'), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_d_quits_only_on_empty_line() {
        let mut input = InputLine::new();
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(ctrl(&mut input, 'd'), KeyAction::Ignored);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(ctrl(&mut input, 'd'), KeyAction::Quit);
    }

    #[test]
    fn test_page_keys_scroll() {
        let mut input = InputLine::new();
        assert_eq!(press(&mut input, KeyCode::PageUp), KeyAction::ScrollUp);
        assert_eq!(press(&mut input, KeyCode::PageDown), KeyAction::ScrollDown);
    }
}
