use crate::app::OutputKind;
use ratatui::style::Color;

/// Midnight palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub accent: Color,
    pub error: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7
            error: Color::Rgb(247, 118, 142),   // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
        }
    }

    /// Foreground color for a line in the output pane
    pub fn output_color(&self, kind: OutputKind) -> Color {
        match kind {
            OutputKind::Info => self.dimmed,
            OutputKind::Entry => self.text,
            OutputKind::Error => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_stand_out_from_entries() {
        let theme = Theme::default();
        assert_ne!(
            theme.output_color(OutputKind::Error),
            theme.output_color(OutputKind::Entry)
        );
        assert_eq!(theme.output_color(OutputKind::Entry), theme.text);
    }
}
