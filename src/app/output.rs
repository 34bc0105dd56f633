/// Kind of a line printed to the output pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Info,
    /// A listed or matched entry
    Entry,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: OutputKind,
    pub text: String,
}

impl OutputLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Info,
            text: text.into(),
        }
    }

    pub fn entry(index: usize, text: &str) -> Self {
        Self {
            kind: OutputKind::Entry,
            text: format!("{}) {}", index, text),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Error,
            text: text.into(),
        }
    }
}
