/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Help,
    BeginAdd,
    BeginDelete,
    List,
    BeginSearch,
    Quit,
    SubmitEntry(String),
    SubmitIndex(String),
    SubmitQuery(String),
    Cancel,
    InvalidCommand(String),
    None,
}
