pub mod app;
pub mod event;
pub mod mode;
pub mod output;
pub mod store;

pub use app::App;
pub use event::AppEvent;
pub use mode::AppMode;
pub use output::{OutputKind, OutputLine};
pub use store::{EntryStore, StoreError};
