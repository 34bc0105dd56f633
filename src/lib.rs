pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod query;
pub mod ui;

pub use query::{matches, parse_query, CompiledQuery, QueryError};
