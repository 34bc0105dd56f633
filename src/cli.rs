//! Command-line interface
//!
//! Usage:
//!   monco                                   - Interactive note list with search
//!   monco filter `<query>` [--number] [--explain] - Print stdin lines matching a query

use crate::config::{Config, StoreConfig};
use crate::query::CompiledQuery;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "monco",
    version,
    about = "Keep a list of entries and search it with boolean queries",
    after_help = "Query syntax: phrases combined with & (and), | (or), ! (not) and parentheses,\n\
                  e.g. \"!Alice & (Charlie | Dan)\". Matching is case-insensitive."
)]
pub struct Cli {
    /// Maximum number of entries kept in interactive mode
    #[arg(long, global = true, default_value_t = StoreConfig::default().max_entries)]
    pub max_entries: usize,

    /// Write logs to this file (filter with MONCO_LOG, e.g. MONCO_LOG=debug)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Mode>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Mode {
    /// Read lines from stdin and print those matching QUERY
    Filter {
        query: String,

        /// Prefix each printed line with its zero-based line number
        #[arg(short, long)]
        number: bool,

        /// Print the query in postfix form to stderr before filtering
        #[arg(long)]
        explain: bool,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::default().with_max_entries(self.max_entries)
    }
}

/// Writes every line of `input` matching `query` to `out`.
///
/// Lines are matched as lossy UTF-8 and written back byte for byte, so
/// invalid UTF-8 never stops the filter. Returns the number of matching lines.
pub fn run_filter<R: BufRead, W: Write>(
    query: &CompiledQuery,
    mut input: R,
    out: &mut W,
    number: bool,
) -> io::Result<usize> {
    let mut matched = 0;
    let mut buf = Vec::new();
    let mut index: usize = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_line_ending(&buf);
        if query.matches(&String::from_utf8_lossy(line)) {
            matched += 1;
            if number {
                write!(out, "{}) ", index)?;
            }
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
        index += 1;
    }
    tracing::debug!(matched, lines = index, "Filter finished");
    Ok(matched)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
