// src/cli.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::config::options::AppOptions;
use crate::core::Fetcher;
use crate::error::{ExportError, FetchError};
use crate::file;
use crate::progress::Progress;
use crate::scrape::{self, CollectSummary};
use crate::specs::Source;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(AppOptions),
    Help,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\nTry --help.")]
    Usage(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Parse arguments (program name already stripped).
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = AppOptions::default();
    let mut sources: Vec<Source> = Vec::new();
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = value(&mut args, &a)?;
                opts.export.set_path(&v);
            }
            "--source" => {
                let v = value(&mut args, &a)?;
                let src: Source = v.parse().map_err(CliError::Usage)?;
                if !sources.contains(&src) { sources.push(src); }
            }
            "--max-pages" => {
                let v = value(&mut args, &a)?;
                opts.scrape.max_listing_pages = number(&v, &a)?;
            }
            "--max-entries" => {
                let v = value(&mut args, &a)?;
                opts.scrape.max_entries_per_source = number(&v, &a)?;
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(CliError::Usage(format!("Unknown arg: {}", a))),
        }
    }

    if !sources.is_empty() {
        opts.scrape.sources = sources;
    }
    Ok(Command::Run(opts))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next().ok_or_else(|| CliError::Usage(format!("Missing value for {}", flag)))
}

fn number<T: std::str::FromStr>(v: &str, flag: &str) -> Result<T, CliError> {
    v.trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("{} expects a non-negative number, got {:?}", flag, v)))
}

/// Scrape, export, report. Skipped entries are not an error.
pub fn run(opts: &AppOptions) -> Result<(CollectSummary, PathBuf), CliError> {
    let mut fetcher = Fetcher::new(opts.fetch.clone())?;
    let mut progress = CliProgress::default();

    let summary = scrape::collect(&mut fetcher, &opts.scrape, Some(&mut progress));
    let path = file::export(&summary.records, opts.export.out_path())?;

    Ok((summary, path))
}

/// Console sink: one line per entry on stderr.
#[derive(Default)]
struct CliProgress {
    done: usize,
    failed: usize,
}

impl Progress for CliProgress {
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("  [{:>4}] {}", self.done, name);
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        self.failed += 1;
        eprintln!("  [skip] {}: {}", name, reason);
    }

    fn finish(&mut self) {
        eprintln!("Done: {} collected, {} skipped.", self.done, self.failed);
    }
}
