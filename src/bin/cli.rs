// src/bin/cli.rs
use bench_scrape::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log = bench_scrape::log::init(true);

    let opts = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", cli::HELP);
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    let (summary, path) = cli::run(&opts)?;
    println!(
        "Wrote {} record(s) to {} (fetched {}, skipped {}, duplicates {})",
        summary.records.len(),
        path.display(),
        summary.fetched,
        summary.skipped,
        summary.duplicates
    );
    Ok(())
}
