//! wordlock CLI - list the dictionary words a letter-wheel lock can spell.
//!
//! Reads a wheel file and a dictionary, prints every word that lines up on
//! the wheels, then the total number of alignments found.
//!
//! Exit codes:
//! - 0: run completed (with or without matches)
//! - 2: the lock, dictionary or config could not be used

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use wordlock_core::{
    init_structured_logging, load_config, load_config_file, write_json, write_plain, ScanReport,
    Wordlock, WordlockConfig, WordlockError,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find dictionary words spelled by a letter-wheel lock")]
pub struct Cli {
    /// Wheel specification file [default: wheels.txt]
    #[arg(short, long, value_name = "FILE")]
    wheels: Option<PathBuf>,

    /// Dictionary file, one word per line [default: dictionary.txt]
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Show how many alignments spell each word and where they start
    #[arg(long)]
    offsets: bool,

    /// Abort on dictionary lines longer than 255 characters instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Config file [default: wordlock.toml in the working directory, if present]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Settings for one run after merging flags over config over defaults.
#[derive(Debug)]
struct RunOptions {
    builder: Wordlock,
    json: bool,
    offsets: bool,
}

/// Loads the config file named on the command line, or the default one.
///
/// A config that exists but cannot be parsed is not fatal: the run carries on
/// with defaults. An explicitly named file that cannot be read is fatal.
fn load_cli_config(cli: &Cli) -> Result<WordlockConfig, WordlockError> {
    let loaded = match &cli.config {
        Some(path) => load_config_file(path).map(Some),
        None => load_config(Path::new(".")),
    };

    match loaded {
        Ok(cfg) => Ok(cfg.unwrap_or_default()),
        Err(e) if e.is_recoverable() => {
            eprintln!("[WARN] config load failed: {}", e);
            warn!(error = %e, "config load failed, using defaults");
            Ok(WordlockConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Command-line flags win over the config file.
fn resolve_options(cli: &Cli, config: &WordlockConfig) -> RunOptions {
    let mut builder = Wordlock::from_config(config);
    if let Some(path) = &cli.wheels {
        builder = builder.wheels(path);
    }
    if let Some(path) = &cli.dictionary {
        builder = builder.dictionary(path);
    }
    if cli.strict {
        builder = builder.strict(true);
    }

    RunOptions {
        builder,
        json: cli.json || config.wants_json(),
        offsets: cli.offsets || config.wants_offsets(),
    }
}

/// Resolves the run settings and scans the dictionary.
///
/// Nothing is written to stdout here, so an aborting error leaves it empty.
fn run(cli: &Cli) -> Result<(RunOptions, ScanReport), WordlockError> {
    let config = load_cli_config(cli)?;
    let options = resolve_options(cli, &config);
    info!(
        wheels = %options.builder.wheels_path().display(),
        dictionary = %options.builder.dictionary_path().display(),
        "starting scan"
    );

    let scan = options.builder.run()?;
    info!(
        words = scan.words.len(),
        total = scan.total,
        skipped = scan.stats.skipped_total(),
        "scan finished"
    );
    Ok((options, scan))
}

fn write_report<W: Write>(out: &mut W, options: &RunOptions, scan: &ScanReport) -> Result<()> {
    if options.json {
        write_json(out, scan).context("Failed to write JSON report")?;
    } else {
        write_plain(out, scan, options.offsets).context("Failed to write report")?;
    }
    out.flush().context("Failed to flush report")
}

/// Prints an aborting error and exits with code 2.
fn fail(err: &WordlockError) -> ! {
    error!(error = %err, "run aborted");
    eprintln!("ERROR: {}", err);
    std::process::exit(2);
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] wordlock internal error: {}", info);
        eprintln!("[PANIC] The process will exit with code 101.");
    }));

    // JSON logs to stderr, filtered by RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();
    let (options, scan) = run(&cli).unwrap_or_else(|e| fail(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_report(&mut out, &options, &scan)
}
