//! Luther CLI - Command line interface
//!
//! `luther <DEFINITION> <SOURCE> <OUTPUT>` scans SOURCE with the token classes
//! of DEFINITION and writes one token per line to OUTPUT (`-` for stdout).

use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod logging;
mod platform;

use crate::logging::LogFormat;
use crate::platform::print_error_with_source;
use luther_config::LogLevel;
use luther_core::{prepare, LutherError, PreparedScan, ScanSummary};
use luther_vfs::native_fs;
use tracing::info;

const TARGET: &str = "luther::cli";

#[derive(Parser)]
#[command(
    name = "luther",
    about = "Table-driven maximal-munch scanner",
    version
)]
struct Cli {
    /// Scan definition file (alphabet header + token class entries)
    #[arg(value_name = "DEFINITION")]
    definition: PathBuf,

    /// Source text to scan
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Token stream output file, `-` for stdout
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    config::apply_overrides(&mut config, cli.log_level);

    logging::init(&config.logging, cli.log_format);

    let fs = native_fs();
    let prepared = match prepare(&fs, &config, &cli.definition, &cli.source) {
        Ok(p) => p,
        Err(e) => {
            print_error_with_source(&e, "");
            return ExitCode::FAILURE;
        }
    };

    match write_output(&prepared, &cli.output) {
        Ok(summary) => {
            info!(
                target: TARGET,
                tokens = summary.tokens,
                chars = summary.chars,
                output = %cli.output.display(),
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error_with_source(&e, prepared.source());
            ExitCode::FAILURE
        }
    }
}

/// Open the output sink and stream tokens into it
fn write_output(prepared: &PreparedScan, output: &Path) -> Result<ScanSummary, LutherError> {
    if output == Path::new("-") {
        let stdout = io::stdout();
        return prepared.write_tokens(BufWriter::new(stdout.lock()));
    }
    let file = File::create(output)?;
    prepared.write_tokens(BufWriter::new(file))
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!(
            "unknown log level '{}' (expected silent, error, warn, info, debug or trace)",
            s
        )
    })
}
