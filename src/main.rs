use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use siglex::{
    report::{display_error, render, Section},
    tokenize_str,
};

#[derive(Parser)]
#[command(name = "siglex")]
#[command(about = "Lexical analyzer for SIGNAL programs", long_about = None)]
#[command(version)]
struct Cli {
    /// Source file to analyze
    #[arg(value_name = "FILE", env = "SIGLEX_INPUT")]
    input: PathBuf,

    /// Only print the given parts of the result (repeatable)
    #[arg(long, value_enum, value_name = "SECTION")]
    only: Vec<Section>,

    /// Exit successfully even if lexical errors were found
    #[arg(long)]
    allow_errors: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn entrypoint(cli: Cli) -> Result<bool> {
    let file_contents = read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let file_name = cli.input.display().to_string();

    let start = Instant::now();
    let result = tokenize_str(&file_contents);
    info!("Tokenized {} in {:?}", file_name, start.elapsed());

    let sections = if cli.only.is_empty() {
        Section::ALL.to_vec()
    } else {
        cli.only
    };
    print!("{}", render(&result, &sections));

    for error in &result.errors {
        eprint!("{}", display_error(error, &file_contents, &file_name));
    }

    Ok(!result.has_errors() || cli.allow_errors)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match entrypoint(cli) {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
    }
}
