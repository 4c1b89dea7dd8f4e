mod config;
mod engine;
mod export;
mod input;
mod models;
mod schema;
mod types;

use std::fs::File;
use std::io::{stderr, stdout, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Args;
use crate::engine::StatementEngine;
use crate::export::write_statement;

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let options = args.engine_options()?;
    let text = input::read_file(&args.input, &args.encoding)?;

    let timer = Instant::now();
    let statement = StatementEngine::new(options).run(text.as_bytes())?;
    let duration = timer.elapsed();

    info!("Converted {} in: {duration:?}", args.input.display());

    let generated = Local::now().naive_local();

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Error creating output at path: {}", path.display()))?;
            write_statement(&statement, args.format, generated, BufWriter::new(file))?;
        }
        None => write_statement(&statement, args.format, generated, BufWriter::new(stdout().lock()))?
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout may carry the exported statement, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
