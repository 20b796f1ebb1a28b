use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod classify_cmd;
mod cli;
mod config;
mod error;
mod plan_cmd;
mod shared;
mod stats_cmd;
mod storage;

use classify_cmd::run_classify;
use cli::{Cli, Commands};
use error::{output_format_hint, parse_output_format, render_error};
use plan_cmd::run_plan;
use shared::GlobalOptions;
use stats_cmd::run_stats;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let globals = GlobalOptions {
        config: cli.config,
        data_folder: cli.data_folder,
    };

    match cli.command {
        Commands::Classify(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_classify(&globals, args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Stats(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_stats(&globals, args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Plan(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_plan(&globals, args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
