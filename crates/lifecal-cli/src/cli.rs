use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Yearly vacation and plan calendar
#[derive(Parser, Debug)]
#[command(name = "lifecal", version)]
#[command(about = "Classify the days of a year and find natural breaks")]
pub struct Cli {
    /// Config file (defaults to ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data folder, overriding the configured one
    #[arg(long, global = true)]
    pub data_folder: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the winning category of every day
    Classify(ClassifyArgs),
    /// Show leave used and days per category
    Stats(StatsArgs),
    /// Export existing plans and potential vacations
    Plan(PlanArgs),
}

#[derive(clap::Args, Debug)]
pub struct YearArgs {
    /// Year to process (repeatable; defaults to the configured years)
    #[arg(short, long = "year")]
    pub years: Vec<i32>,
}

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub years: YearArgs,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub years: YearArgs,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub years: YearArgs,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}
