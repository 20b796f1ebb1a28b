use std::process::ExitCode;

use lifecal_core::classify_year;
use lifecal_core::parse::format_date;
use serde::Serialize;
use tracing::debug;

use crate::cli::ClassifyArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{AppContext, GlobalOptions};

pub fn run_classify(
    globals: &GlobalOptions,
    args: ClassifyArgs,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let ctx = AppContext::load(globals, &args.years)?;

    let mut years = Vec::with_capacity(ctx.years.len());
    for &year in &ctx.years {
        let set = ctx.load_year_with_synthetic(year)?;
        let days = classify_year(&set, &ctx.priorities)
            .into_iter()
            .map(|(date, info)| ClassifiedDay {
                date: format_date(date),
                category: info.category,
                priority: info.priority,
            })
            .collect::<Vec<_>>();
        debug!(year, days = days.len(), "classified");
        years.push(YearClassification { year, days });
    }

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&years)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for year in years {
                println!("{}", year.year);
                for day in year.days {
                    println!("{} {} ({})", day.date, day.category, day.priority);
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct YearClassification {
    year: i32,
    days: Vec<ClassifiedDay>,
}

#[derive(Debug, Serialize)]
struct ClassifiedDay {
    date: String,
    category: String,
    priority: i32,
}
