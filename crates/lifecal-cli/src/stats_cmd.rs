use std::process::ExitCode;

use lifecal_core::{UsageSummary, category_day_counts, classify_year};
use serde::Serialize;

use crate::cli::StatsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{AppContext, GlobalOptions, display_name};

pub fn run_stats(
    globals: &GlobalOptions,
    args: StatsArgs,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let ctx = AppContext::load(globals, &args.years)?;

    let mut stats = Vec::with_capacity(ctx.years.len());
    for &year in &ctx.years {
        let set = ctx.load_year_with_synthetic(year)?;
        let usage = UsageSummary::for_set(&set);

        let mut categories: Vec<CategoryStat> =
            category_day_counts(&classify_year(&set, &ctx.priorities))
                .into_iter()
                .filter(|(_, days)| *days > 0)
                .map(|(name, days)| CategoryStat {
                    priority: ctx.priorities.priority(&name),
                    name,
                    days,
                })
                .collect();
        categories.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

        stats.push(YearStats {
            year,
            usage,
            categories,
        });
    }

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for year in stats {
                println!("{}", year.year);
                println!("  Vacation days used: {}", year.usage.vacation_days);
                println!("  Personal days used: {}", year.usage.personal_days);
                for category in year.categories {
                    println!("  {}: {}", display_name(&category.name), category.days);
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct YearStats {
    year: i32,
    usage: UsageSummary,
    categories: Vec<CategoryStat>,
}

#[derive(Debug, Serialize)]
struct CategoryStat {
    name: String,
    priority: i32,
    days: usize,
}
