use std::process::ExitCode;

use lifecal_core::{YearPlan, plan_year};
use tracing::info;

use crate::cli::PlanArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{AppContext, GlobalOptions};

pub fn run_plan(
    globals: &GlobalOptions,
    args: PlanArgs,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let ctx = AppContext::load(globals, &args.years)?;

    let mut plans: Vec<YearPlan> = Vec::with_capacity(ctx.years.len());
    for &year in &ctx.years {
        // Weekends come from the calendar; only stored holidays and plans matter here.
        let set = ctx.load_year(year)?;
        let plan = plan_year(&set).map_err(|e| CliError::input(e.to_string()).for_year(year))?;
        info!(
            year,
            existing = plan.existing_vacations.len(),
            potential = plan.potential_vacations.len(),
            "planned year"
        );
        plans.push(plan);
    }

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plans)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for plan in plans {
                println!("{}", plan.year);
                println!("  Existing:");
                for existing in &plan.existing_vacations {
                    println!(
                        "    {} to {} {} ({} days, {} weekend, {} holiday)",
                        existing.date_start,
                        existing.date_end,
                        existing.label,
                        existing.total_days,
                        existing.weekend_count,
                        existing.holiday_count
                    );
                }
                println!("  Potential:");
                for potential in &plan.potential_vacations {
                    println!(
                        "    {} to {} {}",
                        potential.date_start, potential.date_end, potential.description
                    );
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
