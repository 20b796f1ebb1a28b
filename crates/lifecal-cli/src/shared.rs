use std::path::PathBuf;

use chrono::NaiveDate;
use lifecal_core::tz::today_in;
use lifecal_core::{CategoryPriority, CategorySet, with_synthetic};
use tracing::debug;

use crate::cli::YearArgs;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::storage::CsvStorage;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub data_folder: Option<PathBuf>,
}

/// Everything a subcommand needs: config, storage and the evaluation date.
#[derive(Debug)]
pub struct AppContext {
    pub storage: CsvStorage,
    pub priorities: CategoryPriority,
    pub today: NaiveDate,
    pub years: Vec<i32>,
}

impl AppContext {
    pub fn load(globals: &GlobalOptions, year_args: &YearArgs) -> CliResult<Self> {
        let mut config = Config::load_from(globals.config.as_deref())
            .map_err(|e| CliError::input(format!("Failed to load configuration: {}", e)))?;
        debug!(?config, "loaded configuration");

        if let Some(folder) = &globals.data_folder {
            config.data_folder = folder.clone();
        }

        let tz = config
            .tz()
            .map_err(|e| CliError::input(format!("Invalid configuration: {}", e)))?;

        let years = if year_args.years.is_empty() {
            config.years.clone()
        } else {
            year_args.years.clone()
        };
        if years.is_empty() {
            return Err(CliError::input("No years to process"));
        }

        Ok(Self {
            storage: CsvStorage::new(config.data_folder_with_fallback()),
            priorities: config.priorities(),
            today: today_in(tz),
            years,
        })
    }

    /// The year's categories as stored, without synthetic ones.
    pub fn load_year(&self, year: i32) -> CliResult<CategorySet> {
        self.storage
            .load_year(year)
            .map_err(|e| CliError::input(format!("{:#}", e)).for_year(year))
    }

    /// The year's categories with weekends, week parity and today added.
    pub fn load_year_with_synthetic(&self, year: i32) -> CliResult<CategorySet> {
        Ok(with_synthetic(&self.load_year(year)?, self.today))
    }
}

/// `public_holidays` → `Public Holidays`.
pub fn display_name(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(display_name("public_holidays"), "Public Holidays");
        assert_eq!(display_name("vacations"), "Vacations");
        assert_eq!(display_name("odd_week"), "Odd Week");
    }
}
