//! CSV ingestion.
//!
//! Data lives in `<data_folder>/<year>/<category>.csv`. Each file is one
//! category named after its file stem. Rows use the columns `date_start`,
//! `date_end`, `date`, `label` and `desc` (header names are matched
//! case-insensitively; unknown columns are ignored).

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord, Trim};
use lifecal_core::{Category, CategorySet, EntryRecord, parse_entry};
use tracing::debug;

/// Reads per-year category files from a data folder.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    data_folder: PathBuf,
}

impl CsvStorage {
    pub fn new(data_folder: impl Into<PathBuf>) -> Self {
        Self {
            data_folder: data_folder.into(),
        }
    }

    pub fn year_dir(&self, year: i32) -> PathBuf {
        self.data_folder.join(year.to_string())
    }

    pub fn year_data_exists(&self, year: i32) -> bool {
        self.year_dir(year).is_dir()
    }

    /// Category name → CSV path for `year`, in name order.
    pub fn category_files(&self, year: i32) -> Result<BTreeMap<String, PathBuf>> {
        let dir = self.year_dir(year);
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("failed to read data directory {}", dir.display()))?;

        let mut files = BTreeMap::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files.insert(stem.to_string(), path.clone());
            }
        }

        Ok(files)
    }

    /// Load every category of `year`. Synthetic categories are not added.
    pub fn load_year(&self, year: i32) -> Result<CategorySet> {
        if !self.year_data_exists(year) {
            bail!(
                "data for year {} does not exist: {}",
                year,
                self.year_dir(year).display()
            );
        }

        let mut set = CategorySet::new(year);
        for (name, path) in self.category_files(year)? {
            let category = load_category(&name, &path)
                .with_context(|| format!("failed to load category {name}"))?;
            debug!(
                year,
                category = %name,
                entries = category.entries.len(),
                days = category.dates.len(),
                "loaded category"
            );
            set.insert(category);
        }

        Ok(set)
    }
}

fn load_category(name: &str, path: &Path) -> Result<Category> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let records = read_records(file)?;

    let mut entries = Vec::with_capacity(records.len());
    for (line, record) in records {
        let entry = parse_entry(&record)
            .with_context(|| format!("failed to parse record on line {line}"))?;
        entries.push(entry);
    }

    Ok(Category::from_entries(name, Some(name.to_string()), entries)?)
}

/// Read rows as `(line number, record)`, skipping rows whose first field is empty.
fn read_records(reader: impl Read) -> Result<Vec<(u64, EntryRecord)>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = header_map(reader.headers()?);
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        if row.get(0).is_none_or(str::is_empty) {
            continue;
        }
        let line = row.position().map_or(0, |p| p.line());
        let field = |name: &str| {
            columns
                .get(name)
                .and_then(|&idx| row.get(idx))
                .map(str::to_string)
        };
        records.push((
            line,
            EntryRecord {
                date_start: field("date_start"),
                date_end: field("date_end"),
                date: field("date"),
                label: field("label"),
                desc: field("desc"),
            },
        ));
    }

    Ok(records)
}

fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (header.trim().to_lowercase(), idx))
        .collect()
}
