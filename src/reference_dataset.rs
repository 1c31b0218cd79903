use crate::canonical::canonicalize;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceFields {
    pub drug_class: String,
    pub primary_use: String,
    pub description: String,
}

impl ReferenceFields {
    fn not_available() -> Self {
        Self {
            drug_class: NOT_AVAILABLE.to_string(),
            primary_use: NOT_AVAILABLE.to_string(),
            description: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Medicine metadata keyed by canonical name. Keys are computed once at
/// load time so lookups are a plain map hit.
pub struct ReferenceDataset {
    records: HashMap<String, ReferenceFields>,
}

impl ReferenceDataset {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)
            .map_err(|e| ConfigError::ReferenceUnreadable(e.into()))?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        // Header variants like "Medicine_Name " and "medicine_name" are
        // the same column.
        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(ConfigError::ReferenceUnreadable)?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let name_col = headers
            .iter()
            .position(|h| h == "medicine_name")
            .ok_or(ConfigError::MissingNameColumn)?;
        let class_col = headers.iter().position(|h| h == "drug_class");
        let use_col = headers.iter().position(|h| h == "primary_use");
        let desc_col = headers.iter().position(|h| h == "description");

        let mut records = HashMap::new();

        for row in csv_reader.records() {
            let row = row.map_err(ConfigError::ReferenceUnreadable)?;

            let name = match row.get(name_col) {
                Some(name) if !name.trim().is_empty() => name,
                _ => continue,
            };

            // Duplicate canonical keys are possible; the first row wins.
            records
                .entry(canonicalize(name))
                .or_insert_with(|| ReferenceFields {
                    drug_class: cell(&row, class_col),
                    primary_use: cell(&row, use_col),
                    description: cell(&row, desc_col),
                });
        }

        Ok(Self { records })
    }

    /// Exact match on the canonical key; no fuzzy matching. Misses get the
    /// "N/A" triple.
    pub fn lookup(&self, canonical_key: &str) -> ReferenceFields {
        self.records
            .get(canonical_key)
            .cloned()
            .unwrap_or_else(ReferenceFields::not_available)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn cell(row: &csv::StringRecord, col: Option<usize>) -> String {
    match col.and_then(|i| row.get(i)) {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
