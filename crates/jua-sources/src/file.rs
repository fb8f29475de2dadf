//! File-backed record sources: CSV and JSON.

use std::fs;
use std::path::Path;

use jua_model::Company;

use crate::SourceError;

/// Column roles recognized in a CSV header row.
///
/// The name column is probed case-insensitively for the substring "company"
/// (falling back to a literal `name` header), matching the loose headers the
/// scraped spreadsheets actually ship with. `specialty` is accepted as an
/// alias for `services`.
#[derive(Debug, Default)]
struct Columns {
    name: Option<usize>,
    location: Option<usize>,
    services: Option<usize>,
    description: Option<usize>,
    phone: Option<usize>,
    website: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns = Columns::default();

        for (i, header) in headers.iter().enumerate() {
            let header = header.trim().to_lowercase();

            if columns.name.is_none() && (header.contains("company") || header == "name") {
                columns.name = Some(i);
            } else if header == "location" {
                columns.location = Some(i);
            } else if header == "services" || header == "specialty" {
                columns.services = Some(i);
            } else if header == "description" {
                columns.description = Some(i);
            } else if header == "phone" {
                columns.phone = Some(i);
            } else if header == "website" {
                columns.website = Some(i);
            }
        }

        columns
    }
}

fn cell(record: &csv::StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| record.get(i))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn optional_cell(record: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    let value = cell(record, index);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Load companies from a CSV file with a header row.
///
/// Row order is preserved. Rows with an empty name cell are passed through;
/// the builder decides what to do with them.
pub fn load_csv(path: &Path) -> Result<Vec<Company>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let headers = reader.headers().map_err(|e| SourceError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let columns = Columns::from_headers(headers);
    if columns.name.is_none() {
        return Err(SourceError::MissingNameColumn {
            path: path.display().to_string(),
        });
    }

    let mut companies = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| SourceError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        companies.push(Company {
            name: cell(&record, columns.name),
            location: cell(&record, columns.location),
            services: cell(&record, columns.services),
            description: cell(&record, columns.description),
            phone: optional_cell(&record, columns.phone),
            website: optional_cell(&record, columns.website),
        });
    }

    tracing::debug!("Loaded {} rows from {}", companies.len(), path.display());

    Ok(companies)
}

/// Load companies from a JSON array of objects.
pub fn load_json(path: &Path) -> Result<Vec<Company>, SourceError> {
    let content = fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| SourceError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
