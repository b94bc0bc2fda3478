use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::Mapping;
use crate::record::{DepartmentRecord, RawRow};

pub const DEFAULT_MAPPING_PATH: &str = "data/departments.csv";
pub const REQUIRED_COLUMNS: [&str; 2] = ["unit", "keywords"];

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Serialize)]
pub struct LoadReport {
    pub path: PathBuf,
    pub mapping: Mapping,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingFile,
    Unreadable,
    Malformed,
    MissingColumn,
    EmptyKeywords,
    EmptyUnit,
    ShadowedKeyword,
}

fn warning(kind: WarningKind, message: impl Into<String>) -> Warning {
    Warning {
        kind,
        message: message.into(),
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("mapping file not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} is missing required column `{column}`", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

impl LoadError {
    fn kind(&self) -> WarningKind {
        match self {
            LoadError::NotFound(_) => WarningKind::MissingFile,
            LoadError::Read { .. } => WarningKind::Unreadable,
            LoadError::Csv { .. } => WarningKind::Malformed,
            LoadError::MissingColumn { .. } => WarningKind::MissingColumn,
        }
    }
}

/// Loads the department table. Never fails: a missing or malformed file yields
/// an empty mapping, so every lookup falls through to the fallback reply.
pub fn load(path: impl AsRef<Path>) -> Mapping {
    load_report(path).mapping
}

pub fn load_report(path: impl AsRef<Path>) -> LoadReport {
    let path = path.as_ref();
    match read_records(path) {
        Ok(records) => {
            let warnings = row_warnings(&records);
            info!(
                path = %path.display(),
                records = records.len(),
                warnings = warnings.len(),
                "loaded department mapping"
            );
            LoadReport {
                path: path.to_path_buf(),
                mapping: Mapping::new(records),
                warnings,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), "{err}; using fallback replies only");
            LoadReport {
                path: path.to_path_buf(),
                mapping: Mapping::default(),
                warnings: vec![warning(err.kind(), err.to_string())],
            }
        }
    }
}

fn read_records(path: &Path) -> Result<Vec<DepartmentRecord>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_records(&contents, path)
}

fn parse_records(contents: &str, path: &Path) -> Result<Vec<DepartmentRecord>, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let contents = contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(contents);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(contents.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        records.push(DepartmentRecord::from(row.map_err(csv_error)?));
    }
    Ok(records)
}

fn row_warnings(records: &[DepartmentRecord]) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        if record.unit.is_none() {
            warnings.push(warning(
                WarningKind::EmptyUnit,
                format!("record {row} has no unit name"),
            ));
        }
        if record.keywords.is_empty() {
            warnings.push(warning(
                WarningKind::EmptyKeywords,
                format!(
                    "record {row} ({}) has no keywords and only matches by unit name",
                    record.unit_display()
                ),
            ));
        }
        for term in &record.keywords {
            let shadow = records[..index].iter().enumerate().find_map(|(earlier, other)| {
                other
                    .keywords
                    .iter()
                    .find(|candidate| term.contains(candidate.as_str()))
                    .map(|candidate| (earlier + 1, other, candidate))
            });
            if let Some((earlier_row, other, candidate)) = shadow {
                warnings.push(warning(
                    WarningKind::ShadowedKeyword,
                    format!(
                        "keyword `{term}` of record {row} ({}) never wins: `{candidate}` of record {earlier_row} ({}) matches first",
                        record.unit_display(),
                        other.unit_display()
                    ),
                ));
            }
        }
    }
    warnings
}
