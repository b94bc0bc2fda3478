//! Keyword-to-department lookup.
//!
//! A [`Mapping`] is loaded once from a CSV table and then only read. Lookups
//! run two passes over the rows in file order: keyword terms first, unit names
//! second. The first row that matches wins.

mod loader;
mod matcher;
mod normalize;
mod record;
mod render_reply;

pub use crate::loader::{
    DEFAULT_MAPPING_PATH, LoadReport, REQUIRED_COLUMNS, Warning, WarningKind, load, load_report,
};
pub use crate::matcher::{Hit, MatchPass, Matcher};
pub use crate::normalize::{KEYWORD_DELIMITER, normalize_text, split_keywords};
pub use crate::record::{DepartmentRecord, EXT_PLACEHOLDER, UNIT_PLACEHOLDER, URL_PLACEHOLDER};
pub use crate::render_reply::render_reply;

use serde::Serialize;

/// Ordered, read-only department table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    records: Vec<DepartmentRecord>,
}

impl Mapping {
    pub fn new(records: Vec<DepartmentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DepartmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn resolve(&self, user_text: &str) -> Resolution {
        let text = normalize_text(user_text);
        for pass in MatchPass::ORDER {
            if let Some(hit) = pass.instantiate().find(&self.records, &text) {
                let record = &self.records[hit.index];
                return Resolution::Reply(Reply {
                    text: render_reply(record),
                    unit: record.unit_display().to_string(),
                    pass: hit.pass,
                    term: hit.term,
                });
            }
        }
        Resolution::NoMatch
    }
}

impl FromIterator<DepartmentRecord> for Mapping {
    fn from_iter<I: IntoIterator<Item = DepartmentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub unit: String,
    pub pass: MatchPass,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Reply(Reply),
    NoMatch,
}

impl Resolution {
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Resolution::Reply(reply) => Some(reply),
            Resolution::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Reply(_))
    }
}
