use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_text, split_keywords};

pub const UNIT_PLACEHOLDER: &str = "（未填寫單位）";
pub const EXT_PLACEHOLDER: &str = "N/A";
pub const URL_PLACEHOLDER: &str = "（無）";

/// One department row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRecord {
    pub unit: Option<String>,
    /// Normalized lookup terms in file order.
    pub keywords: Vec<String>,
    pub ext: Option<String>,
    pub url: Option<String>,
}

impl DepartmentRecord {
    pub fn new(unit: &str, raw_keywords: &str, ext: &str, url: &str) -> Self {
        Self {
            unit: non_blank(unit),
            keywords: split_keywords(raw_keywords),
            ext: non_blank(ext),
            url: non_blank(url),
        }
    }

    pub fn unit_display(&self) -> &str {
        self.unit.as_deref().unwrap_or(UNIT_PLACEHOLDER)
    }

    pub fn ext_display(&self) -> &str {
        self.ext.as_deref().unwrap_or(EXT_PLACEHOLDER)
    }

    pub fn url_display(&self) -> &str {
        self.url.as_deref().unwrap_or(URL_PLACEHOLDER)
    }

    /// Unit name prepared for the unit-name pass; `None` when the row has no unit.
    pub fn unit_key(&self) -> Option<String> {
        self.unit.as_deref().map(normalize_text)
    }
}

/// Raw CSV row as it appears on disk. Missing optional columns deserialize empty.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    #[serde(default)]
    unit: String,
    #[serde(default)]
    keywords: String,
    #[serde(default)]
    ext: String,
    #[serde(default)]
    url: String,
}

impl From<RawRow> for DepartmentRecord {
    fn from(row: RawRow) -> Self {
        DepartmentRecord::new(&row.unit, &row.keywords, &row.ext, &row.url)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_fall_back_to_placeholders() {
        let record = DepartmentRecord::new("  ", "休學", "", " ");
        assert_eq!(record.unit, None);
        assert_eq!(record.unit_display(), UNIT_PLACEHOLDER);
        assert_eq!(record.ext_display(), "N/A");
        assert_eq!(record.url_display(), URL_PLACEHOLDER);
        assert_eq!(record.unit_key(), None);
    }

    #[test]
    fn filled_cells_are_trimmed() {
        let record = DepartmentRecord::new(" 教務處 ", "休學|復學", " 1234 ", "http://x ");
        assert_eq!(record.unit_display(), "教務處");
        assert_eq!(record.ext_display(), "1234");
        assert_eq!(record.url_display(), "http://x");
        assert_eq!(record.keywords, vec!["休學", "復學"]);
    }
}
