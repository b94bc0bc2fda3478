use serde::Serialize;

use crate::record::DepartmentRecord;

pub struct Hit {
    pub index: usize,
    pub pass: MatchPass,
    pub term: String,
}

pub trait Matcher: Send + Sync {
    /// Returns the first record, in table order, that matches `text`.
    /// `text` must already be normalized.
    fn find(&self, records: &[DepartmentRecord], text: &str) -> Option<Hit>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPass {
    Keyword,
    UnitName,
}

impl MatchPass {
    /// Keyword hits always take precedence over unit-name hits.
    pub const ORDER: [MatchPass; 2] = [MatchPass::Keyword, MatchPass::UnitName];

    pub fn instantiate(&self) -> Box<dyn Matcher> {
        match self {
            MatchPass::Keyword => Box::new(KeywordMatcher),
            MatchPass::UnitName => Box::new(UnitNameMatcher),
        }
    }
}

struct KeywordMatcher;

impl Matcher for KeywordMatcher {
    fn find(&self, records: &[DepartmentRecord], text: &str) -> Option<Hit> {
        records.iter().enumerate().find_map(|(index, record)| {
            record
                .keywords
                .iter()
                .find(|term| text.contains(term.as_str()))
                .map(|term| Hit {
                    index,
                    pass: MatchPass::Keyword,
                    term: term.clone(),
                })
        })
    }
}

struct UnitNameMatcher;

impl Matcher for UnitNameMatcher {
    fn find(&self, records: &[DepartmentRecord], text: &str) -> Option<Hit> {
        records.iter().enumerate().find_map(|(index, record)| {
            let unit = record.unit_key()?;
            text.contains(unit.as_str()).then(|| Hit {
                index,
                pass: MatchPass::UnitName,
                term: unit,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DepartmentRecord> {
        vec![
            DepartmentRecord::new("教務處", "休學|復學", "1234", "http://x"),
            DepartmentRecord::new("學務處", "獎學金|宿舍", "5678", ""),
            DepartmentRecord::new("", "", "9999", ""),
        ]
    }

    #[test]
    fn keyword_pass_reports_first_matching_term_of_first_record() {
        let hit = MatchPass::Keyword
            .instantiate()
            .find(&records(), "復學跟休學")
            .expect("keyword hit");
        assert_eq!(hit.index, 0);
        assert_eq!(hit.term, "休學");
        assert_eq!(hit.pass, MatchPass::Keyword);
    }

    #[test]
    fn unit_pass_skips_rows_without_unit() {
        let matcher = MatchPass::UnitName.instantiate();
        assert!(matcher.find(&records(), "").is_none());
        let hit = matcher.find(&records(), "請問學務處在哪").expect("unit hit");
        assert_eq!(hit.index, 1);
        assert_eq!(hit.term, "學務處");
    }
}
