use crate::posting::JobPosting;
use crate::vocab::{storage_columns, LANGUAGES};

/// Text fields trailing the language flags, in column order.
pub const TEXT_COLUMNS: &[&str] = &["title", "location", "url"];

/// Fixed-width row: one 0/1 flag per vocabulary entry, in vocabulary order,
/// then title, location, url. Absent languages are explicit 0, never omitted.
#[derive(Debug)]
pub struct JobRecord {
    pub flags: Vec<u8>,
    pub title: String,
    pub location: String,
    pub url: String,
}

impl JobRecord {
    /// Deterministic and infallible: `posting.languages` is a subset of the
    /// vocabulary by the matcher's exact-match contract.
    pub fn build(posting: &JobPosting) -> JobRecord {
        let flags = LANGUAGES
            .iter()
            .map(|lang| u8::from(posting.languages.contains(lang)))
            .collect();
        JobRecord {
            flags,
            title: posting.title.clone(),
            location: posting.location.clone(),
            url: posting.url.clone(),
        }
    }

    /// Column names in row order. This is the schema of record: the table
    /// definition and the CSV header are both derived from it.
    pub fn columns() -> Vec<&'static str> {
        storage_columns().chain(TEXT_COLUMNS.iter().copied()).collect()
    }

    /// Field values in the same order as `columns`.
    pub fn values(&self) -> Vec<String> {
        self.flags
            .iter()
            .map(u8::to_string)
            .chain([self.title.clone(), self.location.clone(), self.url.clone()])
            .collect()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn posting(languages: &[&'static str]) -> JobPosting {
        JobPosting {
            title: "Backend Engineer".to_string(),
            location: "London".to_string(),
            url: "https://www.reed.co.uk/jobs/123".to_string(),
            languages: languages.iter().copied().collect::<HashSet<_>>(),
        }
    }

    #[test]
    fn fixed_width_even_when_empty() {
        let record = JobRecord::build(&posting(&[]));
        assert_eq!(record.flags.len(), LANGUAGES.len());
        assert!(record.flags.iter().all(|f| *f == 0));
        assert_eq!(record.values().len(), LANGUAGES.len() + 3);
    }

    #[test]
    fn columns_match_values_in_length_and_order() {
        let record = JobRecord::build(&posting(&["python"]));
        let columns = JobRecord::columns();
        let values = record.values();
        assert_eq!(columns.len(), values.len());
        assert_eq!(columns[columns.len() - 3..], ["title", "location", "url"]);
        assert_eq!(values[values.len() - 3], "Backend Engineer");
    }

    #[test]
    fn detected_languages_flag_to_one() {
        let record = JobRecord::build(&posting(&["python", "rust", "c++"]));
        let columns = JobRecord::columns();
        let values = record.values();
        let get = |col: &str| {
            let i = columns.iter().position(|c| *c == col).unwrap();
            values[i].clone()
        };
        assert_eq!(get("python"), "1");
        assert_eq!(get("rust"), "1");
        assert_eq!(get("cpp"), "1");
        assert_eq!(get("javascript"), "0");
    }

    #[test]
    fn sql_unsafe_names_never_surface() {
        let record = JobRecord::build(&posting(&["c#", "c++"]));
        let columns = JobRecord::columns();
        assert!(!columns.contains(&"c#"));
        assert!(!columns.contains(&"c++"));
        let get = |col: &str| {
            let i = columns.iter().position(|c| *c == col).unwrap();
            record.values()[i].clone()
        };
        assert_eq!(get("c_sharp"), "1");
        assert_eq!(get("cpp"), "1");
    }
}
