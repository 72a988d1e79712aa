use chrono::{DateTime, Local, TimeZone};
use wordup_types::HistoryEntry;

/// Search history, most recent first.
///
/// No two entries share a term under ASCII case-insensitive comparison.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `term`, dropping any earlier entry for the same word
    pub fn record(&mut self, term: &str, date: String) {
        self.entries.retain(|entry| !entry.term.eq_ignore_ascii_case(term));
        self.entries.insert(
            0,
            HistoryEntry {
                term: term.to_string(),
                date,
            },
        );
    }

    /// Exact, case-sensitive removal
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.term != term);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `M/D/YYYY, h:mm:ss AM`
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn timestamp_now() -> String {
    format_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn terms(history: &History) -> Vec<&str> {
        history.entries().iter().map(|e| e.term.as_str()).collect()
    }

    #[test]
    fn record_prepends() {
        let mut history = History::new();
        history.record("alpha", "d1".into());
        history.record("beta", "d2".into());

        assert_eq!(terms(&history), ["beta", "alpha"]);
    }

    #[test]
    fn record_dedups_case_insensitively() {
        let mut history = History::new();
        history.record("happy", "d1".into());
        history.record("sad", "d2".into());
        history.record("Happy", "d3".into());

        assert_eq!(terms(&history), ["Happy", "sad"]);
        assert_eq!(history.entries()[0].date, "d3");
    }

    #[test]
    fn remove_is_exact_and_keeps_order() {
        let mut history = History::new();
        for term in ["one", "two", "three", "four"] {
            history.record(term, String::new());
        }

        assert!(!history.remove("THREE"));
        assert!(history.remove("three"));
        assert_eq!(terms(&history), ["four", "two", "one"]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut history = History::new();
        for term in ["a", "b", "c"] {
            history.record(term, String::new());
        }

        history.clear();
        assert!(history.is_empty());

        history.clear();
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn timestamp_matches_en_us_locale_layout() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap();
        assert_eq!(format_timestamp(&at), "10/18/2026, 3:04:05 PM");

        let at = Utc.with_ymd_and_hms(2026, 1, 2, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(&at), "1/2/2026, 12:30:00 AM");
    }
}
