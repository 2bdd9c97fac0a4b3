use thiserror::Error;
use tracing::{debug, info};

use crate::states::normalize_code;
use crate::store::{RecordStore, StoreError, TrackingRecord, load_or_default};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown state code: {0}")]
    UnknownState(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a status toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    Completed(String),
    AlreadyCompleted(String),
    Reopened(String),
    AlreadyNotHad(String),
}

impl MarkOutcome {
    /// Whether the record was modified and needs saving.
    pub fn changed(&self) -> bool {
        matches!(self, MarkOutcome::Completed(_) | MarkOutcome::Reopened(_))
    }

    pub fn message(&self) -> String {
        match self {
            MarkOutcome::Completed(code) => format!("Marked {} as completed!", code),
            MarkOutcome::AlreadyCompleted(code) => {
                format!("{} was already marked as completed.", code)
            }
            MarkOutcome::Reopened(code) => format!("Marked {} as not had.", code),
            MarkOutcome::AlreadyNotHad(code) => format!("{} was already marked as not had.", code),
        }
    }
}

/// Remove `code` from the record's `not_had` list.
pub fn mark_completed(record: &mut TrackingRecord, code: &str) -> Result<MarkOutcome, TrackerError> {
    let code = normalize_code(code);
    if !record.is_known(&code) {
        return Err(TrackerError::UnknownState(code));
    }
    match record.not_had.iter().position(|c| *c == code) {
        Some(idx) => {
            record.not_had.remove(idx);
            debug!(%code, remaining = record.not_had.len(), "state completed");
            Ok(MarkOutcome::Completed(code))
        }
        None => Ok(MarkOutcome::AlreadyCompleted(code)),
    }
}

/// Put `code` back on the record's `not_had` list.
pub fn mark_not_had(record: &mut TrackingRecord, code: &str) -> Result<MarkOutcome, TrackerError> {
    let code = normalize_code(code);
    if !record.is_known(&code) {
        return Err(TrackerError::UnknownState(code));
    }
    if record.not_had.contains(&code) {
        return Ok(MarkOutcome::AlreadyNotHad(code));
    }
    record.not_had.push(code.clone());
    debug!(%code, remaining = record.not_had.len(), "state reopened");
    Ok(MarkOutcome::Reopened(code))
}

/// Load the record, apply a toggle, and save it if anything changed.
///
/// Save failures are returned with the outcome rather than as an error so
/// the caller can still report what happened in memory.
pub fn toggle_and_save(
    store: &dyn RecordStore,
    code: &str,
    toggle: fn(&mut TrackingRecord, &str) -> Result<MarkOutcome, TrackerError>,
) -> Result<ToggleReport, TrackerError> {
    let (mut record, load_error) = load_or_default(store);
    let outcome = toggle(&mut record, code)?;
    let save_error = if outcome.changed() {
        match store.save(&record) {
            Ok(()) => {
                info!(location = %store.location(), "record updated");
                None
            }
            Err(e) => Some(e),
        }
    } else {
        None
    };
    Ok(ToggleReport {
        outcome,
        record,
        load_error,
        save_error,
    })
}

/// Everything the CLI needs to report after a toggle.
#[derive(Debug)]
pub struct ToggleReport {
    pub outcome: MarkOutcome,
    pub record: TrackingRecord,
    pub load_error: Option<StoreError>,
    pub save_error: Option<StoreError>,
}

/// Completion counts for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(record: &TrackingRecord) -> Self {
        let total = record.states.len();
        Self {
            completed: total.saturating_sub(record.not_had.len()),
            total,
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Progress: {}/{} states ({:.1}%)",
            self.completed,
            self.total,
            self.percentage()
        )
    }

    pub fn had_label(&self) -> String {
        format!("Had Beer ({} states)", self.completed)
    }

    pub fn not_had_label(&self) -> String {
        format!("Not Had ({} states)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonFileStore, MockRecordStore};
    use tempfile::TempDir;

    fn default_record() -> TrackingRecord {
        TrackingRecord::default()
    }

    #[test]
    fn test_mark_completed_case_insensitive() {
        let mut rec = default_record();
        let outcome = mark_completed(&mut rec, "al").unwrap();
        assert_eq!(outcome, MarkOutcome::Completed("AL".into()));
        assert_eq!(rec.not_had, vec!["AK", "KS", "MS", "NE", "SD"]);
    }

    #[test]
    fn test_mark_completed_is_idempotent() {
        let mut rec = default_record();
        mark_completed(&mut rec, "KS").unwrap();
        let after_first = rec.not_had.clone();

        let outcome = mark_completed(&mut rec, "KS").unwrap();
        assert_eq!(outcome, MarkOutcome::AlreadyCompleted("KS".into()));
        assert!(!outcome.changed());
        assert_eq!(rec.not_had, after_first);
        assert_eq!(outcome.message(), "KS was already marked as completed.");
    }

    #[test]
    fn test_mark_completed_unknown_code_is_error() {
        let mut rec = default_record();
        let err = mark_completed(&mut rec, "zz").unwrap_err();
        assert!(matches!(err, TrackerError::UnknownState(ref c) if c == "ZZ"));
        assert_eq!(rec, default_record());
    }

    #[test]
    fn test_mark_not_had_appends() {
        let mut rec = default_record();
        let outcome = mark_not_had(&mut rec, "tx").unwrap();
        assert_eq!(outcome, MarkOutcome::Reopened("TX".into()));
        assert_eq!(rec.not_had.last().map(String::as_str), Some("TX"));

        let again = mark_not_had(&mut rec, "TX").unwrap();
        assert_eq!(again, MarkOutcome::AlreadyNotHad("TX".into()));
        assert_eq!(rec.not_had.iter().filter(|c| *c == "TX").count(), 1);
    }

    #[test]
    fn test_mark_not_had_unknown_code_is_error() {
        let mut rec = default_record();
        assert!(mark_not_had(&mut rec, "PR").is_err());
        assert_eq!(rec, default_record());
    }

    #[test]
    fn test_toggle_and_save_updates_file() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("states_data.json"));

        let report = toggle_and_save(&store, "al", mark_completed).unwrap();
        assert_eq!(report.outcome.message(), "Marked AL as completed!");
        assert!(report.save_error.is_none());

        let saved = store.load().unwrap();
        assert_eq!(saved.not_had, vec!["AK", "KS", "MS", "NE", "SD"]);
    }

    #[test]
    fn test_toggle_and_save_skips_save_when_unchanged() {
        let mut store = MockRecordStore::new();
        store.expect_load().returning(|| Ok(TrackingRecord::default()));
        store.expect_save().times(0);

        let report = toggle_and_save(&store, "TX", mark_completed).unwrap();
        assert_eq!(report.outcome, MarkOutcome::AlreadyCompleted("TX".into()));
    }

    #[test]
    fn test_toggle_and_save_unknown_code_does_not_save() {
        let mut store = MockRecordStore::new();
        store.expect_load().returning(|| Ok(TrackingRecord::default()));
        store.expect_save().times(0);

        assert!(toggle_and_save(&store, "XX", mark_completed).is_err());
    }

    #[test]
    fn test_toggle_and_save_reports_save_failure() {
        let mut store = MockRecordStore::new();
        store.expect_load().returning(|| Ok(TrackingRecord::default()));
        store.expect_save().times(1).returning(|_| {
            Err(StoreError::WriteFailed {
                path: "/nope".into(),
                source: std::io::Error::other("disk full"),
            })
        });

        let report = toggle_and_save(&store, "NE", mark_completed).unwrap();
        assert!(report.outcome.changed());
        assert!(report.save_error.is_some());
        assert!(!report.record.not_had.contains(&"NE".to_string()));
    }

    #[test]
    fn test_progress_fifty_states() {
        let states: Vec<String> = crate::states::all_codes()
            .filter(|c| *c != "DC")
            .map(String::from)
            .collect();
        let rec = TrackingRecord {
            states,
            not_had: default_record().not_had,
        };
        let progress = Progress::of(&rec);
        assert_eq!(progress.total, 50);
        assert_eq!(progress.completed, 44);
        assert!((progress.percentage() - 88.0).abs() < 1e-9);
        assert_eq!(progress.summary(), "Progress: 44/50 states (88.0%)");
    }

    #[test]
    fn test_progress_labels() {
        let progress = Progress::of(&default_record());
        assert_eq!(progress.had_label(), "Had Beer (45 states)");
        assert_eq!(progress.not_had_label(), "Not Had (6 states)");
        assert_eq!(progress.summary(), "Progress: 45/51 states (88.2%)");
    }

    #[test]
    fn test_progress_empty_record() {
        let rec = TrackingRecord {
            states: vec![],
            not_had: vec![],
        };
        let progress = Progress::of(&rec);
        assert_eq!(progress.percentage(), 0.0);
        assert_eq!(progress.remaining(), 0);
    }
}
