//! Per-patient progress store.

use std::collections::HashMap;

use chrono::Utc;
use recovia_core::{MilestoneId, PatientId, ProgressEntry, ProgressStatus};

/// In-memory progress log keyed by (patient, milestone).
///
/// One live entry per key; a later write replaces the earlier one
/// wholesale. Milestone ids are not validated here - an orphan id is
/// stored like any other and simply never matches a catalog row.
#[derive(Debug, Default)]
pub struct ProgressStore {
    entries: HashMap<PatientId, HashMap<MilestoneId, ProgressEntry>>,
}

impl ProgressStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the entry for (patient, milestone), replacing any prior one.
    ///
    /// `achieved_day` is taken from `day_post_op` only when the status is
    /// achieved; any other status clears a previously recorded day.
    pub fn record(
        &mut self,
        patient: &PatientId,
        milestone: &MilestoneId,
        status: ProgressStatus,
        day_post_op: u32,
        notes: String,
    ) -> ProgressEntry {
        let entry = ProgressEntry {
            status,
            achieved_day: (status == ProgressStatus::Achieved).then_some(day_post_op),
            notes,
            recorded_at: Utc::now(),
        };
        tracing::debug!(patient = %patient, milestone = %milestone, ?status, "progress recorded");
        self.entries
            .entry(patient.clone())
            .or_default()
            .insert(milestone.clone(), entry.clone());
        entry
    }

    /// The live entry for (patient, milestone), if any.
    pub fn get(&self, patient: &PatientId, milestone: &MilestoneId) -> Option<&ProgressEntry> {
        self.entries.get(patient)?.get(milestone)
    }

    /// Number of live entries for one patient.
    pub fn entry_count(&self, patient: &PatientId) -> usize {
        self.entries.get(patient).map_or(0, HashMap::len)
    }
}
