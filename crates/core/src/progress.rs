//! Per-patient milestone progress.

use serde::{Deserialize, Serialize};

use crate::Time;

/// Status of a milestone for one patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Achieved,
    Skipped,
}

/// Error for an unrecognized progress status string.
#[derive(Debug, thiserror::Error)]
#[error("unknown progress status: {0}")]
pub struct UnknownProgressStatus(pub String);

impl std::str::FromStr for ProgressStatus {
    type Err = UnknownProgressStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(ProgressStatus::NotStarted),
            "in_progress" => Ok(ProgressStatus::InProgress),
            "achieved" => Ok(ProgressStatus::Achieved),
            "skipped" => Ok(ProgressStatus::Skipped),
            other => Err(UnknownProgressStatus(other.to_string())),
        }
    }
}

/// The live progress row for one (patient, milestone) pair.
///
/// At most one entry exists per pair; a later write replaces the earlier
/// one wholesale. `achieved_day` is `Some` only while `status` is
/// [`ProgressStatus::Achieved`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Current status
    pub status: ProgressStatus,

    /// Post-op day of achievement, when achieved
    pub achieved_day: Option<u32>,

    /// Free-form clinician notes
    pub notes: String,

    /// When this entry was last written
    pub recorded_at: Time,
}
