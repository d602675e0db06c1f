//! Computed reports - never stored, returned by value to callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{MilestoneId, PatientId};
use crate::milestone::Milestone;
use crate::surgery::{MilestoneCategory, SurgeryType};

/// Classification of the gap between achievement and the personalized
/// expected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationStatus {
    /// Achieved earlier than the tolerance window
    Ahead,
    /// Within the tolerance window (or not yet due)
    OnTrack,
    /// Late by up to twice the tolerance
    Behind,
    /// Late by more than twice the tolerance
    SignificantlyBehind,
}

/// Per-milestone deviation assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviationReport {
    /// Milestone assessed
    pub milestone_id: MilestoneId,

    /// Milestone description, copied for rendering convenience
    pub description: String,

    /// Catalog expected day
    pub expected_day: u32,

    /// Personalized expected day, rounded
    pub personalized_day: i64,

    /// Achieved day, when the patient has achieved the milestone
    pub actual_day: Option<u32>,

    /// The patient's current post-op day
    pub current_day_post_op: u32,

    /// Gap classification
    pub status: DeviationStatus,

    /// Signed gap in days (negative = early), rounded
    pub deviation_days: i64,

    /// Generated guidance text
    pub recommendation: String,
}

/// A catalog milestone with its personalized expected day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedMilestone {
    /// The catalog row
    #[serde(flatten)]
    pub milestone: Milestone,

    /// Expected day adjusted for the patient's factors (unrounded)
    pub personalized_day: f64,
}

/// Weighted progress summary for one patient against a notional cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    /// Patient assessed
    pub patient_id: PatientId,

    /// Procedure assessed
    pub surgery_type: SurgeryType,

    /// Weighted completion over milestones due by now, 0-100
    pub overall_progress_pct: f64,

    /// Per-category completion, 0-100; always five entries
    pub category_breakdown: BTreeMap<MilestoneCategory, f64>,

    /// Synthetic standing versus a notional cohort, 1-99.
    ///
    /// Derived from overall progress by a placeholder formula, not an
    /// empirical distribution; not suitable for clinical population
    /// comparisons.
    pub cohort_percentile: u8,

    /// Achieved milestones that landed early
    pub ahead_count: usize,

    /// Achieved milestones inside the tolerance window
    pub on_track_count: usize,

    /// Achieved milestones that landed late
    pub behind_count: usize,
}
