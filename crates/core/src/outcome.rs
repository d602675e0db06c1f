//! Observed outcomes and learned timeline adjustments.

use serde::{Deserialize, Serialize};

use crate::factors::PatientFactors;
use crate::id::MilestoneId;
use crate::surgery::SurgeryType;
use crate::Time;

/// One observed (expected, actual) achievement pair. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Procedure the outcome belongs to
    pub surgery_type: SurgeryType,

    /// Factor snapshot at record time
    pub factors: PatientFactors,

    /// Milestone that was achieved
    pub milestone_id: MilestoneId,

    /// Catalog expected day, captured at record time
    pub expected_day: u32,

    /// Day the milestone was actually achieved
    pub actual_day: u32,

    /// When the outcome was recorded
    pub recorded_at: Time,
}

/// Learned actual/expected ratio for one (milestone, factor bucket) pair.
///
/// Maintained as an exponential moving average; once present it overrides
/// the static personalization model for that bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnedAdjustment {
    /// EMA of actual_day / expected_day
    pub ratio: f64,

    /// Number of outcomes folded into the ratio
    pub observations: u32,

    /// Last update time
    pub updated_at: Time,
}
