//! Milestone model - a catalog-defined expected recovery event.

use serde::{Deserialize, Serialize};

use crate::id::MilestoneId;
use crate::surgery::{MilestoneCategory, SurgeryType};

/// An evidence-based recovery milestone for one surgery type.
///
/// Catalog rows are loaded once and never mutated. `prerequisites` is
/// informational only; the engine does not enforce achievement ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Globally unique identifier, e.g. `kr-mob-4`
    pub id: MilestoneId,

    /// Procedure this milestone applies to
    pub surgery_type: SurgeryType,

    /// Recovery domain
    pub category: MilestoneCategory,

    /// Human-readable description
    pub description: String,

    /// Expected achievement day post-op (>= 0)
    pub expected_day_post_op: u32,

    /// Acceptable deviation window in days (> 0)
    pub tolerance_days: u32,

    /// Relative importance for progress aggregation, in (0, 1]
    pub weight: f64,

    /// Milestones usually achieved first (informational)
    pub prerequisites: Vec<MilestoneId>,
}
