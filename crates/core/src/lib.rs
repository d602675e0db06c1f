//! Recovia core data models.
//!
//! This crate defines the data structures shared by the milestone catalog
//! and the recovery tracking engine.

#![warn(missing_docs)]

// Core identities
mod id;

// Catalog vocabulary
mod surgery;
mod milestone;

// Patient inputs
mod factors;

// Tracking and learning state
mod progress;
mod outcome;

// Computed reports
mod report;

// Re-exports
pub use id::{MilestoneId, PatientId};

// Surgery & Milestone
pub use surgery::{MilestoneCategory, SurgeryType, UnknownCategory, UnknownSurgeryType};
pub use milestone::Milestone;

// Patient factors
pub use factors::{
    ActivityLevel, BmiTier, FactorBucket, PatientFactors, SmokingStatus, UnknownActivityLevel,
    UnknownSmokingStatus,
};

// Progress & Outcomes
pub use progress::{ProgressEntry, ProgressStatus, UnknownProgressStatus};
pub use outcome::{LearnedAdjustment, OutcomeRecord};

// Reports
pub use report::{
    ComparativeAnalysis, DeviationReport, DeviationStatus, PersonalizedMilestone,
};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
