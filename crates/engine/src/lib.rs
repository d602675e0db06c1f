//! Recovia recovery tracking engine.
//!
//! Stateful, synchronous milestone analytics: per-patient progress
//! tracking, multiplicative timeline personalization, a self-learning
//! outcome loop, deviation detection, and comparative progress analysis.
//!
//! The engine owns all of its state in memory. A host that needs
//! durability serializes progress entries, outcomes, and learned
//! adjustments on every mutation and rehydrates at startup; a host with
//! concurrent callers serializes writes per patient.

#![warn(missing_docs)]

mod analysis;
mod deviation;
mod engine;
mod learning;
mod personalize;
mod store;

pub use engine::RecoveryEngine;
pub use learning::OutcomeLedger;
pub use personalize::MULTIPLIER_FLOOR;
pub use store::ProgressStore;
