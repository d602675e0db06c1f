//! The recovery tracking engine facade.

use recovia_catalog::Catalog;
use recovia_core::{
    ComparativeAnalysis, DeviationReport, Milestone, MilestoneCategory, MilestoneId,
    PatientFactors, PatientId, PersonalizedMilestone, ProgressEntry, ProgressStatus, SurgeryType,
};

use crate::analysis;
use crate::deviation;
use crate::learning::OutcomeLedger;
use crate::personalize;
use crate::store::ProgressStore;

/// Stateful recovery milestone tracking engine.
///
/// Owns the milestone catalog and all mutable tracking state. Construct
/// one instance at startup and inject it where needed; callers receive
/// copies and computed reports, never handles into internal state.
///
/// Every operation is synchronous and touches memory only. The engine is
/// best-effort by design: unknown ids and uncovered procedures produce
/// empty or neutral results instead of errors (enum inputs are validated
/// at the host boundary via `FromStr`, before they reach this type).
#[derive(Debug)]
pub struct RecoveryEngine {
    catalog: Catalog,
    progress: ProgressStore,
    ledger: OutcomeLedger,
}

impl RecoveryEngine {
    /// Engine over the built-in standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    /// Engine over a host-supplied catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            progress: ProgressStore::new(),
            ledger: OutcomeLedger::new(),
        }
    }

    /// The catalog this engine assesses against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog milestones for a surgery type, optionally filtered by
    /// category. Declaration order; empty for an uncovered procedure.
    pub fn milestones(
        &self,
        surgery: SurgeryType,
        category: Option<MilestoneCategory>,
    ) -> Vec<Milestone> {
        match category {
            Some(category) => self.catalog.milestones_in(surgery, category).cloned().collect(),
            None => self.catalog.milestones(surgery).cloned().collect(),
        }
    }

    /// Record a patient's progress on a milestone, replacing any prior
    /// entry for the same pair.
    ///
    /// The milestone id is not validated against the catalog; an orphan
    /// id is stored but never surfaces in deviation reports.
    pub fn track_progress(
        &mut self,
        patient: &PatientId,
        milestone: &MilestoneId,
        status: ProgressStatus,
        day_post_op: u32,
        notes: impl Into<String>,
    ) -> ProgressEntry {
        if self.catalog.get(milestone).is_none() {
            tracing::warn!(milestone = %milestone, "progress recorded for id outside the catalog");
        }
        self.progress
            .record(patient, milestone, status, day_post_op, notes.into())
    }

    /// Assess every catalog milestone of a surgery type for one patient.
    ///
    /// With factors supplied, expected days are personalized first.
    /// Reports cover all milestones regardless of the current day;
    /// filtering to the relevant window is the caller's concern.
    pub fn assess_deviation(
        &self,
        patient: &PatientId,
        surgery: SurgeryType,
        current_day: u32,
        factors: Option<&PatientFactors>,
    ) -> Vec<DeviationReport> {
        self.catalog
            .milestones(surgery)
            .map(|milestone| {
                let personalized = match factors {
                    Some(factors) => self.adjusted_day(milestone, factors),
                    None => f64::from(milestone.expected_day_post_op),
                };
                deviation::assess_milestone(
                    milestone,
                    personalized,
                    self.progress.get(patient, &milestone.id),
                    current_day,
                )
            })
            .collect()
    }

    /// The full timeline for a surgery type with expected days adjusted
    /// to the given factors.
    pub fn personalize_timeline(
        &self,
        surgery: SurgeryType,
        factors: &PatientFactors,
    ) -> Vec<PersonalizedMilestone> {
        self.catalog
            .milestones(surgery)
            .map(|milestone| PersonalizedMilestone {
                milestone: milestone.clone(),
                personalized_day: self.adjusted_day(milestone, factors),
            })
            .collect()
    }

    /// Weighted completion summary over the milestones due by now.
    pub fn comparative_analysis(
        &self,
        patient: &PatientId,
        surgery: SurgeryType,
        current_day: u32,
    ) -> ComparativeAnalysis {
        analysis::comparative_analysis(&self.catalog, &self.progress, patient, surgery, current_day)
    }

    /// Feed an observed achievement into the self-learning loop.
    ///
    /// A no-op for milestone ids outside the catalog.
    pub fn record_outcome(
        &mut self,
        surgery: SurgeryType,
        factors: &PatientFactors,
        milestone: &MilestoneId,
        actual_day: u32,
    ) {
        let Some(row) = self.catalog.get(milestone) else {
            tracing::warn!(milestone = %milestone, "outcome for unknown milestone ignored");
            return;
        };
        self.ledger.record(surgery, factors, row, actual_day);
    }

    /// Personalized expected day for one milestone: the learned bucket
    /// ratio when present, otherwise the static factor model. The 0.5
    /// multiplier floor applies on both paths.
    fn adjusted_day(&self, milestone: &Milestone, factors: &PatientFactors) -> f64 {
        let multiplier = self
            .ledger
            .ratio_for(&milestone.id, factors.bucket())
            .unwrap_or_else(|| personalize::static_multiplier(factors));
        personalize::adjust_day(milestone.expected_day_post_op, multiplier)
    }
}

impl Default for RecoveryEngine {
    fn default() -> Self {
        Self::new()
    }
}
