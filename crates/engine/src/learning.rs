//! Self-learning outcome ledger.
//!
//! Records observed (expected, actual) achievement pairs and maintains a
//! per-(milestone, factor bucket) exponential moving average of the
//! actual/expected ratio. Once a bucket has a learned ratio it fully
//! replaces the static personalization model for that bucket.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::Utc;
use recovia_core::{
    FactorBucket, LearnedAdjustment, Milestone, MilestoneId, OutcomeRecord, PatientFactors,
    SurgeryType,
};

/// Smoothing factor of the ratio EMA.
const EMA_ALPHA: f64 = 0.3;

/// Append-only outcome log plus the learned adjustment table.
#[derive(Debug, Default)]
pub struct OutcomeLedger {
    outcomes: Vec<OutcomeRecord>,
    learned: HashMap<(MilestoneId, FactorBucket), LearnedAdjustment>,
}

impl OutcomeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observed outcome into the ledger.
    ///
    /// The ratio is seeded on the first observation for a bucket and
    /// EMA-updated afterwards. Day-0 milestones divide by 1.
    pub fn record(
        &mut self,
        surgery: SurgeryType,
        factors: &PatientFactors,
        milestone: &Milestone,
        actual_day: u32,
    ) {
        let expected = milestone.expected_day_post_op;
        let ratio = f64::from(actual_day) / f64::from(expected.max(1));
        let now = Utc::now();

        match self.learned.entry((milestone.id.clone(), factors.bucket())) {
            Entry::Occupied(mut occupied) => {
                let adjustment = occupied.get_mut();
                adjustment.ratio = adjustment.ratio * (1.0 - EMA_ALPHA) + ratio * EMA_ALPHA;
                adjustment.observations += 1;
                adjustment.updated_at = now;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(LearnedAdjustment {
                    ratio,
                    observations: 1,
                    updated_at: now,
                });
            }
        }

        tracing::debug!(milestone = %milestone.id, ratio, "outcome recorded");
        self.outcomes.push(OutcomeRecord {
            surgery_type: surgery,
            factors: factors.clone(),
            milestone_id: milestone.id.clone(),
            expected_day: expected,
            actual_day,
            recorded_at: now,
        });
    }

    /// Learned ratio for (milestone, bucket), if any outcomes exist.
    pub fn ratio_for(&self, milestone: &MilestoneId, bucket: FactorBucket) -> Option<f64> {
        self.learned
            .get(&(milestone.clone(), bucket))
            .map(|adjustment| adjustment.ratio)
    }

    /// All recorded outcomes, oldest first.
    pub fn outcomes(&self) -> &[OutcomeRecord] {
        &self.outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recovia_core::{ActivityLevel, MilestoneCategory, SmokingStatus};

    fn milestone(expected_day: u32) -> Milestone {
        Milestone {
            id: MilestoneId::new("test-1"),
            surgery_type: SurgeryType::KneeReplacement,
            category: MilestoneCategory::Mobility,
            description: "Test milestone".to_string(),
            expected_day_post_op: expected_day,
            tolerance_days: 3,
            weight: 0.8,
            prerequisites: Vec::new(),
        }
    }

    fn factors() -> PatientFactors {
        PatientFactors {
            age: 64,
            bmi: 27.0,
            comorbidities: Vec::new(),
            smoking: SmokingStatus::Former,
            pre_op_activity: ActivityLevel::Light,
        }
    }

    #[test]
    fn first_observation_seeds_the_ratio() {
        let mut ledger = OutcomeLedger::new();
        let m = milestone(10);
        ledger.record(SurgeryType::KneeReplacement, &factors(), &m, 15);

        let ratio = ledger.ratio_for(&m.id, factors().bucket()).unwrap();
        assert!((ratio - 1.5).abs() < 1e-9);
    }

    #[test]
    fn later_observations_are_ema_blended() {
        let mut ledger = OutcomeLedger::new();
        let m = milestone(10);
        ledger.record(SurgeryType::KneeReplacement, &factors(), &m, 15);
        ledger.record(SurgeryType::KneeReplacement, &factors(), &m, 25);

        // 1.5 * 0.7 + 2.5 * 0.3
        let ratio = ledger.ratio_for(&m.id, factors().bucket()).unwrap();
        assert!((ratio - 1.8).abs() < 1e-9);
    }

    #[test]
    fn day_zero_milestone_divides_by_one() {
        let mut ledger = OutcomeLedger::new();
        let m = milestone(0);
        ledger.record(SurgeryType::KneeReplacement, &factors(), &m, 2);

        let ratio = ledger.ratio_for(&m.id, factors().bucket()).unwrap();
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn buckets_do_not_cross_contaminate() {
        let mut ledger = OutcomeLedger::new();
        let m = milestone(10);
        ledger.record(SurgeryType::KneeReplacement, &factors(), &m, 20);

        let mut smoker = factors();
        smoker.smoking = SmokingStatus::Current;
        assert!(ledger.ratio_for(&m.id, smoker.bucket()).is_none());
    }

    #[test]
    fn outcomes_append() {
        let mut ledger = OutcomeLedger::new();
        let m = milestone(10);
        ledger.record(SurgeryType::KneeReplacement, &factors(), &m, 12);
        ledger.record(SurgeryType::KneeReplacement, &factors(), &m, 13);

        assert_eq!(ledger.outcomes().len(), 2);
        assert_eq!(ledger.outcomes()[0].actual_day, 12);
        assert_eq!(ledger.outcomes()[1].expected_day, 10);
    }
}
