//! Deviation classification against the personalized timeline.

use recovia_core::{DeviationReport, DeviationStatus, Milestone, ProgressEntry, ProgressStatus};

/// Assess one catalog milestone for one patient.
///
/// `personalized` is the (possibly factor-adjusted) expected day; it is
/// rounded once here and both the report field and the classification use
/// the rounded value.
pub(crate) fn assess_milestone(
    milestone: &Milestone,
    personalized: f64,
    entry: Option<&ProgressEntry>,
    current_day: u32,
) -> DeviationReport {
    let personalized_day = personalized.round() as i64;
    let tolerance = i64::from(milestone.tolerance_days);

    let achieved = entry.filter(|e| e.status == ProgressStatus::Achieved);
    let actual_day = achieved.and_then(|e| e.achieved_day);

    let (status, deviation_days) = match (achieved, actual_day) {
        (Some(_), Some(day)) => {
            classify_achieved(i64::from(day) - personalized_day, tolerance)
        }
        // achieved entry without a day: anomalous write, treated as on
        // schedule rather than guessed at
        (Some(_), None) => (DeviationStatus::OnTrack, 0),
        _ => classify_pending(i64::from(current_day) - personalized_day, tolerance),
    };

    DeviationReport {
        milestone_id: milestone.id.clone(),
        description: milestone.description.clone(),
        expected_day: milestone.expected_day_post_op,
        personalized_day,
        actual_day,
        current_day_post_op: current_day,
        status,
        deviation_days,
        recommendation: recommendation(status, &milestone.description, deviation_days),
    }
}

/// Classification for an achieved milestone. All four states possible.
fn classify_achieved(deviation: i64, tolerance: i64) -> (DeviationStatus, i64) {
    let status = if deviation < -tolerance {
        DeviationStatus::Ahead
    } else if deviation <= tolerance {
        DeviationStatus::OnTrack
    } else if deviation <= 2 * tolerance {
        DeviationStatus::Behind
    } else {
        DeviationStatus::SignificantlyBehind
    };
    (status, deviation)
}

/// Classification for an unachieved milestone, projected from the current
/// day. "Ahead" is impossible: a negative deviation only means the
/// milestone is not yet due.
fn classify_pending(deviation: i64, tolerance: i64) -> (DeviationStatus, i64) {
    let status = if deviation <= tolerance {
        DeviationStatus::OnTrack
    } else if deviation <= 2 * tolerance {
        DeviationStatus::Behind
    } else {
        DeviationStatus::SignificantlyBehind
    };
    (status, deviation)
}

fn recommendation(status: DeviationStatus, description: &str, deviation_days: i64) -> String {
    match status {
        DeviationStatus::Ahead => format!(
            "{description}: achieved {} days ahead of schedule. Recovery is outpacing the expected timeline.",
            deviation_days.abs()
        ),
        DeviationStatus::OnTrack => {
            format!("{description}: progressing within the expected window.")
        }
        DeviationStatus::Behind => format!(
            "{description}: {} days behind the personalized timeline. Consider increasing therapy frequency or scheduling a focused review.",
            deviation_days.abs()
        ),
        DeviationStatus::SignificantlyBehind => format!(
            "{description}: {} days behind the personalized timeline. Clinical review recommended.",
            deviation_days.abs()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use recovia_core::{MilestoneCategory, MilestoneId, SurgeryType};

    fn milestone() -> Milestone {
        Milestone {
            id: MilestoneId::new("kr-mob-4"),
            surgery_type: SurgeryType::KneeReplacement,
            category: MilestoneCategory::Mobility,
            description: "Walk independently without assistive device".to_string(),
            expected_day_post_op: 14,
            tolerance_days: 5,
            weight: 0.9,
            prerequisites: Vec::new(),
        }
    }

    fn achieved_on(day: u32) -> ProgressEntry {
        ProgressEntry {
            status: ProgressStatus::Achieved,
            achieved_day: Some(day),
            notes: String::new(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn achieved_early_is_ahead() {
        let report = assess_milestone(&milestone(), 14.0, Some(&achieved_on(5)), 20);
        assert_eq!(report.status, DeviationStatus::Ahead);
        assert_eq!(report.deviation_days, -9);
        assert!(report.recommendation.contains("9 days ahead"));
    }

    #[test]
    fn achieved_at_tolerance_edge_is_on_track() {
        // deviation -5 and +5 both sit inside [-tolerance, tolerance]
        let early = assess_milestone(&milestone(), 14.0, Some(&achieved_on(9)), 20);
        assert_eq!(early.status, DeviationStatus::OnTrack);

        let late = assess_milestone(&milestone(), 14.0, Some(&achieved_on(19)), 20);
        assert_eq!(late.status, DeviationStatus::OnTrack);
    }

    #[test]
    fn achieved_late_is_behind_up_to_twice_tolerance() {
        let report = assess_milestone(&milestone(), 14.0, Some(&achieved_on(22)), 25);
        assert_eq!(report.status, DeviationStatus::Behind);
        assert_eq!(report.deviation_days, 8);

        let edge = assess_milestone(&milestone(), 14.0, Some(&achieved_on(24)), 25);
        assert_eq!(edge.status, DeviationStatus::Behind);
    }

    #[test]
    fn achieved_very_late_is_significantly_behind() {
        let report = assess_milestone(&milestone(), 14.0, Some(&achieved_on(30)), 35);
        assert_eq!(report.status, DeviationStatus::SignificantlyBehind);
        assert_eq!(report.deviation_days, 16);
        assert!(report.recommendation.contains("Clinical review"));
    }

    #[test]
    fn achieved_without_day_is_on_track() {
        let entry = ProgressEntry {
            status: ProgressStatus::Achieved,
            achieved_day: None,
            notes: String::new(),
            recorded_at: Utc::now(),
        };
        let report = assess_milestone(&milestone(), 14.0, Some(&entry), 40);
        assert_eq!(report.status, DeviationStatus::OnTrack);
        assert_eq!(report.deviation_days, 0);
    }

    #[test]
    fn unachieved_before_due_is_on_track() {
        // day 2 against expected 14: deviation -12, not yet due
        let report = assess_milestone(&milestone(), 14.0, None, 2);
        assert_eq!(report.status, DeviationStatus::OnTrack);
        assert_eq!(report.deviation_days, -12);
    }

    #[test]
    fn unachieved_overdue_escalates() {
        let behind = assess_milestone(&milestone(), 14.0, None, 22);
        assert_eq!(behind.status, DeviationStatus::Behind);

        let significant = assess_milestone(&milestone(), 14.0, None, 25);
        assert_eq!(significant.status, DeviationStatus::SignificantlyBehind);
        assert_eq!(significant.deviation_days, 11);
    }

    #[test]
    fn unachieved_can_never_be_ahead() {
        for day in 0..60 {
            let report = assess_milestone(&milestone(), 14.0, None, day);
            assert_ne!(report.status, DeviationStatus::Ahead, "day {day}");
        }
    }

    #[test]
    fn in_progress_entry_counts_as_unachieved() {
        let entry = ProgressEntry {
            status: ProgressStatus::InProgress,
            achieved_day: None,
            notes: String::new(),
            recorded_at: Utc::now(),
        };
        // day 22 projects a deviation of 8, inside (tolerance, 2*tolerance]
        let report = assess_milestone(&milestone(), 14.0, Some(&entry), 22);
        assert_eq!(report.actual_day, None);
        assert_eq!(report.deviation_days, 8);
        assert_eq!(report.status, DeviationStatus::Behind);

        // past twice the tolerance the projection escalates
        let report = assess_milestone(&milestone(), 14.0, Some(&entry), 25);
        assert_eq!(report.deviation_days, 11);
        assert_eq!(report.status, DeviationStatus::SignificantlyBehind);
    }

    #[test]
    fn personalized_day_is_rounded_and_used_for_classification() {
        // personalized 17.6 rounds to 18; achieved day 23 deviates by 5
        let report = assess_milestone(&milestone(), 17.6, Some(&achieved_on(23)), 30);
        assert_eq!(report.personalized_day, 18);
        assert_eq!(report.deviation_days, 5);
        assert_eq!(report.status, DeviationStatus::OnTrack);
    }
}
