//! Comparative progress analysis.

use std::collections::BTreeMap;

use recovia_catalog::Catalog;
use recovia_core::{
    ComparativeAnalysis, MilestoneCategory, PatientId, ProgressStatus, SurgeryType,
};

use crate::store::ProgressStore;

/// Aggregate weighted completion for one patient.
///
/// Only milestones due by now (expected day within the current tolerance
/// window) enter the denominator. Achieved milestones are bucketed into
/// three counters against the raw catalog day; significantly-behind folds
/// into behind at this level of summary.
pub(crate) fn comparative_analysis(
    catalog: &Catalog,
    store: &ProgressStore,
    patient: &PatientId,
    surgery: SurgeryType,
    current_day: u32,
) -> ComparativeAnalysis {
    let mut total_weight = 0.0;
    let mut achieved_weight = 0.0;
    // (due weight, achieved weight) per category, all five always present
    let mut by_category: BTreeMap<MilestoneCategory, (f64, f64)> = MilestoneCategory::ALL
        .iter()
        .map(|&category| (category, (0.0, 0.0)))
        .collect();
    let mut ahead_count = 0;
    let mut on_track_count = 0;
    let mut behind_count = 0;

    for milestone in catalog.milestones(surgery) {
        if milestone.expected_day_post_op > current_day + milestone.tolerance_days {
            continue; // not yet due
        }

        total_weight += milestone.weight;
        let category = by_category.entry(milestone.category).or_insert((0.0, 0.0));
        category.0 += milestone.weight;

        let achieved = store
            .get(patient, &milestone.id)
            .filter(|entry| entry.status == ProgressStatus::Achieved);
        let Some(entry) = achieved else { continue };

        achieved_weight += milestone.weight;
        category.1 += milestone.weight;

        let deviation = entry
            .achieved_day
            .map(|day| i64::from(day) - i64::from(milestone.expected_day_post_op))
            .unwrap_or(0);
        let tolerance = i64::from(milestone.tolerance_days);
        if deviation < -tolerance {
            ahead_count += 1;
        } else if deviation <= tolerance {
            on_track_count += 1;
        } else {
            behind_count += 1;
        }
    }

    let overall_progress_pct = if total_weight > 0.0 {
        achieved_weight / total_weight * 100.0
    } else {
        0.0
    };

    let category_breakdown = by_category
        .into_iter()
        .map(|(category, (due, achieved))| {
            let pct = if due > 0.0 { achieved / due * 100.0 } else { 0.0 };
            (category, pct)
        })
        .collect();

    ComparativeAnalysis {
        patient_id: patient.clone(),
        surgery_type: surgery,
        overall_progress_pct,
        category_breakdown,
        cohort_percentile: cohort_percentile(overall_progress_pct),
        ahead_count,
        on_track_count,
        behind_count,
    }
}

/// Synthetic cohort standing derived from overall progress.
///
/// Placeholder formula, not an empirical distribution; kept verbatim for
/// compatibility with existing consumers and unsuitable for clinical
/// population comparison.
pub(crate) fn cohort_percentile(progress_pct: f64) -> u8 {
    ((progress_pct * 1.1).round() as i64).clamp(1, 99) as u8
}
