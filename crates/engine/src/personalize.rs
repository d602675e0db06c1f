//! Static multiplicative timeline personalization.
//!
//! Produces a single multiplier from a patient's risk factors. A learned
//! adjustment for the patient's factor bucket, when one exists, replaces
//! this model entirely (see [`crate::OutcomeLedger`]); the floor applies
//! on both paths.

use recovia_core::{ActivityLevel, PatientFactors, SmokingStatus};

/// Lower bound on the effective multiplier. No upper bound is applied.
pub const MULTIPLIER_FLOOR: f64 = 0.5;

/// Fixed comorbidity multipliers. Names outside this table are ignored.
const COMORBIDITY_MULTIPLIERS: [(&str, f64); 10] = [
    ("diabetes", 1.25),
    ("obesity", 1.20),
    ("copd", 1.30),
    ("heart_failure", 1.35),
    ("chronic_kidney_disease", 1.20),
    ("rheumatoid_arthritis", 1.15),
    ("depression", 1.10),
    ("peripheral_vascular_disease", 1.25),
    ("osteoporosis", 1.15),
    ("anemia", 1.10),
];

/// Compute the static risk multiplier for a set of patient factors.
///
/// Age and BMI contribute additive percentage terms; smoking, activity,
/// and comorbidities scale the running total.
pub(crate) fn static_multiplier(factors: &PatientFactors) -> f64 {
    let mut multiplier = 1.0;

    // +1%/year above 50, -0.5%/year below
    if factors.age > 50 {
        multiplier += f64::from(factors.age - 50) * 0.01;
    } else {
        multiplier -= f64::from(50 - factors.age) * 0.005;
    }

    // +2%/unit of BMI above 30
    if factors.bmi > 30.0 {
        multiplier += (factors.bmi - 30.0) * 0.02;
    }

    multiplier *= match factors.smoking {
        SmokingStatus::Current => 1.25,
        SmokingStatus::Former => 1.05,
        SmokingStatus::Never => 1.0,
    };

    multiplier *= match factors.pre_op_activity {
        ActivityLevel::Active => 0.90,
        ActivityLevel::Sedentary => 1.15,
        ActivityLevel::Light | ActivityLevel::Moderate => 1.0,
    };

    for name in &factors.comorbidities {
        if let Some((_, factor)) = COMORBIDITY_MULTIPLIERS
            .iter()
            .find(|(n, _)| *n == name.as_str())
        {
            multiplier *= factor;
        }
    }

    multiplier
}

/// Apply a multiplier to a base day, clamped to the floor.
///
/// A base day of 0 stays 0 regardless of the multiplier.
pub(crate) fn adjust_day(base_day: u32, multiplier: f64) -> f64 {
    f64::from(base_day) * multiplier.max(MULTIPLIER_FLOOR)
}
