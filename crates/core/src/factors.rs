//! Patient risk factors and the coarse learning bucket.

use serde::{Deserialize, Serialize};

/// Smoking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

/// Error for an unrecognized smoking status string.
#[derive(Debug, thiserror::Error)]
#[error("unknown smoking status: {0}")]
pub struct UnknownSmokingStatus(pub String);

impl std::str::FromStr for SmokingStatus {
    type Err = UnknownSmokingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(SmokingStatus::Never),
            "former" => Ok(SmokingStatus::Former),
            "current" => Ok(SmokingStatus::Current),
            other => Err(UnknownSmokingStatus(other.to_string())),
        }
    }
}

/// Pre-operative activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

/// Error for an unrecognized activity level string.
#[derive(Debug, thiserror::Error)]
#[error("unknown activity level: {0}")]
pub struct UnknownActivityLevel(pub String);

impl std::str::FromStr for ActivityLevel {
    type Err = UnknownActivityLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            other => Err(UnknownActivityLevel(other.to_string())),
        }
    }
}

/// Caller-supplied risk factors for one patient. Carries no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientFactors {
    /// Age in years
    pub age: u32,

    /// Body mass index
    pub bmi: f64,

    /// Comorbidity names; unrecognized entries are ignored
    pub comorbidities: Vec<String>,

    /// Smoking status
    pub smoking: SmokingStatus,

    /// Activity level before surgery
    pub pre_op_activity: ActivityLevel,
}

impl PatientFactors {
    /// Coarsen these factors into the learning bucket key.
    pub fn bucket(&self) -> FactorBucket {
        FactorBucket {
            age_band: self.age - self.age % 10,
            bmi_tier: BmiTier::of(self.bmi),
            smoking: self.smoking,
        }
    }
}

/// BMI tier used for outcome bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiTier {
    Normal,
    Overweight,
    Obese,
}

impl BmiTier {
    /// Tier boundaries: normal < 25 <= overweight < 30 <= obese.
    pub fn of(bmi: f64) -> Self {
        if bmi >= 30.0 {
            BmiTier::Obese
        } else if bmi >= 25.0 {
            BmiTier::Overweight
        } else {
            BmiTier::Normal
        }
    }
}

/// Coarse patient-factor key for learned adjustments.
///
/// Deliberately lossy: ten-year age bands, three BMI tiers, smoking status.
/// The boundaries are part of the contract - outcomes recorded for one
/// bucket must keep adjusting the same bucket across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorBucket {
    /// Decade floor of the patient's age (47 -> 40)
    pub age_band: u32,

    /// BMI tier
    pub bmi_tier: BmiTier,

    /// Smoking status
    pub smoking: SmokingStatus,
}
