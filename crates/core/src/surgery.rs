//! Surgical procedures and milestone categories.

use serde::{Deserialize, Serialize};

/// Surgical procedures covered by the milestone catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeryType {
    KneeReplacement,
    HipReplacement,
    SpinalFusion,
    CoronaryBypass,
    RotatorCuffRepair,
    Cholecystectomy,
    HerniaRepair,
    Appendectomy,
    CesareanSection,
    Hysterectomy,
}

impl SurgeryType {
    /// Stable wire name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurgeryType::KneeReplacement => "knee_replacement",
            SurgeryType::HipReplacement => "hip_replacement",
            SurgeryType::SpinalFusion => "spinal_fusion",
            SurgeryType::CoronaryBypass => "coronary_bypass",
            SurgeryType::RotatorCuffRepair => "rotator_cuff_repair",
            SurgeryType::Cholecystectomy => "cholecystectomy",
            SurgeryType::HerniaRepair => "hernia_repair",
            SurgeryType::Appendectomy => "appendectomy",
            SurgeryType::CesareanSection => "cesarean_section",
            SurgeryType::Hysterectomy => "hysterectomy",
        }
    }
}

impl std::fmt::Display for SurgeryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized surgery type string.
#[derive(Debug, thiserror::Error)]
#[error("unknown surgery type: {0}")]
pub struct UnknownSurgeryType(pub String);

impl std::str::FromStr for SurgeryType {
    type Err = UnknownSurgeryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "knee_replacement" => Ok(SurgeryType::KneeReplacement),
            "hip_replacement" => Ok(SurgeryType::HipReplacement),
            "spinal_fusion" => Ok(SurgeryType::SpinalFusion),
            "coronary_bypass" => Ok(SurgeryType::CoronaryBypass),
            "rotator_cuff_repair" => Ok(SurgeryType::RotatorCuffRepair),
            "cholecystectomy" => Ok(SurgeryType::Cholecystectomy),
            "hernia_repair" => Ok(SurgeryType::HerniaRepair),
            "appendectomy" => Ok(SurgeryType::Appendectomy),
            "cesarean_section" => Ok(SurgeryType::CesareanSection),
            "hysterectomy" => Ok(SurgeryType::Hysterectomy),
            other => Err(UnknownSurgeryType(other.to_string())),
        }
    }
}

/// Recovery domains a milestone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneCategory {
    Mobility,
    WoundHealing,
    PainManagement,
    FunctionalIndependence,
    ReturnToWork,
}

impl MilestoneCategory {
    /// All categories, in breakdown order.
    pub const ALL: [MilestoneCategory; 5] = [
        MilestoneCategory::Mobility,
        MilestoneCategory::WoundHealing,
        MilestoneCategory::PainManagement,
        MilestoneCategory::FunctionalIndependence,
        MilestoneCategory::ReturnToWork,
    ];

    /// Stable wire name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneCategory::Mobility => "mobility",
            MilestoneCategory::WoundHealing => "wound_healing",
            MilestoneCategory::PainManagement => "pain_management",
            MilestoneCategory::FunctionalIndependence => "functional_independence",
            MilestoneCategory::ReturnToWork => "return_to_work",
        }
    }
}

impl std::fmt::Display for MilestoneCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized milestone category string.
#[derive(Debug, thiserror::Error)]
#[error("unknown milestone category: {0}")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for MilestoneCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobility" => Ok(MilestoneCategory::Mobility),
            "wound_healing" => Ok(MilestoneCategory::WoundHealing),
            "pain_management" => Ok(MilestoneCategory::PainManagement),
            "functional_independence" => Ok(MilestoneCategory::FunctionalIndependence),
            "return_to_work" => Ok(MilestoneCategory::ReturnToWork),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn surgery_wire_names_round_trip() {
        let all = [
            SurgeryType::KneeReplacement,
            SurgeryType::HipReplacement,
            SurgeryType::SpinalFusion,
            SurgeryType::CoronaryBypass,
            SurgeryType::RotatorCuffRepair,
            SurgeryType::Cholecystectomy,
            SurgeryType::HerniaRepair,
            SurgeryType::Appendectomy,
            SurgeryType::CesareanSection,
            SurgeryType::Hysterectomy,
        ];
        for surgery in all {
            assert_eq!(SurgeryType::from_str(surgery.as_str()).unwrap(), surgery);
            let json = serde_json::to_string(&surgery).unwrap();
            assert_eq!(json, format!("\"{}\"", surgery.as_str()));
        }
    }

    #[test]
    fn unknown_surgery_is_an_error() {
        assert!(SurgeryType::from_str("unknown_surgery").is_err());
    }

    #[test]
    fn category_wire_names_round_trip() {
        for category in MilestoneCategory::ALL {
            assert_eq!(
                MilestoneCategory::from_str(category.as_str()).unwrap(),
                category
            );
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
