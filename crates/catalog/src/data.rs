//! The built-in milestone table.
//!
//! Expected days and tolerance windows follow published enhanced-recovery
//! pathways for each procedure; weights reflect how strongly a milestone
//! indicates overall recovery.

use recovia_core::{Milestone, MilestoneCategory, MilestoneId, SurgeryType};

use MilestoneCategory::{
    FunctionalIndependence, Mobility, PainManagement, ReturnToWork, WoundHealing,
};
use SurgeryType::{
    Appendectomy, CesareanSection, Cholecystectomy, CoronaryBypass, HerniaRepair, HipReplacement,
    Hysterectomy, KneeReplacement, RotatorCuffRepair, SpinalFusion,
};

#[allow(clippy::too_many_arguments)]
fn row(
    id: &str,
    surgery_type: SurgeryType,
    category: MilestoneCategory,
    description: &str,
    expected_day_post_op: u32,
    tolerance_days: u32,
    weight: f64,
    prerequisites: &[&str],
) -> Milestone {
    Milestone {
        id: MilestoneId::new(id),
        surgery_type,
        category,
        description: description.to_string(),
        expected_day_post_op,
        tolerance_days,
        weight,
        prerequisites: prerequisites.iter().map(|p| MilestoneId::new(*p)).collect(),
    }
}

/// Every row of the standard catalog, in declaration order.
pub fn standard_milestones() -> Vec<Milestone> {
    vec![
        // Knee replacement
        row("kr-mob-1", KneeReplacement, Mobility, "Stand and transfer with walker assistance", 1, 1, 0.9, &[]),
        row("kr-mob-2", KneeReplacement, Mobility, "Walk 50 meters with walker", 3, 2, 0.8, &["kr-mob-1"]),
        row("kr-mob-3", KneeReplacement, Mobility, "Climb a flight of stairs with rail support", 7, 3, 0.7, &["kr-mob-2"]),
        row("kr-mob-4", KneeReplacement, Mobility, "Walk independently without assistive device", 14, 5, 0.9, &["kr-mob-3"]),
        row("kr-mob-5", KneeReplacement, Mobility, "Achieve 120 degrees of knee flexion", 42, 10, 0.8, &["kr-mob-4"]),
        row("kr-wh-1", KneeReplacement, WoundHealing, "Incision dry with no drainage", 5, 2, 0.9, &[]),
        row("kr-wh-2", KneeReplacement, WoundHealing, "Staples or sutures removed", 14, 4, 0.6, &["kr-wh-1"]),
        row("kr-wh-3", KneeReplacement, WoundHealing, "Incision fully closed without signs of infection", 21, 7, 0.8, &["kr-wh-2"]),
        row("kr-pain-1", KneeReplacement, PainManagement, "Pain controlled with oral medication only", 3, 2, 0.8, &[]),
        row("kr-pain-2", KneeReplacement, PainManagement, "Off opioid analgesics", 14, 7, 0.7, &["kr-pain-1"]),
        row("kr-func-1", KneeReplacement, FunctionalIndependence, "Independent with dressing and bathing", 10, 4, 0.7, &[]),
        row("kr-func-2", KneeReplacement, FunctionalIndependence, "Resume driving", 28, 7, 0.5, &["kr-mob-4"]),
        row("kr-rtw-1", KneeReplacement, ReturnToWork, "Return to sedentary work", 42, 14, 0.6, &[]),
        // Hip replacement
        row("hip-mob-1", HipReplacement, Mobility, "Stand and pivot transfer with walker", 1, 1, 0.9, &[]),
        row("hip-mob-2", HipReplacement, Mobility, "Walk 50 meters with walker", 3, 2, 0.8, &["hip-mob-1"]),
        row("hip-mob-3", HipReplacement, Mobility, "Walk independently without assistive device", 21, 7, 0.9, &["hip-mob-2"]),
        row("hip-wh-1", HipReplacement, WoundHealing, "Incision dry with no drainage", 5, 2, 0.9, &[]),
        row("hip-wh-2", HipReplacement, WoundHealing, "Incision fully closed without signs of infection", 21, 7, 0.8, &["hip-wh-1"]),
        row("hip-pain-1", HipReplacement, PainManagement, "Pain controlled with oral medication only", 3, 2, 0.8, &[]),
        row("hip-pain-2", HipReplacement, PainManagement, "Off opioid analgesics", 14, 7, 0.7, &["hip-pain-1"]),
        row("hip-func-1", HipReplacement, FunctionalIndependence, "Independent with dressing and bathing using adaptive aids", 14, 5, 0.7, &[]),
        row("hip-rtw-1", HipReplacement, ReturnToWork, "Return to sedentary work", 42, 14, 0.6, &[]),
        // Spinal fusion
        row("sf-mob-1", SpinalFusion, Mobility, "Walk short distances on the ward", 2, 1, 0.9, &[]),
        row("sf-mob-2", SpinalFusion, Mobility, "Walk 500 meters outdoors", 21, 7, 0.8, &["sf-mob-1"]),
        row("sf-wh-1", SpinalFusion, WoundHealing, "Incision dry with no drainage", 7, 3, 0.9, &[]),
        row("sf-wh-2", SpinalFusion, WoundHealing, "Incision fully closed without signs of infection", 28, 7, 0.8, &["sf-wh-1"]),
        row("sf-pain-1", SpinalFusion, PainManagement, "Off opioid analgesics", 28, 10, 0.7, &[]),
        row("sf-func-1", SpinalFusion, FunctionalIndependence, "Independent with self-care observing lifting precautions", 21, 7, 0.7, &[]),
        row("sf-rtw-1", SpinalFusion, ReturnToWork, "Return to sedentary work", 56, 14, 0.6, &[]),
        // Coronary bypass
        row("cb-mob-1", CoronaryBypass, Mobility, "Sit out of bed and march in place", 1, 1, 0.9, &[]),
        row("cb-mob-2", CoronaryBypass, Mobility, "Walk 300 meters without angina", 14, 5, 0.8, &["cb-mob-1"]),
        row("cb-wh-1", CoronaryBypass, WoundHealing, "Sternal incision dry with no drainage", 7, 3, 0.9, &[]),
        row("cb-wh-2", CoronaryBypass, WoundHealing, "Sternum stable without clicking", 42, 10, 0.8, &["cb-wh-1"]),
        row("cb-pain-1", CoronaryBypass, PainManagement, "Pain controlled with oral medication only", 5, 2, 0.8, &[]),
        row("cb-func-1", CoronaryBypass, FunctionalIndependence, "Independent with light household activity", 21, 7, 0.7, &[]),
        row("cb-func-2", CoronaryBypass, FunctionalIndependence, "Begin cardiac rehabilitation program", 28, 10, 0.8, &["cb-mob-2"]),
        row("cb-rtw-1", CoronaryBypass, ReturnToWork, "Return to sedentary work", 56, 14, 0.6, &[]),
        // Rotator cuff repair
        row("rc-mob-1", RotatorCuffRepair, Mobility, "Begin pendulum exercises", 3, 2, 0.8, &[]),
        row("rc-mob-2", RotatorCuffRepair, Mobility, "Passive forward flexion to 120 degrees", 28, 10, 0.8, &["rc-mob-1"]),
        row("rc-wh-1", RotatorCuffRepair, WoundHealing, "Portal incisions closed without drainage", 10, 3, 0.8, &[]),
        row("rc-pain-1", RotatorCuffRepair, PainManagement, "Off opioid analgesics", 10, 5, 0.7, &[]),
        row("rc-func-1", RotatorCuffRepair, FunctionalIndependence, "Out of sling for daily activities", 42, 10, 0.8, &["rc-mob-2"]),
        row("rc-rtw-1", RotatorCuffRepair, ReturnToWork, "Return to desk work", 14, 7, 0.6, &[]),
        // Cholecystectomy
        row("cc-mob-1", Cholecystectomy, Mobility, "Walk unassisted on the ward", 1, 1, 0.9, &[]),
        row("cc-wh-1", Cholecystectomy, WoundHealing, "Port sites dry with no drainage", 5, 2, 0.9, &[]),
        row("cc-pain-1", Cholecystectomy, PainManagement, "Pain controlled without opioids", 4, 2, 0.8, &[]),
        row("cc-func-1", Cholecystectomy, FunctionalIndependence, "Resume normal diet without biliary symptoms", 7, 3, 0.8, &[]),
        row("cc-func-2", Cholecystectomy, FunctionalIndependence, "Resume full daily activity", 14, 5, 0.7, &["cc-mob-1"]),
        row("cc-rtw-1", Cholecystectomy, ReturnToWork, "Return to work", 10, 4, 0.6, &[]),
        // Hernia repair
        row("hr-mob-1", HerniaRepair, Mobility, "Walk unassisted on the day of surgery", 0, 1, 0.9, &[]),
        row("hr-wh-1", HerniaRepair, WoundHealing, "Incision dry with no drainage", 5, 2, 0.9, &[]),
        row("hr-pain-1", HerniaRepair, PainManagement, "Pain controlled without opioids", 5, 3, 0.8, &[]),
        row("hr-func-1", HerniaRepair, FunctionalIndependence, "Resume light lifting under 5 kg", 14, 5, 0.7, &["hr-wh-1"]),
        row("hr-rtw-1", HerniaRepair, ReturnToWork, "Return to non-manual work", 10, 4, 0.6, &[]),
        // Appendectomy
        row("ap-mob-1", Appendectomy, Mobility, "Walk unassisted on the ward", 1, 1, 0.9, &[]),
        row("ap-wh-1", Appendectomy, WoundHealing, "Port sites dry with no drainage", 5, 2, 0.9, &[]),
        row("ap-pain-1", Appendectomy, PainManagement, "Pain controlled without opioids", 4, 2, 0.8, &[]),
        row("ap-func-1", Appendectomy, FunctionalIndependence, "Resume full daily activity", 10, 4, 0.7, &["ap-mob-1"]),
        row("ap-rtw-1", Appendectomy, ReturnToWork, "Return to work or school", 10, 4, 0.6, &[]),
        // Cesarean section
        row("cs-mob-1", CesareanSection, Mobility, "Walk to the bathroom with minimal support", 1, 1, 0.9, &[]),
        row("cs-mob-2", CesareanSection, Mobility, "Climb stairs comfortably", 10, 4, 0.7, &["cs-mob-1"]),
        row("cs-wh-1", CesareanSection, WoundHealing, "Incision dry with no drainage", 7, 3, 0.9, &[]),
        row("cs-wh-2", CesareanSection, WoundHealing, "Incision fully closed without signs of infection", 21, 7, 0.8, &["cs-wh-1"]),
        row("cs-pain-1", CesareanSection, PainManagement, "Pain controlled with oral medication only", 4, 2, 0.8, &[]),
        row("cs-func-1", CesareanSection, FunctionalIndependence, "Independent with newborn care and self-care", 14, 5, 0.8, &[]),
        row("cs-rtw-1", CesareanSection, ReturnToWork, "Cleared for driving and return to work", 21, 7, 0.5, &[]),
        // Hysterectomy
        row("hy-mob-1", Hysterectomy, Mobility, "Walk unassisted on the ward", 2, 1, 0.9, &[]),
        row("hy-wh-1", Hysterectomy, WoundHealing, "Incisions dry with no drainage", 7, 3, 0.9, &[]),
        row("hy-pain-1", Hysterectomy, PainManagement, "Off opioid analgesics", 10, 4, 0.7, &[]),
        row("hy-func-1", Hysterectomy, FunctionalIndependence, "Resume light household activity", 14, 5, 0.7, &[]),
        row("hy-func-2", Hysterectomy, FunctionalIndependence, "Resume full daily activity without pelvic pressure", 42, 10, 0.7, &["hy-func-1"]),
        row("hy-rtw-1", Hysterectomy, ReturnToWork, "Return to sedentary work", 28, 10, 0.6, &[]),
    ]
}
