//! Recovia milestone catalog.
//!
//! A static, versioned table of evidence-based recovery milestones, one
//! set per surgical procedure. Pure data plus lookups; all tracking state
//! lives in `recovia-engine`.

#![warn(missing_docs)]

mod data;

use std::collections::HashMap;

use recovia_core::{Milestone, MilestoneCategory, MilestoneId, SurgeryType};

/// Version tag of the built-in milestone table.
pub const CATALOG_VERSION: &str = "2026.1";

/// Immutable milestone table with an id index.
///
/// Rows keep their declaration order, so every lookup is stable and
/// deterministic across calls.
#[derive(Debug, Clone)]
pub struct Catalog {
    rows: Vec<Milestone>,
    by_id: HashMap<MilestoneId, usize>,
}

impl Catalog {
    /// The built-in evidence-based catalog ([`CATALOG_VERSION`]).
    pub fn standard() -> Self {
        Self::from_milestones(data::standard_milestones())
    }

    /// Build a catalog from host-supplied rows, keeping their order.
    pub fn from_milestones(rows: Vec<Milestone>) -> Self {
        let by_id = rows
            .iter()
            .enumerate()
            .map(|(idx, m)| (m.id.clone(), idx))
            .collect();
        Self { rows, by_id }
    }

    /// All milestones for a surgery type, in declaration order.
    ///
    /// Empty for a procedure the catalog does not cover; never errors.
    pub fn milestones(&self, surgery: SurgeryType) -> impl Iterator<Item = &Milestone> {
        self.rows.iter().filter(move |m| m.surgery_type == surgery)
    }

    /// Milestones for a surgery type restricted to one category.
    pub fn milestones_in(
        &self,
        surgery: SurgeryType,
        category: MilestoneCategory,
    ) -> impl Iterator<Item = &Milestone> {
        self.milestones(surgery).filter(move |m| m.category == category)
    }

    /// Look up a milestone by id.
    pub fn get(&self, id: &MilestoneId) -> Option<&Milestone> {
        self.by_id.get(id).map(|&idx| &self.rows[idx])
    }

    /// Total number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn knee_replacement_has_a_full_milestone_set() {
        let catalog = Catalog::standard();
        let knee: Vec<_> = catalog.milestones(SurgeryType::KneeReplacement).collect();
        assert!(knee.len() >= 10);
        assert!(knee.iter().all(|m| m.surgery_type == SurgeryType::KneeReplacement));
    }

    #[test]
    fn every_procedure_is_covered() {
        let catalog = Catalog::standard();
        let surgeries = [
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
        for surgery in surgeries {
            assert!(
                catalog.milestones(surgery).count() > 0,
                "no milestones for {surgery}"
            );
        }
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::standard();
        let mut seen = HashSet::new();
        for m in &catalog.rows {
            assert!(seen.insert(m.id.clone()), "duplicate id {}", m.id);
        }
    }

    #[test]
    fn row_fields_are_well_formed() {
        for m in &Catalog::standard().rows {
            assert!(m.weight > 0.0 && m.weight <= 1.0, "{}: weight {}", m.id, m.weight);
            assert!(m.tolerance_days > 0, "{}: zero tolerance", m.id);
            assert!(!m.description.is_empty(), "{}: empty description", m.id);
        }
    }

    #[test]
    fn prerequisites_resolve_within_the_same_surgery() {
        let catalog = Catalog::standard();
        for m in &catalog.rows {
            for prereq in &m.prerequisites {
                let target = catalog
                    .get(prereq)
                    .unwrap_or_else(|| panic!("{}: missing prerequisite {prereq}", m.id));
                assert_eq!(target.surgery_type, m.surgery_type, "{}: cross-surgery prerequisite", m.id);
            }
        }
    }

    #[test]
    fn category_filter_narrows_results() {
        let catalog = Catalog::standard();
        let all = catalog.milestones(SurgeryType::KneeReplacement).count();
        let mobility = catalog
            .milestones_in(SurgeryType::KneeReplacement, MilestoneCategory::Mobility)
            .count();
        assert!(mobility > 0);
        assert!(mobility < all);
        assert!(catalog
            .milestones_in(SurgeryType::KneeReplacement, MilestoneCategory::Mobility)
            .all(|m| m.category == MilestoneCategory::Mobility));
    }

    #[test]
    fn declaration_order_is_stable() {
        let catalog = Catalog::standard();
        let first: Vec<_> = catalog
            .milestones(SurgeryType::HipReplacement)
            .map(|m| m.id.clone())
            .collect();
        let second: Vec<_> = catalog
            .milestones(SurgeryType::HipReplacement)
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn reference_row_kr_mob_4() {
        let catalog = Catalog::standard();
        let m = catalog.get(&MilestoneId::new("kr-mob-4")).unwrap();
        assert_eq!(m.expected_day_post_op, 14);
        assert_eq!(m.tolerance_days, 5);
        assert_eq!(m.category, MilestoneCategory::Mobility);
    }
}
