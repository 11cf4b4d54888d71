//! # Catalog Tree Model
//!
//! The Family → Control → Objective tree. Ordering within each level is
//! display order from the source dataset and is preserved through
//! serialization; scoring output (family breakdowns, family gaps) follows
//! catalog order so reports are stable across runs.

use cmmc_core::{ControlId, FamilyId, ObjectiveId};
use serde::{Deserialize, Serialize};

/// A single assessment objective, the smallest assessable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// Framework-defined objective identifier.
    pub id: ObjectiveId,
    /// The testable statement.
    pub text: String,
    /// Weight in the point-deduction model. Defaults to 1.
    #[serde(default = "default_point_value")]
    pub point_value: u32,
}

/// A named control composed of one or more objectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Framework-defined control identifier.
    pub id: ControlId,
    /// Display name.
    pub name: String,
    /// Requirement description.
    #[serde(default)]
    pub description: String,
    /// Ordered objectives under this control.
    pub objectives: Vec<Objective>,
    /// Point value deducted in full when any objective under this control
    /// is not met. `None` means the default weight of 1.
    #[serde(default)]
    pub point_value: Option<u32>,
    /// Whether an unmet instance of this control may be covered by a
    /// POA&M. Critical controls set this to `false`.
    #[serde(default = "default_poam_eligible")]
    pub poam_eligible: bool,
}

impl Control {
    /// The weight this control carries in the SPRS deduction model.
    pub fn sprs_weight(&self) -> u32 {
        self.point_value.unwrap_or(1)
    }
}

/// A top-level grouping of related controls (e.g. Access Control).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Two-letter family code.
    pub id: FamilyId,
    /// Display name.
    pub name: String,
    /// Ordered controls in this family.
    pub controls: Vec<Control>,
}

impl Family {
    /// Total objective count across all controls in this family.
    pub fn objective_count(&self) -> usize {
        self.controls.iter().map(|c| c.objectives.len()).sum()
    }
}

/// The full catalog tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Ordered families.
    pub families: Vec<Family>,
}

/// One objective with its ancestry, produced by [`Catalog::iter_objectives`].
#[derive(Debug, Clone, Copy)]
pub struct FlatObjective<'a> {
    /// Owning family.
    pub family: &'a Family,
    /// Owning control.
    pub control: &'a Control,
    /// The objective itself.
    pub objective: &'a Objective,
}

impl Catalog {
    /// Flatten the tree into `(family, control, objective)` tuples in
    /// catalog order. Both scoring models consume this iteration.
    pub fn iter_objectives(&self) -> impl Iterator<Item = FlatObjective<'_>> {
        self.families.iter().flat_map(|family| {
            family.controls.iter().flat_map(move |control| {
                control.objectives.iter().map(move |objective| FlatObjective {
                    family,
                    control,
                    objective,
                })
            })
        })
    }

    /// Total objective count across the whole catalog.
    pub fn total_objectives(&self) -> usize {
        self.families.iter().map(Family::objective_count).sum()
    }

    /// Total control count across the whole catalog.
    pub fn total_controls(&self) -> usize {
        self.families.iter().map(|f| f.controls.len()).sum()
    }

    /// Look up a family by id.
    pub fn family(&self, id: &FamilyId) -> Option<&Family> {
        self.families.iter().find(|f| &f.id == id)
    }
}

fn default_point_value() -> u32 {
    1
}

fn default_poam_eligible() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objective(id: &str) -> Objective {
        Objective {
            id: ObjectiveId(id.to_string()),
            text: format!("objective {id}"),
            point_value: 1,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            families: vec![
                Family {
                    id: FamilyId("AC".to_string()),
                    name: "Access Control".to_string(),
                    controls: vec![Control {
                        id: ControlId("3.1.1".to_string()),
                        name: "Limit system access".to_string(),
                        description: String::new(),
                        objectives: vec![objective("3.1.1[a]"), objective("3.1.1[b]")],
                        point_value: Some(5),
                        poam_eligible: true,
                    }],
                },
                Family {
                    id: FamilyId("AU".to_string()),
                    name: "Audit and Accountability".to_string(),
                    controls: vec![Control {
                        id: ControlId("3.3.1".to_string()),
                        name: "System auditing".to_string(),
                        description: String::new(),
                        objectives: vec![objective("3.3.1[a]")],
                        point_value: None,
                        poam_eligible: false,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_iter_objectives_preserves_catalog_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog
            .iter_objectives()
            .map(|f| f.objective.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3.1.1[a]", "3.1.1[b]", "3.3.1[a]"]);
    }

    #[test]
    fn test_flat_objective_carries_ancestry() {
        let catalog = sample_catalog();
        let last = catalog.iter_objectives().last().unwrap();
        assert_eq!(last.family.id.as_str(), "AU");
        assert_eq!(last.control.id.as_str(), "3.3.1");
    }

    #[test]
    fn test_counts() {
        let catalog = sample_catalog();
        assert_eq!(catalog.total_objectives(), 3);
        assert_eq!(catalog.total_controls(), 2);
        assert_eq!(catalog.families[0].objective_count(), 2);
    }

    #[test]
    fn test_sprs_weight_defaults_to_one() {
        let catalog = sample_catalog();
        assert_eq!(catalog.families[0].controls[0].sprs_weight(), 5);
        assert_eq!(catalog.families[1].controls[0].sprs_weight(), 1);
    }

    #[test]
    fn test_family_lookup() {
        let catalog = sample_catalog();
        assert!(catalog.family(&FamilyId("AC".to_string())).is_some());
        assert!(catalog.family(&FamilyId("SC".to_string())).is_none());
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{
            "id": "3.1.2",
            "name": "Transaction control",
            "objectives": [{"id": "3.1.2[a]", "text": "limit transactions"}]
        }"#;
        let control: Control = serde_json::from_str(json).unwrap();
        assert_eq!(control.point_value, None);
        assert!(control.poam_eligible);
        assert_eq!(control.objectives[0].point_value, 1);
        assert_eq!(control.description, "");
    }
}
