//! # Catalog Loading and Validation
//!
//! Deserializes a catalog from JSON and validates its shape before any
//! scoring pass sees it. Shape errors fail loudly here with the offending
//! identifier; the scoring engines may then assume a well-formed tree.
//!
//! Validation rules:
//! - family, control, and objective ids must be non-empty;
//! - objective ids must be unique across the whole catalog (assessment
//!   state, evidence links, and notes are all keyed by objective id).
//!
//! An empty catalog is *valid* — the scoring engines guard the zero-total
//! case themselves and return a defined zero score.

use std::collections::HashSet;
use std::path::Path;

use cmmc_core::CmmcError;

use crate::model::Catalog;

impl Catalog {
    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CmmcError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        tracing::debug!(
            families = catalog.families.len(),
            controls = catalog.total_controls(),
            objectives = catalog.total_objectives(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CmmcError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate the structural invariants of the tree.
    pub fn validate(&self) -> Result<(), CmmcError> {
        let mut seen = HashSet::new();
        for family in &self.families {
            if family.id.as_str().is_empty() {
                return Err(CmmcError::Catalog("empty family id".to_string()));
            }
            for control in &family.controls {
                if control.id.as_str().is_empty() {
                    return Err(CmmcError::Catalog(format!(
                        "empty control id in family {}",
                        family.id
                    )));
                }
                for objective in &control.objectives {
                    if objective.id.as_str().is_empty() {
                        return Err(CmmcError::Catalog(format!(
                            "empty objective id in control {}",
                            control.id
                        )));
                    }
                    if !seen.insert(objective.id.clone()) {
                        return Err(CmmcError::Catalog(format!(
                            "duplicate objective id: {}",
                            objective.id
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "families": [
            {
                "id": "AC",
                "name": "Access Control",
                "controls": [
                    {
                        "id": "3.1.1",
                        "name": "Limit system access",
                        "objectives": [
                            {"id": "3.1.1[a]", "text": "authorized users are identified"},
                            {"id": "3.1.1[b]", "text": "processes acting on behalf of users are identified"}
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_valid_catalog() {
        let catalog = Catalog::from_json(VALID).unwrap();
        assert_eq!(catalog.total_objectives(), 2);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json(r#"{"families": []}"#).unwrap();
        assert_eq!(catalog.total_objectives(), 0);
    }

    #[test]
    fn test_duplicate_objective_id_rejected() {
        let json = VALID.replace("3.1.1[b]", "3.1.1[a]");
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate objective id"));
    }

    #[test]
    fn test_empty_objective_id_rejected() {
        let json = VALID.replace("3.1.1[a]", "");
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("empty objective id"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Catalog::from_json("{not json").is_err());
        assert!(Catalog::from_json(r#"{"families": 3}"#).is_err());
    }
}
