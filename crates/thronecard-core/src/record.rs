//! Run record
//!
//! Plain data holder describing one finished run. Created once per rendered
//! card, never mutated, owned by whoever asked for the render. Identifier
//! fields hold canonical display names; the layout engine resolves them
//! against the registry.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Sentinel marking the absence of an ultra mutation.
///
/// An explicit value rather than an `Option` so that a record deserialized
/// from user data states its intent; the layout engine checks it to decide
/// whether the ultra block exists at all.
pub const ULTRA_NONE: &str = "None";

/// One finished run, as shown on a summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Run type label shown in the title ("Normal", "Daily", "Hardmode")
    pub run_type: String,
    /// Character played
    pub character: String,
    /// Crown carried ("Bare Head" when none was picked up)
    pub crown: String,
    /// Weapon in the primary slot
    pub primary_weapon: String,
    /// Weapon in the secondary slot
    pub secondary_weapon: String,
    /// Enemy that ended the run
    pub killed_by: String,
    /// Mutations in pickup order; may be empty
    #[serde(default)]
    pub mutations: Vec<String>,
    /// Ultra mutation, or [`ULTRA_NONE`]
    #[serde(default = "default_ultra")]
    pub ultra_mutation: String,
    /// Area the run ended in
    pub area: String,
    /// Free-form level label ("7-3")
    pub level: String,
    /// End-of-run timestamp, epoch milliseconds
    pub timestamp: i64,
}

fn default_ultra() -> String {
    ULTRA_NONE.to_string()
}

impl RunRecord {
    /// Check the construction contract.
    ///
    /// Required identifier fields must be non-empty; a partially empty record
    /// would otherwise surface as broken lookups deep inside layout. Registry
    /// membership is not checked here, that stays at the lookup boundary.
    pub fn validate(&self) -> CardResult<()> {
        for (field, value) in [
            ("character", &self.character),
            ("crown", &self.crown),
            ("area", &self.area),
        ] {
            if value.trim().is_empty() {
                return Err(CardError::InvalidRunRecord(format!(
                    "{field} must not be empty"
                )));
            }
        }
        if self.ultra_mutation.trim().is_empty() {
            return Err(CardError::InvalidRunRecord(format!(
                "ultra_mutation must be a mutation name or the \"{ULTRA_NONE}\" sentinel"
            )));
        }
        Ok(())
    }

    /// Whether this run ended holding an ultra mutation
    pub fn has_ultra(&self) -> bool {
        self.ultra_mutation != ULTRA_NONE
    }

    /// Fixed demo record used when no record file is supplied
    pub fn example() -> Self {
        Self {
            run_type: "Normal".to_string(),
            character: "Chicken".to_string(),
            crown: "Crown of Haste".to_string(),
            primary_weapon: "Assault Rifle".to_string(),
            secondary_weapon: "Golden Wrench".to_string(),
            killed_by: "Big Bandit".to_string(),
            mutations: vec![
                "Rhino Skin".to_string(),
                "Trigger Fingers".to_string(),
                "Extra Feet".to_string(),
            ],
            ultra_mutation: "Gamma Guts".to_string(),
            area: "Frozen City".to_string(),
            level: "5-1".to_string(),
            timestamp: 1671496539273,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_record_is_valid() {
        RunRecord::example().validate().unwrap();
    }

    #[test]
    fn test_empty_character_fails_fast() {
        let run = RunRecord {
            character: String::new(),
            ..RunRecord::example()
        };
        let err = run.validate().unwrap_err();
        assert!(matches!(err, CardError::InvalidRunRecord(msg) if msg.contains("character")));
    }

    #[test]
    fn test_whitespace_area_fails_fast() {
        let run = RunRecord {
            area: "   ".to_string(),
            ..RunRecord::example()
        };
        assert!(run.validate().is_err());
    }

    #[test]
    fn test_ultra_sentinel() {
        let mut run = RunRecord::example();
        assert!(run.has_ultra());
        run.ultra_mutation = ULTRA_NONE.to_string();
        assert!(!run.has_ultra());
        run.validate().unwrap();
    }

    #[test]
    fn test_deserialize_defaults() {
        // mutations and ultra_mutation may be omitted from record files
        let run: RunRecord = serde_json::from_str(
            r#"{
                "run_type": "Daily",
                "character": "Fish",
                "crown": "Bare Head",
                "primary_weapon": "Revolver",
                "secondary_weapon": "Shotgun",
                "killed_by": "Bandit",
                "area": "Desert",
                "level": "1-2",
                "timestamp": 0
            }"#,
        )
        .unwrap();
        assert!(run.mutations.is_empty());
        assert_eq!(run.ultra_mutation, ULTRA_NONE);
        run.validate().unwrap();
    }
}
