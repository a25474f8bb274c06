//! Edge case and boundary condition tests
//!
//! These tests verify that card layout handles unusual records,
//! sentinel values, and bad identifiers correctly.

use thronecard_core::{layout, CardError, ResourceCategory, RunRecord, ULTRA_NONE};

// ============================================================================
// Empty Input Tests
// ============================================================================

/// Empty mutations list still renders the strip with its shared label
#[test]
fn test_empty_mutations_keep_shared_label() {
    let run = RunRecord {
        mutations: vec![],
        ..RunRecord::example()
    };

    let card = layout(&run).unwrap();
    assert!(card.mutations.slots.is_empty());
    assert_eq!(card.mutations.label, "Mutations");
}

/// Required identifier fields reject empty and whitespace-only values
#[test]
fn test_required_fields_fail_fast() {
    for value in ["", "   ", "\t", "\n"] {
        let run = RunRecord {
            crown: value.to_string(),
            ..RunRecord::example()
        };
        assert!(matches!(
            layout(&run),
            Err(CardError::InvalidRunRecord(_))
        ));
    }
}

/// Free-form fields may be empty without failing layout
#[test]
fn test_free_form_fields_may_be_empty() {
    let run = RunRecord {
        run_type: String::new(),
        level: String::new(),
        ..RunRecord::example()
    };

    let card = layout(&run).unwrap();
    assert_eq!(card.title.run_type, "");
    assert_eq!(card.title.level, "");
}

// ============================================================================
// Registry Boundary Tests
// ============================================================================

/// Unknown identifiers fail at the registry, one category at a time
#[test]
fn test_unknown_identifiers_fail_per_category() {
    let base = RunRecord::example();

    let cases: Vec<(RunRecord, ResourceCategory)> = vec![
        (
            RunRecord { character: "Doomguy".into(), ..base.clone() },
            ResourceCategory::Character,
        ),
        (
            RunRecord { crown: "Crown of Crowns".into(), ..base.clone() },
            ResourceCategory::Crown,
        ),
        (
            RunRecord { killed_by: "Creeper".into(), ..base.clone() },
            ResourceCategory::Enemy,
        ),
        (
            RunRecord { secondary_weapon: "BFG 9000".into(), ..base.clone() },
            ResourceCategory::Weapon,
        ),
        (
            RunRecord { mutations: vec!["Wall Jump".into()], ..base.clone() },
            ResourceCategory::Mutation,
        ),
        (
            RunRecord { ultra_mutation: "Ascension".into(), ..base },
            ResourceCategory::Mutation,
        ),
    ];

    for (run, expected_category) in cases {
        match layout(&run) {
            Err(CardError::UnknownEntity { category, .. }) => {
                assert_eq!(category, expected_category)
            }
            other => panic!("expected UnknownEntity, got {other:?}"),
        }
    }
}

/// An unknown ultra name is never composed into a file path
#[test]
fn test_unknown_ultra_never_reaches_a_path() {
    let run = RunRecord {
        ultra_mutation: "../../etc/passwd".to_string(),
        ..RunRecord::example()
    };
    assert!(matches!(
        layout(&run),
        Err(CardError::UnknownEntity { .. })
    ));
}

// ============================================================================
// Sentinel Tests
// ============================================================================

/// The "None" sentinel suppresses the ultra block; anything valid enables it
#[test]
fn test_ultra_sentinel_controls_block_presence() {
    let mut run = RunRecord::example();

    run.ultra_mutation = ULTRA_NONE.to_string();
    assert!(layout(&run).unwrap().ultra.is_none());

    run.ultra_mutation = "Throne Butt".to_string();
    let card = layout(&run).unwrap();
    let ultra = card.ultra.unwrap();
    assert_eq!(
        ultra.slot.image.path,
        "resources/mutations/ultra/Chicken_Throne Butt.png"
    );
    assert_eq!(ultra.slot.label, "Ultra Mutation");
}

/// Sentinel comparison is exact; "none" is an unknown mutation, not absence
#[test]
fn test_sentinel_is_case_sensitive() {
    let run = RunRecord {
        ultra_mutation: "none".to_string(),
        ..RunRecord::example()
    };
    assert!(matches!(
        layout(&run),
        Err(CardError::UnknownEntity { .. })
    ));
}

// ============================================================================
// Serialization Tests
// ============================================================================

/// A composed card tree survives a JSON roundtrip unchanged
#[test]
fn test_card_tree_json_roundtrip() {
    let card = layout(&RunRecord::example()).unwrap();
    let json = serde_json::to_string(&card).unwrap();
    let back: thronecard_core::CardTree = serde_json::from_str(&json).unwrap();
    assert_eq!(card, back);
}
