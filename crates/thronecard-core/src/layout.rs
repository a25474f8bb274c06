//! Card layout engine
//!
//! Composes one [`RunRecord`] into a [`CardTree`]: title block, primary row,
//! weapons row, optional ultra block, mutation strip, always in that order.
//! A single synchronous pass with no retained state. Every identifier is
//! resolved through the registry first, so a bad name fails here instead of
//! turning into a dangling file path.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::ResourceCategory;
use crate::error::{CardError, CardResult};
use crate::record::RunRecord;
use crate::registry::{Character, Crown, Enemy, Mutation, Weapon};
use crate::resolver::{resolve, ImageReference};

/// One image leaf: a resolved reference plus how to present it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSlot {
    pub image: ImageReference,
    /// Label rendered under the image
    pub label: String,
    /// Square display size in px
    pub size: u32,
}

impl ImageSlot {
    fn new(image: ImageReference, label: impl Into<String>) -> Self {
        let size = image.category.display_size();
        Self {
            image,
            label: label.into(),
            size,
        }
    }
}

/// Text-only header: run type, date, area, level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBlock {
    pub run_type: String,
    /// `YYYY-MM-DD`, derived from the record timestamp
    pub date: String,
    pub area: String,
    pub level: String,
}

/// Character portrait plus the accessory column (crown, enemy)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryRow {
    pub character: ImageSlot,
    pub crown: ImageSlot,
    pub killed_by: ImageSlot,
}

/// Fixed two-slot weapons row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponsRow {
    pub primary: ImageSlot,
    pub secondary: ImageSlot,
}

impl WeaponsRow {
    /// Both slots in display order
    pub fn slots(&self) -> [&ImageSlot; 2] {
        [&self.primary, &self.secondary]
    }
}

/// Conditional ultra mutation block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UltraBlock {
    pub slot: ImageSlot,
}

/// Mutation images in pickup order, under one shared label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationStrip {
    pub slots: Vec<ImageSlot>,
    /// Single label for the whole strip, not one per image
    pub label: String,
}

/// The full resolved card, in render order.
///
/// Carries no behavior; a renderer external to this crate walks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTree {
    pub title: TitleBlock,
    pub primary: PrimaryRow,
    pub weapons: WeaponsRow,
    /// Present iff the record's ultra mutation is not the "None" sentinel
    pub ultra: Option<UltraBlock>,
    pub mutations: MutationStrip,
}

/// Composite file stem for an ultra mutation image.
///
/// Ultra art is drawn per character, so the file is keyed by both names:
/// `("Chicken", "Fire")` resolves under `Chicken_Fire`.
pub fn ultra_resource_name(character: &str, ultra: &str) -> String {
    format!("{character}_{ultra}")
}

/// Format an epoch-millisecond timestamp as the `YYYY-MM-DD` date component
/// of its UTC instant.
fn format_run_date(timestamp_ms: i64) -> CardResult<String> {
    let instant = DateTime::from_timestamp_millis(timestamp_ms).ok_or_else(|| {
        CardError::InvalidRunRecord(format!("timestamp {timestamp_ms} is out of range"))
    })?;
    Ok(instant.format("%Y-%m-%d").to_string())
}

/// Compose the card tree for one run.
///
/// Deterministic: the same record always produces the same tree. Fails on an
/// invalid record or an identifier outside the registry; it never checks
/// whether the resolved files exist.
pub fn layout(run: &RunRecord) -> CardResult<CardTree> {
    run.validate()?;

    let character = Character::from_name(&run.character)?;
    let crown = Crown::from_name(&run.crown)?;
    let killed_by = Enemy::from_name(&run.killed_by)?;
    let primary_weapon = Weapon::from_name(&run.primary_weapon)?;
    let secondary_weapon = Weapon::from_name(&run.secondary_weapon)?;

    let title = TitleBlock {
        run_type: run.run_type.clone(),
        date: format_run_date(run.timestamp)?,
        area: run.area.clone(),
        level: run.level.clone(),
    };

    let primary = PrimaryRow {
        // The portrait is labeled with the character's own name
        character: ImageSlot::new(
            resolve(ResourceCategory::Character, character.display_name()),
            character.display_name(),
        ),
        crown: ImageSlot::new(
            resolve(ResourceCategory::Crown, crown.display_name()),
            ResourceCategory::Crown.label(),
        ),
        killed_by: ImageSlot::new(
            resolve(ResourceCategory::Enemy, killed_by.display_name()),
            ResourceCategory::Enemy.label(),
        ),
    };

    let weapons = WeaponsRow {
        primary: ImageSlot::new(
            resolve(ResourceCategory::Weapon, primary_weapon.display_name()),
            "Weapon A",
        ),
        secondary: ImageSlot::new(
            resolve(ResourceCategory::Weapon, secondary_weapon.display_name()),
            "Weapon B",
        ),
    };

    let ultra = if run.has_ultra() {
        let ultra = Mutation::from_name(&run.ultra_mutation)?;
        let stem = ultra_resource_name(character.display_name(), ultra.display_name());
        Some(UltraBlock {
            slot: ImageSlot::new(
                resolve(ResourceCategory::UltraMutation, &stem),
                ResourceCategory::UltraMutation.label(),
            ),
        })
    } else {
        None
    };

    let mut mutation_slots = Vec::with_capacity(run.mutations.len());
    for name in &run.mutations {
        let mutation = Mutation::from_name(name)?;
        mutation_slots.push(ImageSlot::new(
            resolve(ResourceCategory::Mutation, mutation.display_name()),
            mutation.display_name(),
        ));
    }
    let mutations = MutationStrip {
        slots: mutation_slots,
        label: ResourceCategory::Mutation.label().to_string(),
    };

    tracing::debug!(
        character = %character,
        mutations = mutations.slots.len(),
        ultra = ultra.is_some(),
        "composed card tree"
    );

    Ok(CardTree {
        title,
        primary,
        weapons,
        ultra,
        mutations,
    })
}
