//! Resource catalog
//!
//! Static mapping from an image category to where its files live, what format
//! they are stored in, and how the card displays them. Defined once, never
//! extended at runtime; every accessor is a total pure function over the
//! closed enum.

use serde::{Deserialize, Serialize};

/// Category of card image resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    Character,
    Crown,
    Weapon,
    Enemy,
    Area,
    Mutation,
    UltraMutation,
}

impl ResourceCategory {
    /// All categories, in card reading order
    pub const ALL: &'static [ResourceCategory] = &[
        ResourceCategory::Character,
        ResourceCategory::Crown,
        ResourceCategory::Weapon,
        ResourceCategory::Enemy,
        ResourceCategory::Area,
        ResourceCategory::Mutation,
        ResourceCategory::UltraMutation,
    ];

    /// Directory holding this category's image files, relative to the
    /// resources root
    pub fn base_dir(&self) -> &'static str {
        match self {
            ResourceCategory::Character => "resources/characters",
            ResourceCategory::Crown => "resources/crowns",
            ResourceCategory::Weapon => "resources/weapons",
            ResourceCategory::Enemy => "resources/enemies",
            ResourceCategory::Area => "resources/areas",
            ResourceCategory::Mutation => "resources/mutations",
            ResourceCategory::UltraMutation => "resources/mutations/ultra",
        }
    }

    /// File extension for this category (no leading dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ResourceCategory::Enemy => "gif",
            ResourceCategory::Area => "webp",
            _ => "png",
        }
    }

    /// Label shown next to images of this category
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Character => "Character",
            ResourceCategory::Crown => "Crown",
            ResourceCategory::Weapon => "Weapon",
            ResourceCategory::Enemy => "Killed By",
            ResourceCategory::Area => "Area",
            ResourceCategory::Mutation => "Mutations",
            ResourceCategory::UltraMutation => "Ultra Mutation",
        }
    }

    /// Default display size in px (square slots)
    pub fn display_size(&self) -> u32 {
        match self {
            ResourceCategory::Character => 150,
            ResourceCategory::Crown => 50,
            ResourceCategory::Weapon => 100,
            ResourceCategory::Enemy => 50,
            ResourceCategory::Area => 120,
            ResourceCategory::Mutation => 40,
            ResourceCategory::UltraMutation => 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_total_over_all_categories() {
        // Every accessor must answer for every variant.
        for category in ResourceCategory::ALL {
            assert!(!category.base_dir().is_empty());
            assert!(!category.extension().is_empty());
            assert!(!category.label().is_empty());
            assert!(category.display_size() > 0);
        }
    }

    #[test]
    fn test_ultra_mutations_nest_under_mutations() {
        assert_eq!(
            ResourceCategory::UltraMutation.base_dir(),
            "resources/mutations/ultra"
        );
        assert!(ResourceCategory::UltraMutation
            .base_dir()
            .starts_with(ResourceCategory::Mutation.base_dir()));
    }

    #[test]
    fn test_extensions_have_no_dot() {
        for category in ResourceCategory::ALL {
            assert!(!category.extension().contains('.'));
        }
    }
}
