//! Image resolver
//!
//! Turns (category, name) into the relative file path a renderer loads the
//! image from. Pure string composition: no existence check, no I/O.
//! Whether the file is actually there is the renderer's problem; a missing
//! file degrades to a placeholder slot, never a failed card.

use serde::{Deserialize, Serialize};

use crate::catalog::ResourceCategory;

/// A resolved image location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageReference {
    /// Category the name was resolved under
    pub category: ResourceCategory,
    /// File stem (canonical entity name or composite ultra key)
    pub name: String,
    /// `{base_dir}/{name}.{extension}`, relative to the resources root
    pub path: String,
}

/// Resolve a name under a category.
///
/// Idempotent: identical inputs always produce an identical reference.
pub fn resolve(category: ResourceCategory, name: &str) -> ImageReference {
    ImageReference {
        category,
        name: name.to_string(),
        path: format!("{}/{}.{}", category.base_dir(), name, category.extension()),
    }
}
