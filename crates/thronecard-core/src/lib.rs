//! Run Summary Card Core Library
//!
//! Resource resolution and card layout model for Nuclear Throne style run
//! summary cards.
//!
//! ## Overview
//!
//! The core turns one [`RunRecord`] (character, crown, weapons, mutations,
//! area, timestamp) into a [`CardTree`]: an ordered, fully resolved visual
//! tree whose leaves pair an image path with a label and display size. The
//! tree carries no behavior; a renderer external to this crate walks it and
//! loads the images it references.
//!
//! ## Core principles
//!
//! - **Pure**: layout and resolution are single-pass string/struct
//!   transforms. No I/O, no caching, no shared state.
//! - **Closed sets**: every entity a record references is checked against a
//!   fixed registry before any file path is composed.
//! - **Degrade, never crash**: a missing image file is the renderer's
//!   problem; the core only fails on invalid records and unknown entities.
//!
//! ## Quick start
//!
//! ```
//! use thronecard_core::{layout, RunRecord};
//!
//! let run = RunRecord::example();
//! let card = layout(&run)?;
//!
//! assert_eq!(card.weapons.slots().len(), 2);
//! println!("{} on {}", card.title.run_type, card.title.date);
//! # Ok::<(), thronecard_core::CardError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod layout;
pub mod record;
pub mod registry;
pub mod resolver;

// Re-exports
pub use catalog::ResourceCategory;
pub use error::{CardError, CardResult};
pub use layout::{
    layout, ultra_resource_name, CardTree, ImageSlot, MutationStrip, PrimaryRow, TitleBlock,
    UltraBlock, WeaponsRow,
};
pub use record::{RunRecord, ULTRA_NONE};
pub use registry::{Character, Crown, Enemy, Mutation, Weapon};
pub use resolver::{resolve, ImageReference};
