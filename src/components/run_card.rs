//! Run Card Component
//!
//! Renders a composed [`CardTree`] section by section: title, primary row,
//! weapons, ultra mutation, mutation strip. The tree arrives fully resolved;
//! this component only walks it.

use dioxus::prelude::*;
use thronecard_core::{CardTree, ImageSlot};

use super::{LazyImage, RoundLabel};

/// Full run summary card
#[component]
pub fn RunCard(
    /// Resolved card tree from the layout engine
    tree: CardTree,
) -> Element {
    rsx! {
        article { class: "run-card",
            // Title block
            header { class: "run-card__title",
                h1 { class: "run-card__type", "{tree.title.run_type}" }
                div { class: "run-card__date", "{tree.title.date}" }
                div { class: "run-card__place",
                    "{tree.title.area} · {tree.title.level}"
                }
            }

            // Primary row: portrait + accessory column
            div { class: "run-card__primary",
                div { class: "run-card__portrait",
                    LazyImage {
                        path: tree.primary.character.image.path.clone(),
                        alt: tree.primary.character.label.clone(),
                        size: tree.primary.character.size,
                    }
                    div { class: "run-card__character-name",
                        "{tree.primary.character.label}"
                    }
                }
                div { class: "run-card__accessories",
                    SlotView { slot: tree.primary.crown.clone() }
                    SlotView { slot: tree.primary.killed_by.clone() }
                }
            }

            // Weapons row, always two slots
            div { class: "run-card__weapons",
                SlotView { slot: tree.weapons.primary.clone() }
                SlotView { slot: tree.weapons.secondary.clone() }
            }

            // Ultra block only exists for runs that reached one
            if let Some(ultra) = &tree.ultra {
                div { class: "run-card__ultra",
                    SlotView { slot: ultra.slot.clone() }
                }
            }

            // Mutation strip: images in pickup order, one shared label
            div { class: "run-card__mutations",
                div { class: "run-card__mutation-strip",
                    for slot in tree.mutations.slots.iter() {
                        LazyImage {
                            key: "{slot.image.path}",
                            path: slot.image.path.clone(),
                            alt: slot.label.clone(),
                            size: slot.size,
                        }
                    }
                }
                RoundLabel { text: tree.mutations.label.clone() }
            }
        }
    }
}

/// One labeled image slot
#[component]
fn SlotView(slot: ImageSlot) -> Element {
    rsx! {
        div { class: "card-slot",
            LazyImage {
                path: slot.image.path.clone(),
                alt: slot.label.clone(),
                size: slot.size,
            }
            RoundLabel { text: slot.label.clone() }
        }
    }
}
