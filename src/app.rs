use dioxus::prelude::*;
use thronecard_core::layout;

use crate::components::RunCard;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Composes the card tree for the configured record and renders it. A layout
/// failure degrades to an error panel; it never takes the window down.
#[component]
pub fn App() -> Element {
    let record = use_memo(crate::get_run_record);
    let card = use_memo(move || layout(&record()));

    let body = match card() {
        Ok(tree) => rsx! {
            RunCard { tree: tree }
        },
        Err(err) => {
            tracing::error!("card layout failed: {}", err);
            rsx! {
                div { class: "card-error-panel",
                    div { class: "card-error-panel__title", "Could not render run" }
                    div { class: "card-error-panel__detail", "{err}" }
                }
            }
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "card-stage", {body} }
    }
}
