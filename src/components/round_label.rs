//! Round Label Component
//!
//! Small rounded pill shown under card images.

use dioxus::prelude::*;

/// Rounded pill label
///
/// # Examples
///
/// ```rust
/// rsx! {
///     RoundLabel { text: "Crown".to_string() }
/// }
/// ```
#[component]
pub fn RoundLabel(
    /// Label text
    text: String,
) -> Element {
    rsx! {
        span { class: "round-label",
            "{text}"
        }
    }
}
