//! Lazy Image Loader
//!
//! Loads card images from the resources directory and displays them with
//! loading and missing-file states. The core only hands out paths; all file
//! I/O happens here, off the layout path.

use base64::Engine;
use dioxus::prelude::*;

/// Asynchronously load and display an image slot.
///
/// A file that is absent or undecodable renders as a placeholder square of
/// the same size, so a card with missing art still comes up complete.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     LazyImage {
///         path: "resources/weapons/Assault Rifle.png".to_string(),
///         alt: "Assault Rifle".to_string(),
///         size: 100,
///     }
/// }
/// ```
#[component]
pub fn LazyImage(
    /// Image path relative to the resources root
    path: String,
    /// Alt text for accessibility
    alt: String,
    /// Square display size in px
    size: u32,
) -> Element {
    let mut image_data = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut missing = use_signal(|| false);

    // Load on mount or when the path changes
    use_effect(move || {
        let path = path.clone();
        spawn(async move {
            loading.set(true);
            missing.set(false);

            let full_path = crate::get_resources_dir().join(&path);
            match tokio::fs::read(&full_path).await {
                Ok(bytes) => {
                    let mime = image::guess_format(&bytes)
                        .map(|format| format.to_mime_type())
                        .unwrap_or("application/octet-stream");
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    image_data.set(Some(format!("data:{mime};base64,{encoded}")));
                    loading.set(false);
                }
                Err(e) => {
                    // Missing art is expected; the slot degrades to a placeholder
                    tracing::debug!("no image at {:?}: {}", full_path, e);
                    missing.set(true);
                    loading.set(false);
                }
            }
        });
    });

    let dimension = format!("width: {size}px; height: {size}px;");

    rsx! {
        if loading() {
            div {
                class: "card-image card-image--loading",
                style: "{dimension}",
            }
        } else if missing() {
            div {
                class: "card-image card-image--missing",
                style: "{dimension}",
                title: "{alt}",
                "?"
            }
        } else if let Some(uri) = image_data() {
            img {
                class: "card-image",
                style: "{dimension}",
                src: "{uri}",
                alt: "{alt}",
            }
        }
    }
}
