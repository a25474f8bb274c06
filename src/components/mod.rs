//! UI components for the run card viewer.

mod lazy_image;
mod round_label;
mod run_card;

pub use lazy_image::LazyImage;
pub use round_label::RoundLabel;
pub use run_card::RunCard;
