//! Visual theme for the run card viewer.

mod colors;
mod styles;

#[allow(unused_imports)]
pub use colors::*;
pub use styles::GLOBAL_STYLES;
