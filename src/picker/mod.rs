//! Generic picker infrastructure for list selection components.

mod traits;

pub use traits::Picker;
