//! Data Layer
//!
//! CSV assets to records: parse, normalize, load.

mod csv;
mod fetch;
mod normalize;

pub use fetch::{load_career, load_skills};
