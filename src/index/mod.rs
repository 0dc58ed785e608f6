//! Write path: scanning, building and persisting the inverted index.

pub mod build;
pub mod scan;
pub mod store;
pub mod types;

pub use build::{IndexBuilder, build_index};
pub use scan::FileScanner;
pub use store::IndexStore;
pub use types::*;
