//! Utility functions shared by the index and query layers.
//!
//! - [`app_data`] - Configuration and app data directory (XDG-compliant)
//! - [`progress`] - Progress bars, no-op without the `progress` feature
//! - [`text`] - Lossy-tolerant file decoding and line splitting
//! - [`tokenizer`] - Word extraction and query normalization
//!
//! ```no_run
//! use lindex::utils::tokenize;
//!
//! let words = tokenize("func('param1', param2)");
//! // Contains: "func", "param1", "param2"
//! ```

pub mod app_data;
pub mod progress;
pub mod text;
pub mod tokenizer;

pub use app_data::*;
pub use text::*;
pub use tokenizer::*;
