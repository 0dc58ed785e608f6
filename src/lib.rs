//! # lindex - line-level word index for text trees
//!
//! lindex walks a directory of text files, records for every word the files
//! and line numbers it appears on, stores that as a single JSON snapshot and
//! answers single-word lookups with context snippets.
//!
//! ## Architecture
//!
//! - [`index`] - Scanning, building and persisting the inverted index
//! - [`query`] - Term lookup and snippet extraction
//! - [`output`] - Terminal rendering of results
//! - [`utils`] - Tokenizer, text decoding, configuration, progress bars
//! - [`error`] - Library error type
//!
//! ## Quick Start
//!
//! ```no_run
//! use lindex::index::{IndexStore, build_index};
//! use lindex::query::{extract_snippets, search};
//! use std::path::Path;
//!
//! let report = build_index(Path::new("/path/to/tree")).unwrap();
//! let store = IndexStore::default();
//! store.save(&report.index).unwrap();
//!
//! let index = store.load().unwrap().expect("index was just saved");
//! let result = search(&index, "main");
//! for (file, lines) in result.iter() {
//!     let blocks = extract_snippets(&index.resolve(file), lines, 2).unwrap();
//!     println!("{}: {} blocks", file, blocks.len());
//! }
//! ```

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{LindexError, Result};
