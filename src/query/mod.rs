//! Read path: term lookup and snippet extraction over a loaded index.

pub mod search;
pub mod snippet;

pub use search::{SearchResult, search};
pub use snippet::{SnippetBlock, SnippetLine, extract_snippets, snippets_from_lines};
