use crate::error::Result;
use crate::index::types::LineNumber;
use crate::utils::{read_text, split_lines};
use std::collections::HashSet;
use std::path::Path;

/// One displayed line of a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLine {
    pub number: LineNumber,
    pub text: String,
    /// True for the requested line itself, false for context
    pub is_match: bool,
}

/// Context window around one requested line.
///
/// Lines already shown by an earlier block of the same extraction are left
/// out, so a block may hold fewer lines than its window, or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetBlock {
    pub line: LineNumber,
    pub lines: Vec<SnippetLine>,
}

impl SnippetBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Read `path` and cut a window of `context` lines around each entry of
/// `line_numbers`.
pub fn extract_snippets(
    path: &Path,
    line_numbers: &[LineNumber],
    context: usize,
) -> Result<Vec<SnippetBlock>> {
    let text = read_text(path)?;
    let lines: Vec<&str> = split_lines(&text).collect();
    Ok(snippets_from_lines(&lines, line_numbers, context))
}

/// Windowing over already-split lines. Windows are not merged: every
/// requested line gets its own block, only individual lines are deduplicated.
pub fn snippets_from_lines(
    lines: &[&str],
    line_numbers: &[LineNumber],
    context: usize,
) -> Vec<SnippetBlock> {
    let mut emitted: HashSet<usize> = HashSet::new();
    let mut blocks = Vec::with_capacity(line_numbers.len());

    for &requested in line_numbers {
        let center = requested as usize;
        let start = center.saturating_sub(context).max(1);
        let end = center.saturating_add(context).min(lines.len());

        let mut block = SnippetBlock {
            line: requested,
            lines: Vec::new(),
        };
        for number in start..=end {
            if !emitted.insert(number) {
                continue;
            }
            block.lines.push(SnippetLine {
                number: number as LineNumber,
                text: lines[number - 1].trim_end().to_string(),
                is_match: number == center,
            });
        }
        blocks.push(block);
    }

    blocks
}
