//! Terminal rendering for search results and snippets

use crate::index::types::IndexStats;
use crate::query::{SearchResult, SnippetBlock};
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

/// Print the file heading followed by every snippet block
pub fn print_file_snippets<W: WriteColor>(
    out: &mut W,
    file_key: &str,
    blocks: &[SnippetBlock],
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", file_key)?;
    out.reset()?;

    for block in blocks {
        out.set_color(ColorSpec::new().set_dimmed(true))?;
        writeln!(out, "--- Line {} ---", block.line)?;
        out.reset()?;

        for line in &block.lines {
            if line.is_match {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                writeln!(out, "{:4}: {}", line.number, line.text)?;
                out.reset()?;
            } else {
                writeln!(out, "{:4}: {}", line.number, line.text)?;
            }
        }
    }
    writeln!(out)?;

    Ok(())
}

/// Print matching file keys with their hit counts (for --files-only)
pub fn print_files_only<W: WriteColor>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    for (file, lines) in result.iter() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", file)?;
        out.reset()?;
        write!(out, ":")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", lines.len())?;
        out.reset()?;
    }
    Ok(())
}

pub fn print_stats<W: Write>(
    out: &mut W,
    root: &Path,
    index_path: &Path,
    stats: &IndexStats,
) -> io::Result<()> {
    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Root path:        {}", root.display())?;
    writeln!(out, "Index location:   {}", index_path.display())?;
    writeln!(out, "Files:            {}", stats.files)?;
    writeln!(out, "Distinct words:   {}", stats.words)?;
    writeln!(out, "Line postings:    {}", stats.postings)?;
    if let Ok(meta) = std::fs::metadata(index_path) {
        writeln!(out, "Index size:       {}", format_size(meta.len()))?;
    }
    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
