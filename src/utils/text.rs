use crate::error::{LindexError, Result};
use std::fs;
use std::path::Path;

/// Read a file as text, dropping any bytes that are not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| LindexError::file_read(path, e))?;
    Ok(decode_text(&bytes))
}

/// Decode UTF-8, skipping invalid sequences instead of substituting them.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
    }
}

/// Iterate over the lines of `text`, treating `\n`, `\r\n` and a lone `\r`
/// as line terminators. A trailing terminator does not produce an empty line.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &self.rest[..end];
                let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
