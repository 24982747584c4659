// SPDX-License-Identifier: PMPL-1.0-or-later
//! Snippet to line-number lookup.

/// A document together with its line split, shared by every rule
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub text: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: split_lines(text),
        }
    }

    /// Line of the first occurrence of `snippet`, see [`line_of`]
    pub fn line_of(&self, snippet: &str) -> usize {
        line_of(&self.lines, snippet)
    }
}

/// Split on `\n` only. A trailing `\r` stays on the line and an empty
/// document still has one (empty) line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// 1-based index of the first line containing `snippet`, or 0.
///
/// Snippets spanning several lines never match; when the snippet occurs on
/// several lines the first one wins.
pub fn line_of(lines: &[&str], snippet: &str) -> usize {
    lines
        .iter()
        .position(|line| line.contains(snippet))
        .map_or(0, |idx| idx + 1)
}
