//! Target-file update — splices freshly rendered blocks into a
//! README's marker-delimited section and writes the formatted result
//! back.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::render_markdown;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Marker name used when no matcher is configured.
pub const DEFAULT_MARKER: &str = "INSERT GENERATED DOCS";

/// Outcome of an update run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The marker section was found and the file was rewritten.
    Updated,
    /// No marker section matched; the file was left untouched.
    NoMarker,
}

/// Matcher for a `<!-- name START -->` … `<!-- name END -->` section.
/// Three capture groups: opening marker with trailing whitespace, the
/// interior, and the closing marker.
pub fn create_matcher(name: &str) -> Regex {
    let escaped = regex::escape(name);
    let pattern = format!(
        r"(<!-- {escaped} START -->\s*)([\s\S]*)(\s*<!-- {escaped} END -->)"
    );
    // an escaped marker name cannot produce an invalid pattern
    Regex::new(&pattern).unwrap()
}

/// Replace the marker section's interior with `content`, keeping both
/// markers byte-identical. `None` when the matcher finds no section.
fn splice(text: &str, matcher: &Regex, content: &str) -> Option<String> {
    let captures = matcher.captures(text)?;
    let full = captures.get(0)?;
    let prefix = captures.get(1)?.as_str();
    let suffix = captures.get(3)?.as_str();

    let mut updated = String::with_capacity(text.len() + content.len());
    updated.push_str(&text[..full.start()]);
    updated.push_str(prefix);
    updated.push_str(content);
    updated.push('\n');
    updated.push_str(suffix);
    updated.push_str(&text[full.end()..]);
    Some(updated)
}

/// Collapse runs of blank lines to one (outside fenced code blocks) and
/// end the text with exactly one newline.
pub fn format_markdown(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_fence = false;
    let mut blank_run = 0usize;
    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        }
        if !in_fence && line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        kept.push(line);
    }
    while kept.last().is_some_and(|line| line.trim().is_empty()) {
        kept.pop();
    }
    let mut formatted = kept.join("\n");
    formatted.push('\n');
    formatted
}

/// Render every document, splice the blocks into `path`'s marker
/// section and write the formatted file back. A missing section is a
/// no-op reported through the status.
pub fn update_file(path: &Path, matcher: &Regex, documents: &[Document]) -> Result<UpdateStatus> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let blocks: Vec<String> = documents.iter().map(render_markdown).collect();
    let Some(updated) = splice(&text, matcher, &blocks.join("\n\n")) else {
        return Ok(UpdateStatus::NoMarker);
    };
    fs::write(path, format_markdown(&updated)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(UpdateStatus::Updated)
}
