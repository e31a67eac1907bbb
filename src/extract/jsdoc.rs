//! Doc-comment extraction — collects the JSDoc blocks attached to a
//! declaration and parses them into a typed bundle.
//!
//! A tag owns every line until the next tag, so `@example` bodies may
//! span multiple lines. The description is everything before the first
//! tag of the first block.

use crate::unit::SourceFile;
use std::collections::HashMap;
use tree_sitter::Node;

/// Parsed doc-comment bundle for one declaration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocComment {
    /// Free text before the first tag, possibly empty.
    pub description: String,
    /// `@param` tags, in tag order.
    pub params: Vec<ParamTag>,
    /// `@default name = value` entries, later tags overwriting earlier.
    pub defaults: HashMap<String, String>,
    /// Non-empty `@example` bodies, in tag order.
    pub examples: Vec<String>,
    /// Non-empty `@property` bodies, in tag order.
    pub properties: Vec<String>,
}

/// One `@param <name> - <text>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTag {
    pub name: String,
    /// Tag text with the leading `- ` marker stripped.
    pub description: String,
}

/// JSDoc blocks (`/** … */`) in the comment run directly above a
/// top-level statement, in source order.
pub fn leading_comments<'t>(file: &'t SourceFile, statement: Node<'t>) -> Vec<&'t str> {
    let mut comments = Vec::new();
    let mut prev = statement.prev_named_sibling();
    while let Some(node) = prev {
        if node.kind() != "comment" {
            break;
        }
        comments.push(file.print(node));
        prev = node.prev_named_sibling();
    }
    comments.reverse();
    comments.retain(|text| text.starts_with("/**"));
    comments
}

/// Parse the attached blocks into one bundle. The description comes from
/// the first block only; tags accumulate across all blocks.
pub fn extract(comments: &[&str]) -> DocComment {
    let mut doc = DocComment::default();
    for (index, comment) in comments.iter().enumerate() {
        let (description, tags) = parse_block(comment);
        if index == 0 {
            doc.description = description;
        }
        for tag in tags {
            apply_tag(&mut doc, &tag);
        }
    }
    doc
}

struct RawTag {
    name: String,
    body: String,
}

/// Split one `/** … */` block into description text and raw tags.
fn parse_block(text: &str) -> (String, Vec<RawTag>) {
    let body = text.strip_prefix("/**").unwrap_or(text);
    let body = body.strip_suffix("*/").unwrap_or(body);

    let mut description = String::new();
    let mut tags: Vec<RawTag> = Vec::new();
    let mut current: Option<RawTag> = None;

    for raw_line in body.lines() {
        let line = strip_gutter(raw_line);

        if let Some(rest) = line.strip_prefix('@') {
            if let Some(tag) = current.take() {
                tags.push(tag);
            }
            let (name, after) = split_tag(rest);
            current = Some(RawTag { name, body: after });
        } else if let Some(tag) = current.as_mut() {
            tag.body.push('\n');
            tag.body.push_str(line);
        } else {
            if !description.is_empty() {
                description.push('\n');
            }
            description.push_str(line);
        }
    }
    if let Some(tag) = current.take() {
        tags.push(tag);
    }

    for tag in &mut tags {
        tag.body = tag.body.trim().to_string();
    }
    (description.trim().to_string(), tags)
}

fn apply_tag(doc: &mut DocComment, tag: &RawTag) {
    match tag.name.as_str() {
        "param" => {
            let (name, description) = split_param(&tag.body);
            if !name.is_empty() {
                doc.params.push(ParamTag { name, description });
            }
        }
        "default" => {
            if let Some((name, value)) = tag.body.split_once('=') {
                doc.defaults
                    .insert(name.trim().to_string(), value.trim().to_string());
            }
        }
        "example" => {
            if !tag.body.is_empty() {
                doc.examples.push(tag.body.clone());
            }
        }
        "property" => {
            if !tag.body.is_empty() {
                doc.properties.push(tag.body.clone());
            }
        }
        _ => {}
    }
}

/// Remove the leading whitespace-and-asterisk gutter from one line.
fn strip_gutter(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => trimmed,
    }
}

/// Split "param one - text" into tag name and remainder.
fn split_tag(rest: &str) -> (String, String) {
    match rest.split_once(char::is_whitespace) {
        Some((name, after)) => (name.to_string(), after.trim_start().to_string()),
        None => (rest.to_string(), String::new()),
    }
}

/// Split a `@param` body into name and description, tolerating an
/// optional `{type}` prefix and stripping the `- ` marker.
fn split_param(body: &str) -> (String, String) {
    let body = body.trim_start();
    let body = match body.strip_prefix('{') {
        Some(rest) => match rest.split_once('}') {
            Some((_, after)) => after.trim_start(),
            None => body,
        },
        None => body,
    };
    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (body, ""),
    };
    let description = rest.strip_prefix("- ").unwrap_or(rest);
    (name.to_string(), description.to_string())
}
