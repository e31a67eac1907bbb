//! Markdown rendering — turns one [`Document`] into a README block.
//!
//! Sections are emitted in a fixed order and separated by single blank
//! lines. Exactly one of the property list, the member table, and the
//! param list is rendered, whichever comes first in that order.

use crate::model::{Document, Member, Param};

/// Render one document as a markdown block without a trailing newline.
pub fn render_markdown(document: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !document.filename.is_empty() {
        lines.push(format!("### {}", document.filename));
        lines.push(String::new());
    }

    lines.push(format!(
        "#### {} ({})",
        document.title,
        document.kind.label()
    ));
    lines.push(String::new());

    if !document.description.is_empty() {
        for line in document.description.lines() {
            lines.push(format!("> {}", line).trim_end().to_string());
        }
        lines.push(String::new());
    }

    if !document.properties.is_empty() {
        lines.push("**Properties:**".to_string());
        lines.push(String::new());
        for property in &document.properties {
            lines.push(format!("- {}", property));
        }
        lines.push(String::new());
    } else if !document.members.is_empty() {
        lines.push("**Members:**".to_string());
        lines.push(String::new());
        lines.push("| Name | Type | Required | Default | Description |".to_string());
        lines.push("| ---- | ---- | -------- | ------- | ----------- |".to_string());
        for member in &document.members {
            lines.push(member_row(member));
        }
        lines.push(String::new());
    } else if !document.params.is_empty() {
        lines.push("**Params:**".to_string());
        lines.push(String::new());
        for param in &document.params {
            lines.push(param_bullet(param));
        }
        lines.push(String::new());
    }

    if let Some(return_type) = &document.return_type {
        lines.push(format!("**Returns:** {}", return_type));
        lines.push(String::new());
    }

    if !document.examples.is_empty() {
        lines.push("**Examples:**".to_string());
        lines.push(String::new());
        for example in &document.examples {
            push_example(&mut lines, example);
            lines.push(String::new());
        }
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

/// One member table row. Pipes in the type text are escaped so they
/// survive the table syntax.
fn member_row(member: &Member) -> String {
    format!(
        "| {} | {} | {} | {} | {} |",
        member.name,
        member.type_text.replace('|', "\\|"),
        if member.required { "✅" } else { "❎" },
        member.default,
        member.description,
    )
}

/// `- name (`type`) - description`, dropping the parenthetical for an
/// empty type and the suffix for a missing description.
fn param_bullet(param: &Param) -> String {
    let mut line = format!("- {}", param.name);
    if !param.type_text.is_empty() {
        line.push_str(&format!(" (`{}`)", param.type_text));
    }
    if let Some(description) = &param.description {
        line.push_str(&format!(" - {}", description));
    }
    line
}

/// An example that already carries a fence is emitted verbatim, the
/// rest get wrapped.
fn push_example(lines: &mut Vec<String>, example: &str) {
    if example.contains("```") {
        lines.extend(example.lines().map(str::to_string));
    } else {
        lines.push("```tsx".to_string());
        lines.extend(example.lines().map(str::to_string));
        lines.push("```".to_string());
    }
}
