//! Document assembly — fuses one selected declaration with its parsed
//! doc comments into a renderable [`Document`].
//!
//! Doc-tag params come first in tag order; undocumented signature
//! params are appended in signature order. Member defaults and
//! descriptions are joined in by name.

use crate::extract::jsdoc::DocComment;
use crate::extract::select::Selected;
use crate::model::{DeclKind, Document, Member, Param};
use crate::unit::SourceFile;
use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

/// Strips a block-comment prefix that can leak into a printed member
/// name.
static RE_COMMENT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*.*\*/\s+(\S+)").unwrap());

/// Build the document for one declaration. `first_in_file` controls
/// whether the file path is recorded on this record.
pub fn assemble(
    file: &SourceFile,
    selected: &Selected<'_>,
    doc: &DocComment,
    first_in_file: bool,
) -> Document {
    let params = build_params(file, selected, doc);
    let members = build_members(file, selected, doc, &params);
    Document {
        filename: if first_in_file {
            file.display_path()
        } else {
            String::new()
        },
        title: selected
            .name
            .map(|name| file.print(name).to_string())
            .unwrap_or_default(),
        description: doc.description.clone(),
        examples: doc.examples.clone(),
        properties: doc.properties.clone(),
        params,
        members,
        return_type: return_type(file, selected),
        kind: selected.kind.clone(),
    }
}

/// Doc-tag params with signature-resolved types, then the signature
/// params no tag named. Tag params on a non-callable keep an empty
/// type.
fn build_params(file: &SourceFile, selected: &Selected<'_>, doc: &DocComment) -> Vec<Param> {
    let signature: Vec<Node> = selected
        .callable
        .map(|callable| file.signature_params(callable))
        .unwrap_or_default();

    let mut params: Vec<Param> = doc
        .params
        .iter()
        .map(|tag| {
            let type_text = signature
                .iter()
                .find(|node| file.param_name(**node) == tag.name)
                .map(|node| file.param_type(*node))
                .unwrap_or_default();
            Param {
                name: tag.name.clone(),
                type_text,
                description: Some(tag.description.clone()).filter(|text| !text.is_empty()),
            }
        })
        .collect();

    if selected.kind == DeclKind::Function {
        for node in &signature {
            let name = file.param_name(*node);
            if params.iter().any(|param| param.name == name) {
                continue;
            }
            params.push(Param {
                name,
                type_text: file.param_type(*node),
                description: None,
            });
        }
    }
    params
}

fn return_type(file: &SourceFile, selected: &Selected<'_>) -> Option<String> {
    if selected.kind != DeclKind::Function {
        return None;
    }
    selected
        .callable
        .and_then(|callable| file.return_type(callable))
}

/// Members of an interface body or an object-shaped type alias, empty
/// for every other declaration form.
fn build_members(
    file: &SourceFile,
    selected: &Selected<'_>,
    doc: &DocComment,
    params: &[Param],
) -> Vec<Member> {
    let Some(body) = member_list(selected) else {
        return Vec::new();
    };
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|member| {
            matches!(member.kind(), "property_signature" | "method_signature")
        })
        .map(|member| {
            let name = member_name(file, member);
            let description = params
                .iter()
                .find(|param| param.name == name)
                .and_then(|param| param.description.clone())
                .unwrap_or_else(|| "-".to_string());
            Member {
                required: !file.is_optional(member),
                type_text: file.member_type(member),
                default: doc.defaults.get(&name).cloned().unwrap_or_default(),
                name,
                description,
            }
        })
        .collect()
}

fn member_list<'t>(selected: &Selected<'t>) -> Option<Node<'t>> {
    match selected.kind {
        DeclKind::Interface => selected.node.child_by_field_name("body"),
        DeclKind::Type => selected
            .node
            .child_by_field_name("value")
            .filter(|value| value.kind() == "object_type"),
        _ => None,
    }
}

fn member_name(file: &SourceFile, member: Node<'_>) -> String {
    let printed = member
        .child_by_field_name("name")
        .map(|name| file.print(name))
        .unwrap_or_default();
    RE_COMMENT_PREFIX.replace(printed, "$1").into_owned()
}
