//! Exported-declaration selection — walks a file's top level and keeps
//! the `export` statements whose declaration kind passes the configured
//! filter.

use crate::model::{DeclKind, KindFilter};
use crate::unit::SourceFile;
use tree_sitter::Node;

/// One exported declaration picked out of a source file.
pub struct Selected<'t> {
    /// The `export_statement` node the doc comment hangs off.
    pub export: Node<'t>,
    /// The declared entity under the export keyword.
    pub node: Node<'t>,
    /// Name node, if the declaration form carries one.
    pub name: Option<Node<'t>>,
    /// Function body or initializer to read signatures from.
    pub callable: Option<Node<'t>>,
    pub kind: DeclKind,
}

/// Top-level exported declarations in source order, filtered by kind.
/// Re-exports (`export { a } from './b'`) carry no declaration and are
/// skipped.
pub fn exported_declarations<'t>(file: &'t SourceFile, kinds: &KindFilter) -> Vec<Selected<'t>> {
    let root = file.root();
    let mut cursor = root.walk();
    let mut selected = Vec::new();
    for statement in root.named_children(&mut cursor) {
        if statement.kind() != "export_statement" {
            continue;
        }
        let Some(declaration) = statement.child_by_field_name("declaration") else {
            continue;
        };
        if let Some(item) = classify(file, statement, declaration, kinds) {
            selected.push(item);
        }
    }
    selected
}

/// Classify a declaration node, returning `None` when its kind is
/// filtered out or unsupported.
fn classify<'t>(
    file: &'t SourceFile,
    export: Node<'t>,
    declaration: Node<'t>,
    kinds: &KindFilter,
) -> Option<Selected<'t>> {
    match declaration.kind() {
        "function_declaration" | "function_signature" | "generator_function_declaration" => {
            if !kinds.function {
                return None;
            }
            Some(Selected {
                export,
                node: declaration,
                name: declaration.child_by_field_name("name"),
                callable: Some(declaration),
                kind: DeclKind::Function,
            })
        }
        "class_declaration" | "abstract_class_declaration" => {
            if !kinds.class {
                return None;
            }
            Some(Selected {
                export,
                node: declaration,
                name: declaration.child_by_field_name("name"),
                callable: None,
                kind: DeclKind::Class,
            })
        }
        "interface_declaration" => {
            if !kinds.interface {
                return None;
            }
            Some(Selected {
                export,
                node: declaration,
                name: declaration.child_by_field_name("name"),
                callable: None,
                kind: DeclKind::Interface,
            })
        }
        "type_alias_declaration" => {
            if !kinds.type_alias {
                return None;
            }
            Some(Selected {
                export,
                node: declaration,
                name: declaration.child_by_field_name("name"),
                callable: None,
                kind: DeclKind::Type,
            })
        }
        "lexical_declaration" | "variable_declaration" => {
            classify_variable(file, export, declaration, kinds)
        }
        _ => None,
    }
}

/// A `const`/`let`/`var` export counts as a function when its first
/// declarator is initialized with a function form, otherwise as a
/// variable annotated with its declared type.
fn classify_variable<'t>(
    file: &'t SourceFile,
    export: Node<'t>,
    declaration: Node<'t>,
    kinds: &KindFilter,
) -> Option<Selected<'t>> {
    let mut cursor = declaration.walk();
    let declarator = declaration
        .named_children(&mut cursor)
        .find(|child| child.kind() == "variable_declarator")?;
    let name = declarator.child_by_field_name("name");
    let value = declarator.child_by_field_name("value");

    let callable = value.filter(|node| {
        matches!(
            node.kind(),
            "arrow_function" | "function_expression" | "function"
        )
    });
    if let Some(callable) = callable {
        if kinds.function {
            return Some(Selected {
                export,
                node: declarator,
                name,
                callable: Some(callable),
                kind: DeclKind::Function,
            });
        }
    }
    if !kinds.variable {
        return None;
    }
    let declared = declarator
        .child_by_field_name("type")
        .map(|annotation| file.annotation_text(annotation));
    Some(Selected {
        export,
        node: declarator,
        name,
        // a filtered-out function initializer still resolves tag types
        callable,
        kind: DeclKind::Variable { declared },
    })
}
