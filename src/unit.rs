//! Type-information provider: a set of parsed source files that answers
//! node-to-text and type queries for the extraction pipeline.
//!
//! Type queries are syntactic: a node's resolved type is its annotation
//! text, or a literal-inferred type for initializers, with `any` as the
//! parameter fallback.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// All source files of one run, parsed once and queried read-only.
#[derive(Debug)]
pub struct SourceUnit {
    files: Vec<SourceFile>,
}

/// One parsed source file.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceUnit {
    /// Parse every file up front. Any syntax error aborts the run.
    pub fn load(paths: &[PathBuf]) -> Result<Self> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let source = fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            let tree = parse_source(path, &source)?;
            files.push(SourceFile {
                path: path.clone(),
                source,
                tree,
            });
        }
        Ok(SourceUnit { files })
    }

    /// Files in load order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }
}

fn parse_source(path: &Path, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let language = if is_tsx(path) {
        tree_sitter_typescript::LANGUAGE_TSX.into()
    } else {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    };
    parser.set_language(&language).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let tree = parser.parse(source, None).ok_or_else(|| Error::Parse {
        path: path.to_path_buf(),
        message: "no syntax tree produced".to_string(),
    })?;
    if tree.root_node().has_error() {
        return Err(Error::Parse {
            path: path.to_path_buf(),
            message: "source contains syntax errors".to_string(),
        });
    }
    Ok(tree)
}

fn is_tsx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext == "tsx")
        .unwrap_or(false)
}

impl SourceFile {
    /// Path as it appears in the rendered filename heading.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Pure type-declaration files are parsed but never enumerated.
    pub fn is_declaration(&self) -> bool {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".d.ts") || n.ends_with(".d.tsx"))
            .unwrap_or(false)
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Render a node back to its source text.
    pub fn print(&self, node: Node) -> &str {
        &self.source[node.start_byte()..node.end_byte()]
    }

    /// Text of a type annotation, without the leading colon.
    pub fn annotation_text(&self, annotation: Node) -> String {
        self.print(annotation)
            .trim_start_matches(':')
            .trim()
            .to_string()
    }

    /// The parameter's bound name (identifier or whole binding pattern).
    pub fn param_name(&self, param: Node) -> String {
        match param.child_by_field_name("pattern") {
            Some(pattern) => self.print(pattern).to_string(),
            // A lone unparenthesized arrow parameter is a bare identifier.
            None => self.print(param).to_string(),
        }
    }

    /// Resolved type of a signature parameter: annotation first, then the
    /// default value's literal type, then `any`.
    pub fn param_type(&self, param: Node) -> String {
        if let Some(annotation) = param.child_by_field_name("type") {
            return self.annotation_text(annotation);
        }
        if let Some(value) = param.child_by_field_name("value") {
            return literal_type(value);
        }
        "any".to_string()
    }

    /// Resolved type of an interface/object-type member.
    pub fn member_type(&self, member: Node) -> String {
        match member.kind() {
            "method_signature" => {
                let params = member
                    .child_by_field_name("parameters")
                    .map(|p| self.print(p).to_string())
                    .unwrap_or_else(|| "()".to_string());
                let ret = member
                    .child_by_field_name("return_type")
                    .map(|r| self.annotation_text(r))
                    .unwrap_or_else(|| "any".to_string());
                format!("{} => {}", params, ret)
            }
            _ => member
                .child_by_field_name("type")
                .map(|t| self.annotation_text(t))
                .unwrap_or_else(|| "any".to_string()),
        }
    }

    /// Parameters of a function-like node, in signature order.
    pub fn signature_params<'t>(&self, callable: Node<'t>) -> Vec<Node<'t>> {
        if let Some(parameters) = callable.child_by_field_name("parameters") {
            let mut cursor = parameters.walk();
            return parameters
                .named_children(&mut cursor)
                .filter(|n| matches!(n.kind(), "required_parameter" | "optional_parameter"))
                .collect();
        }
        // Unparenthesized single arrow parameter.
        match callable.child_by_field_name("parameter") {
            Some(parameter) => vec![parameter],
            None => Vec::new(),
        }
    }

    /// Annotated return type of the node's call signature, if any.
    pub fn return_type(&self, callable: Node) -> Option<String> {
        callable
            .child_by_field_name("return_type")
            .map(|r| self.annotation_text(r))
    }

    /// Whether a member or parameter carries the optional marker.
    pub fn is_optional(&self, node: Node) -> bool {
        (0..node.child_count()).any(|i| node.child(i).map(|c| c.kind() == "?").unwrap_or(false))
    }
}

/// Type of a literal initializer, for unannotated bindings.
fn literal_type(value: Node) -> String {
    match value.kind() {
        "string" | "template_string" => "string".to_string(),
        "number" => "number".to_string(),
        "true" | "false" => "boolean".to_string(),
        _ => "any".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load(name: &str, source: &str) -> (TempDir, SourceUnit) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, source).unwrap();
        let unit = SourceUnit::load(&[path]).unwrap();
        (dir, unit)
    }

    #[test]
    fn parses_typescript_source() {
        let (_dir, unit) = load("a.ts", "export function add(one: number): number { return one }\n");
        let file = unit.files().next().unwrap();
        assert_eq!(file.root().kind(), "program");
        assert!(!file.is_declaration());
    }

    #[test]
    fn parses_tsx_source() {
        let (_dir, unit) = load(
            "widget.tsx",
            "export const Widget = () => <div>hello</div>\n",
        );
        let file = unit.files().next().unwrap();
        assert!(!file.root().has_error());
    }

    #[test]
    fn syntax_error_aborts_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.ts");
        fs::write(&path, "export function (\n").unwrap();
        let err = SourceUnit::load(&[path]).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SourceUnit::load(&[PathBuf::from("/nonexistent/x.ts")]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn declaration_file_detection() {
        let (_dir, unit) = load("types.d.ts", "export declare const x: number\n");
        assert!(unit.files().next().unwrap().is_declaration());
    }

    #[test]
    fn annotation_text_strips_colon() {
        let (_dir, unit) = load("a.ts", "export const x: number = 1\n");
        let file = unit.files().next().unwrap();
        let root = file.root();
        let mut cursor = root.walk();
        let export = root.named_children(&mut cursor).next().unwrap();
        let decl = export.child_by_field_name("declaration").unwrap();
        let mut inner = decl.walk();
        let declarator = decl
            .named_children(&mut inner)
            .find(|n| n.kind() == "variable_declarator")
            .unwrap();
        let annotation = declarator.child_by_field_name("type").unwrap();
        assert_eq!(file.annotation_text(annotation), "number");
    }

    #[test]
    fn param_types_from_annotation_default_and_fallback() {
        let (_dir, unit) = load(
            "a.ts",
            "export function f(one: number, two = 'x', three) { return three }\n",
        );
        let file = unit.files().next().unwrap();
        let root = file.root();
        let mut cursor = root.walk();
        let export = root.named_children(&mut cursor).next().unwrap();
        let func = export.child_by_field_name("declaration").unwrap();
        let params = file.signature_params(func);
        assert_eq!(params.len(), 3);
        assert_eq!(file.param_name(params[0]), "one");
        assert_eq!(file.param_type(params[0]), "number");
        assert_eq!(file.param_type(params[1]), "string");
        assert_eq!(file.param_type(params[2]), "any");
    }

    #[test]
    fn return_type_requires_annotation() {
        let (_dir, unit) = load(
            "a.ts",
            "export function f(): number { return 1 }\nexport function g() { return 1 }\n",
        );
        let file = unit.files().next().unwrap();
        let root = file.root();
        let mut cursor = root.walk();
        let funcs: Vec<_> = root
            .named_children(&mut cursor)
            .filter_map(|n| n.child_by_field_name("declaration"))
            .collect();
        assert_eq!(file.return_type(funcs[0]).as_deref(), Some("number"));
        assert_eq!(file.return_type(funcs[1]), None);
    }
}
