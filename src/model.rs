//! Data model for extracted documentation — one record per exported
//! declaration, format-agnostic.

use crate::error::Error;
use crate::readme;
use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;

/// Default glob patterns when none are given. The usual
/// `src/**/*.(ts|tsx)` search expressed as two plain globs.
pub const DEFAULT_PATTERNS: &[&str] = &["./src/**/*.ts", "./src/**/*.tsx"];

/// Default target file for the generated section.
pub const DEFAULT_FILE_PATH: &str = "./README.md";

/// One documented exported declaration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    /// Source file path, set only on the first document of each file.
    pub filename: String,
    /// The declaration's bound name.
    pub title: String,
    /// Free text from the doc comment, possibly empty.
    pub description: String,
    /// `@example` blocks, in tag order.
    pub examples: Vec<String>,
    /// Parameters, for function-like declarations.
    pub params: Vec<Param>,
    /// `@property` bullet strings.
    pub properties: Vec<String>,
    /// Object members, for interface and type-alias declarations.
    pub members: Vec<Member>,
    /// Kind classification, computed once at selection.
    pub kind: DeclKind,
    /// Return type, for function-like declarations with an annotation.
    pub return_type: Option<String>,
}

/// A function parameter: doc-tag data joined with signature data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    /// Resolved type text; empty when nothing could be resolved.
    pub type_text: String,
    /// Doc-tag description, absent for signature-derived params.
    pub description: Option<String>,
}

/// A member of an interface or object type alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    /// False iff the member carries an optional marker.
    pub required: bool,
    pub type_text: String,
    /// Value from a matching `@default` tag, empty when absent.
    pub default: String,
    /// Borrowed from a `@param` tag of the same name, `-` when absent.
    pub description: String,
}

/// Declaration kind, plus the declared type text for annotated variables.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DeclKind {
    #[default]
    Function,
    Type,
    Class,
    Interface,
    Variable {
        declared: Option<String>,
    },
}

impl DeclKind {
    /// Classification tag as it appears in the rendered heading.
    pub fn label(&self) -> String {
        match self {
            DeclKind::Function => "function".to_string(),
            DeclKind::Type => "type".to_string(),
            DeclKind::Class => "class".to_string(),
            DeclKind::Interface => "interface".to_string(),
            DeclKind::Variable { declared: None } => "variable".to_string(),
            DeclKind::Variable { declared: Some(t) } => format!("variable: {}", t),
        }
    }
}

/// Which declaration kinds the selector keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindFilter {
    pub variable: bool,
    pub function: bool,
    pub type_alias: bool,
    pub class: bool,
    pub interface: bool,
}

impl KindFilter {
    /// Filter with every kind enabled (the default).
    pub fn all() -> Self {
        KindFilter {
            variable: true,
            function: true,
            type_alias: true,
            class: true,
            interface: true,
        }
    }

    /// Filter with no kind enabled; flip the fields to build one up.
    pub fn none() -> Self {
        KindFilter {
            variable: false,
            function: false,
            type_alias: false,
            class: false,
            interface: false,
        }
    }
}

impl Default for KindFilter {
    fn default() -> Self {
        KindFilter::all()
    }
}

impl FromStr for KindFilter {
    type Err = Error;

    /// Parse a comma-delimited kind list. Unknown names are rejected
    /// rather than silently ignored.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut filter = KindFilter::none();
        for token in s.split(',') {
            match token.trim() {
                "" => {}
                "variable" => filter.variable = true,
                "function" => filter.function = true,
                "type" => filter.type_alias = true,
                "class" => filter.class = true,
                "interface" => filter.interface = true,
                other => return Err(Error::UnknownKind(other.to_string())),
            }
        }
        Ok(filter)
    }
}

/// Options for [`crate::generate`]; unset fields fall back to the
/// documented defaults.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Matcher for the section to replace.
    pub matcher: Option<Regex>,
    /// Glob patterns of the source files to document.
    pub pattern: Option<Vec<String>>,
    /// Declaration kinds to include.
    pub types: Option<KindFilter>,
    /// The file holding the marker section.
    pub file_path: Option<PathBuf>,
}

impl GenerateOptions {
    /// Patterns to scan, defaulting to everything under `./src`.
    pub fn patterns(&self) -> Vec<String> {
        self.pattern
            .clone()
            .unwrap_or_else(|| DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect())
    }

    /// Kind filter, defaulting to all five kinds.
    pub fn kind_filter(&self) -> KindFilter {
        self.types.clone().unwrap_or_default()
    }

    /// Target file, defaulting to `./README.md`.
    pub fn target_path(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_PATH))
    }

    /// Section matcher, defaulting to the fixed marker name.
    pub fn section_matcher(&self) -> Regex {
        self.matcher
            .clone()
            .unwrap_or_else(|| readme::create_matcher(readme::DEFAULT_MARKER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_kind_list() {
        let filter: KindFilter = "function,interface".parse().unwrap();
        assert!(filter.function);
        assert!(filter.interface);
        assert!(!filter.variable);
        assert!(!filter.type_alias);
        assert!(!filter.class);
    }

    #[test]
    fn filter_tolerates_whitespace_and_empty_tokens() {
        let filter: KindFilter = " type , class ,".parse().unwrap();
        assert!(filter.type_alias);
        assert!(filter.class);
        assert!(!filter.function);
    }

    #[test]
    fn filter_rejects_unknown_kind() {
        let err = "function,enum".parse::<KindFilter>().unwrap_err();
        assert!(err.to_string().contains("unknown declaration kind 'enum'"));
    }

    #[test]
    fn default_filter_keeps_everything() {
        let filter = KindFilter::default();
        assert!(filter.variable && filter.function && filter.type_alias);
        assert!(filter.class && filter.interface);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(DeclKind::Function.label(), "function");
        assert_eq!(DeclKind::Variable { declared: None }.label(), "variable");
        assert_eq!(
            DeclKind::Variable {
                declared: Some("Config".to_string())
            }
            .label(),
            "variable: Config"
        );
    }

    #[test]
    fn options_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.patterns(), DEFAULT_PATTERNS);
        assert_eq!(options.target_path(), PathBuf::from("./README.md"));
        assert_eq!(options.kind_filter(), KindFilter::all());
        assert!(options
            .section_matcher()
            .is_match("<!-- INSERT GENERATED DOCS START -->\nx\n<!-- INSERT GENERATED DOCS END -->"));
    }
}
