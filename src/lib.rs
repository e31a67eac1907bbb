//! Generate markdown documentation from TypeScript sources and splice
//! it into a marker-delimited README section.
//!
//! Exported top-level declarations and the JSDoc blocks above them are
//! assembled into [`Document`] records and rendered as markdown. The
//! rendered blocks replace the interior of a
//! `<!-- INSERT GENERATED DOCS START -->` … `<!-- INSERT GENERATED
//! DOCS END -->` section in the target file.
//!
//! ```no_run
//! # fn main() -> ts_readme::Result<()> {
//! use ts_readme::GenerateOptions;
//!
//! let status = ts_readme::generate(&GenerateOptions::default())?;
//! println!("{:?}", status);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;

mod discover;
mod extract;
mod readme;
mod render;
mod unit;

pub use error::{Error, Result};
pub use model::{
    DeclKind, Document, GenerateOptions, KindFilter, Member, Param, DEFAULT_FILE_PATH,
    DEFAULT_PATTERNS,
};
pub use readme::{create_matcher, format_markdown, UpdateStatus, DEFAULT_MARKER};
pub use render::render_markdown;

use unit::SourceUnit;

/// Extract documents from every file the patterns match, without
/// touching any target file.
pub fn docs_for(patterns: &[String], kinds: &KindFilter) -> Result<Vec<Document>> {
    let files = discover::expand_globs(patterns)?;
    let unit = SourceUnit::load(&files)?;
    Ok(extract::docs_for_unit(&unit, kinds))
}

/// Run the whole pipeline with defaults applied for unset options:
/// discover sources, extract documents, render them and update the
/// target file's marker section.
pub fn generate(options: &GenerateOptions) -> Result<UpdateStatus> {
    let documents = docs_for(&options.patterns(), &options.kind_filter())?;
    let matcher = options.section_matcher();
    readme::update_file(&options.target_path(), &matcher, &documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn docs_for_walks_matched_files() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("math.ts"),
            "/**\n * Add two numbers\n */\nexport function add(a: number, b: number): number { return a + b }\n",
        )
        .unwrap();
        let pattern = format!("{}/*.ts", dir.path().display());
        let docs = docs_for(&[pattern], &KindFilter::all()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "add");
        assert_eq!(docs[0].description, "Add two numbers");
    }

    #[test]
    fn generate_updates_the_marker_section() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("math.ts"),
            "export function add(a: number, b: number): number { return a + b }\n",
        )
        .unwrap();
        let readme_path = dir.path().join("README.md");
        fs::write(
            &readme_path,
            format!("<!-- {DEFAULT_MARKER} START -->\nold\n<!-- {DEFAULT_MARKER} END -->\n"),
        )
        .unwrap();
        let options = GenerateOptions {
            pattern: Some(vec![format!("{}/*.ts", dir.path().display())]),
            file_path: Some(readme_path.clone()),
            ..GenerateOptions::default()
        };
        let status = generate(&options).unwrap();
        assert_eq!(status, UpdateStatus::Updated);
        let written = fs::read_to_string(&readme_path).unwrap();
        assert!(written.contains("#### add (function)"));
        assert!(written.contains("**Returns:** number"));
    }

    #[test]
    fn generate_reports_a_missing_marker_section() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("math.ts"), "export const one = 1\n").unwrap();
        let readme_path = dir.path().join("README.md");
        fs::write(&readme_path, "# No section\n").unwrap();
        let options = GenerateOptions {
            pattern: Some(vec![format!("{}/*.ts", dir.path().display())]),
            file_path: Some(readme_path.clone()),
            ..GenerateOptions::default()
        };
        let status = generate(&options).unwrap();
        assert_eq!(status, UpdateStatus::NoMarker);
        assert_eq!(fs::read_to_string(&readme_path).unwrap(), "# No section\n");
    }

    #[test]
    fn generate_propagates_parse_failures() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.ts"), "export function (((\n").unwrap();
        let options = GenerateOptions {
            pattern: Some(vec![format!("{}/*.ts", dir.path().display())]),
            file_path: Some(dir.path().join("README.md")),
            ..GenerateOptions::default()
        };
        let err = generate(&options).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
