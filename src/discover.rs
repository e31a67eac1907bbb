//! Source discovery — expands glob patterns into a deduplicated file
//! list, preserving pattern order.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Expand `patterns` in order into existing files. A pattern that
/// matches nothing prints a warning and contributes nothing; an invalid
/// pattern or an unreadable match aborts.
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        let entries = glob::glob(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        let mut matched = false;
        for entry in entries {
            let path = entry.map_err(|source| Error::Glob {
                pattern: pattern.clone(),
                source,
            })?;
            if !path.is_file() {
                continue;
            }
            matched = true;
            if !files.contains(&path) {
                files.push(path);
            }
        }
        if !matched {
            eprintln!("warning: no files matched '{}'", pattern);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "export {}\n").unwrap();
        path
    }

    #[test]
    fn expands_in_pattern_order() {
        let dir = TempDir::new().unwrap();
        let b = touch(&dir, "b.ts");
        let a = touch(&dir, "a.ts");
        let base = dir.path().display();
        let files = expand_globs(&[
            format!("{}/b.ts", base),
            format!("{}/a.ts", base),
        ])
        .unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn overlapping_patterns_deduplicate() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "a.ts");
        let base = dir.path().display();
        let files = expand_globs(&[
            format!("{}/*.ts", base),
            format!("{}/a.ts", base),
        ])
        .unwrap();
        assert_eq!(files, vec![a]);
    }

    #[test]
    fn directories_are_not_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested.ts")).unwrap();
        let a = touch(&dir, "a.ts");
        let files = expand_globs(&[format!("{}/*.ts", dir.path().display())]).unwrap();
        assert_eq!(files, vec![a]);
    }

    #[test]
    fn zero_matches_yield_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let files = expand_globs(&[format!("{}/*.ts", dir.path().display())]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = expand_globs(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }

    #[test]
    fn recursive_glob_descends() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/deep")).unwrap();
        let path = dir.path().join("src/deep/mod.ts");
        fs::write(&path, "export {}\n").unwrap();
        let files = expand_globs(&[format!("{}/src/**/*.ts", dir.path().display())]).unwrap();
        assert_eq!(files, vec![path]);
    }
}
