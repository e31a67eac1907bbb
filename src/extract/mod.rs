//! Extraction pipeline — from parsed sources to document records.
//!
//! Each source file is scanned for exported declarations; every
//! declaration is paired with the doc comments sitting above it and
//! assembled into one [`Document`].

mod assemble;
mod jsdoc;
mod select;

use crate::model::{Document, KindFilter};
use crate::unit::SourceUnit;

/// Documents for every exported declaration in the unit, in file order
/// then source order. Declaration files (`.d.ts`) never describe their
/// own exports and are skipped.
pub fn docs_for_unit(unit: &SourceUnit, kinds: &KindFilter) -> Vec<Document> {
    let mut documents = Vec::new();
    for file in unit.files() {
        if file.is_declaration() {
            continue;
        }
        for (index, selected) in select::exported_declarations(file, kinds).iter().enumerate() {
            let comments = jsdoc::leading_comments(file, selected.export);
            let doc = jsdoc::extract(&comments);
            documents.push(assemble::assemble(file, selected, &doc, index == 0));
        }
    }
    documents
}
