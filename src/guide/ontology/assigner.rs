//! Ontology assignment
//!
//!     Two passes over the tree: the first finds the deepest tag and selects the table
//!     row, the second writes tag types. Nothing is written unless a row exists.

use super::table::OntologyTable;
use super::types::ContextType;
use super::OntologyError;
use crate::guide::ast::Tree;

pub struct OntologyAssigner<'a> {
    table: &'a OntologyTable,
}

impl<'a> OntologyAssigner<'a> {
    pub fn new(table: &'a OntologyTable) -> Self {
        Self { table }
    }

    /// Type every tag of `tree` for `context_type`.
    ///
    /// Tags deeper than the selected row keep `None` for both fields.
    pub fn assign(&self, tree: &mut Tree, context_type: ContextType) -> Result<(), OntologyError> {
        let depth = tree.max_depth();
        let row = self
            .table
            .find(context_type, depth)
            .ok_or(OntologyError::NotFound {
                context_type,
                depth,
            })?;

        let mut assigned = 0usize;
        for slot in tree.walk_mut() {
            if let Some(tag_type) = row.tag_type_at(slot.depth) {
                *slot.tag_type = tag_type;
                *slot.context_type = context_type;
                assigned += 1;
            }
        }
        tracing::debug!(context = %context_type, depth, assigned, "assigned ontology");
        Ok(())
    }
}
