//! Ontology
//!
//!     A document declares a [ContextType] (colleges, certifications, AP exams, ...).
//!     Together with the depth of its tag hierarchy that selects a row of the
//!     [OntologyTable], which says what each level means: the first level of a college
//!     guide is a Category, the third a University, and so on.
//!
//!     Assignment happens after building and before QA. A document whose depth has no
//!     row for its context fails the build; typing is never partial.

pub mod assigner;
pub mod table;
pub mod types;

pub use assigner::OntologyAssigner;
pub use table::{OntologyTable, TagOntology};
pub use types::{ContextType, TagType, UnknownContextType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OntologyError {
    #[error("no ontology found for context type '{context_type}' with depth {depth}")]
    NotFound {
        context_type: ContextType,
        depth: usize,
    },
}

impl OntologyError {
    pub fn code(&self) -> &'static str {
        "ONTOLOGY_NOT_FOUND"
    }
}
