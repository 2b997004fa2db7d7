//! Ontology table
//!
//!     Rows map (context type, total tag depth) to the tag type of each level. A document
//!     is typed by the row whose depth equals its deepest tag, so a 6-level college guide
//!     reads Category / Region / University / Department / Course / Topic.
//!
//!     The standard table is built once and never mutated.

use once_cell::sync::Lazy;

use super::types::{ContextType, TagType};

/// One ontology row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOntology {
    pub context_type: ContextType,
    pub header_depth: usize,
    pub tag_types: Vec<TagType>,
}

impl TagOntology {
    pub fn new(context_type: ContextType, tag_types: Vec<TagType>) -> Self {
        Self {
            context_type,
            header_depth: tag_types.len(),
            tag_types,
        }
    }

    /// Tag type for a 1-based depth, if the row reaches that deep.
    pub fn tag_type_at(&self, depth: usize) -> Option<TagType> {
        depth
            .checked_sub(1)
            .and_then(|index| self.tag_types.get(index))
            .copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyTable {
    rows: Vec<TagOntology>,
}

static STANDARD: Lazy<OntologyTable> = Lazy::new(OntologyTable::build_standard);

impl OntologyTable {
    pub fn new(rows: Vec<TagOntology>) -> Self {
        Self { rows }
    }

    /// The built-in table shared by every pipeline.
    pub fn standard() -> &'static OntologyTable {
        &STANDARD
    }

    pub fn find(&self, context_type: ContextType, depth: usize) -> Option<&TagOntology> {
        self.rows
            .iter()
            .find(|row| row.context_type == context_type && row.header_depth == depth)
    }

    /// Depths with a row for `context_type`, ascending.
    pub fn depths_for(&self, context_type: ContextType) -> Vec<usize> {
        let mut depths: Vec<_> = self
            .rows
            .iter()
            .filter(|row| row.context_type == context_type)
            .map(|row| row.header_depth)
            .collect();
        depths.sort_unstable();
        depths
    }

    pub fn rows(&self) -> &[TagOntology] {
        &self.rows
    }

    fn build_standard() -> Self {
        use ContextType as C;
        use TagType as T;

        let modules = |n: usize| vec![T::Module; n];
        let domains = |n: usize| vec![T::Domain; n];

        let mut rows = Vec::new();

        for exam in [(C::APExams, T::APExam), (C::EntranceExams, T::EntranceExam)] {
            for extra in 0..=3 {
                let mut types = vec![T::Category, exam.1];
                types.extend(modules(extra));
                types.push(T::Topic);
                rows.push(TagOntology::new(exam.0, types));
            }
        }

        rows.push(TagOntology::new(
            C::Certifications,
            vec![T::Category, T::CertifyingAgency, T::Certification, T::Topic],
        ));
        rows.push(TagOntology::new(
            C::Certifications,
            vec![T::Category, T::CertifyingAgency, T::Certification, T::Module, T::Topic],
        ));
        for extra in 1..=4 {
            let mut types = vec![T::Category, T::CertifyingAgency, T::Certification];
            types.extend(domains(extra));
            types.extend([T::Module, T::Topic]);
            rows.push(TagOntology::new(C::Certifications, types));
        }

        rows.push(TagOntology::new(
            C::Colleges,
            vec![T::Category, T::Region, T::University, T::Department, T::Course, T::Topic],
        ));

        let dod = [
            T::Category,
            T::Branch,
            T::InstructionType,
            T::InstructionGroup,
            T::Instruction,
            T::Section,
            T::Chapter,
            T::Part,
        ];
        for depth in 4..=dod.len() {
            rows.push(TagOntology::new(C::DoD, dod[..depth].to_vec()));
        }

        rows.push(TagOntology::new(
            C::Encyclopedia,
            vec![T::Category, T::Volume, T::Range, T::Topic],
        ));

        Self::new(rows)
    }
}
