//! Curated sample guides
//!
//!     The sources live in `samples/` at the crate root and are embedded at compile time.
//!     Each sample knows the metadata it is meant to be compiled with.

use crate::guide::ast::Tree;
use crate::guide::metadata::Metadata;
use crate::guide::ontology::ContextType;
use crate::guide::pipeline::{Pipeline, PipelineError};
use crate::guide::token::Line;

const END_TO_END: &str = include_str!("../../../samples/end_to_end.guide");
const COLLEGES: &str = include_str!("../../../samples/colleges.guide");
const AP_EXAM: &str = include_str!("../../../samples/ap_exam.guide");
const MISSING_HEADER: &str = include_str!("../../../samples/missing_header.guide");

#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub source: &'static str,
    pub context_type: ContextType,
}

impl Sample {
    pub fn lines(&self) -> Vec<Line> {
        Line::from_source(self.source)
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new("study_guide").with_context(self.context_type)
    }

    /// Compile with the default pipeline and this sample's metadata.
    pub fn compile(&self) -> Result<Tree, PipelineError> {
        self.compile_with(&Pipeline::new())
    }

    pub fn compile_with(&self, pipeline: &Pipeline) -> Result<Tree, PipelineError> {
        pipeline.build_lines(&self.lines(), self.metadata())
    }
}

pub struct Samples;

impl Samples {
    /// Four-level tag chain with questions, a learn-more line and a passage. No context.
    pub fn end_to_end() -> Sample {
        Sample {
            name: "end_to_end",
            source: END_TO_END,
            context_type: ContextType::None,
        }
    }

    /// Six-level college headers, typed with the Colleges ontology.
    pub fn colleges() -> Sample {
        Sample {
            name: "colleges",
            source: COLLEGES,
            context_type: ContextType::Colleges,
        }
    }

    /// AP exam guide with branches of different depth.
    pub fn ap_exam() -> Sample {
        Sample {
            name: "ap_exam",
            source: AP_EXAM,
            context_type: ContextType::APExams,
        }
    }

    /// Starts with a regular header instead of a title.
    pub fn missing_header() -> Sample {
        Sample {
            name: "missing_header",
            source: MISSING_HEADER,
            context_type: ContextType::None,
        }
    }

    pub fn all() -> Vec<Sample> {
        vec![
            Self::end_to_end(),
            Self::colleges(),
            Self::ap_exam(),
            Self::missing_header(),
        ]
    }
}
