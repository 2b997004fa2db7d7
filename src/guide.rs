//! Main module for the study guide compiler
//!
//!     The pipeline runs strictly forward:
//!
//!         lines -> lexing -> preparsing -> parsing -> building -> ontology -> qa
//!
//!     Each stage owns its error type. [pipeline] wires the stages together and
//!     converts failures into serializable per-line reports.

pub mod ast;
pub mod building;
pub mod formats;
pub mod ids;
pub mod lexing;
pub mod metadata;
pub mod ontology;
pub mod parsing;
pub mod pipeline;
pub mod preparsing;
pub mod qa;
pub mod testing;
pub mod text;
pub mod token;
