//! Building
//!
//!     Turns the line-structural syntax tree into the domain [Tree](crate::guide::ast::Tree).
//!     This is where repeated header prefixes collapse into a single tag hierarchy and
//!     where hashes and insertion ids are minted.
//!
//!     The builder itself only assembles. Ontology typing and QA run afterwards, see
//!     [Pipeline::build_syntax_tree](crate::guide::pipeline::Pipeline::build_syntax_tree).

pub mod builder;

pub use builder::TreeBuilder;
