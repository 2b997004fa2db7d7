//! # studyguide
//!
//! Compiles plain-text study guides into typed content trees.
//!
//! A guide is a line-oriented document: a title on the first line, colon-separated
//! topic headers, list-item questions with answers, and free-text passages. The
//! [guide](crate::guide) module holds the whole pipeline, from line classification to
//! the ontology-typed tree and its QA report.
//!
//! ## Testing
//!
//! Fluent tree assertions and embedded sample guides live in the
//! [testing module](crate::guide::testing).

pub mod guide;
