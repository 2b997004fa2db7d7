//! Domain tree elements
//!
//!     - [Root]: the document, titled by the file header. Holds top-level tags and the QA report.
//!     - [Tag]: one level of a topic path. Holds questions, passages and child tags.
//!     - [Question]: a prompt with its answer.
//!     - [Passage]: titled reading text with its own questions.
//!
//!     Root and Tag are separate types: the root has no hash, no tag type and is never
//!     QA-checked.

pub mod passage;
pub mod qa;
pub mod question;
pub mod root;
pub mod tag;

pub use passage::Passage;
pub use qa::{QaResult, QaResults};
pub use question::Question;
pub use root::Root;
pub use tag::Tag;
