//! Testing utilities
//!
//!     Two rules keep the test suite honest as the guide format evolves:
//!
//!         1. Take source text from the curated [Samples], not ad-hoc strings, whenever a
//!            test is about a whole document.
//!         2. Check built trees through [assert_tree], not by walking fields by hand.
//!
//!     Walking `tree.root.child_tags[0].child_tags[1]...` in every test breaks the moment
//!     the tree layout changes, and such tests tend to check little more than counts. The
//!     fluent assertions address tags by title path and carry a context string, so a failure
//!     says where in the tree it happened.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use studyguide::guide::testing::{assert_tree, Samples};
//!
//!     let tree = Samples::end_to_end().compile().unwrap();
//!
//!     assert_tree(&tree)
//!         .root_title("TestFile")
//!         .tag(&["TagA", "TagB", "TagC", "TagD"], |tag| {
//!             tag.question_count(2)
//!                 .question(0, |q| q.learn_more("This is simple addition"))
//!                 .passage(0, |p| p.title("Tim had 5 apples and gave Mike 3").question_count(3));
//!         });
//!     ```

pub mod samples;
mod tree_assertions;

pub use samples::{Sample, Samples};
pub use tree_assertions::{PassageAssertion, QuestionAssertion, TagAssertion, TreeAssertion};

use crate::guide::ast::Tree;

/// Create an assertion builder for a built tree
pub fn assert_tree(tree: &Tree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}
