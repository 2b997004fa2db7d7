//! Post-build QA
//!
//!     A [QaCheck] inspects the finished tree and reports a named pass/fail with one
//!     warning per offending tag. The [QaRunner] runs its checks in order and stores the
//!     aggregate on the root, replacing any previous report. QA never fails a build.
//!
//!     Built-in checks, selectable by name:
//!
//!         tag_type      "Must have TagType"      every tag has a tag type
//!         context_type  "Must have ContextType"  every tag has a context type

use crate::guide::ast::{QaResult, QaResults, Tag, Tree};

pub trait QaCheck: Send + Sync {
    /// Name reported in the result.
    fn name(&self) -> &str;

    fn check(&self, tree: &Tree) -> QaResult;
}

/// Collect one warning per tag failing `ok`.
fn per_tag_check(name: &str, tree: &Tree, ok: impl Fn(&Tag) -> bool, missing: &str) -> QaResult {
    let warnings = tree
        .walk()
        .filter(|(tag, _)| !ok(tag))
        .map(|(tag, depth)| format!("Tag '{}' at depth {} has {}", tag.title, depth, missing))
        .collect();
    QaResult::from_warnings(name, warnings)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TagTypeQa;

impl QaCheck for TagTypeQa {
    fn name(&self) -> &str {
        "Must have TagType"
    }

    fn check(&self, tree: &Tree) -> QaResult {
        per_tag_check(self.name(), tree, |tag| !tag.tag_type.is_none(), "TagTypeNone")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContextTypeQa;

impl QaCheck for ContextTypeQa {
    fn name(&self) -> &str {
        "Must have ContextType"
    }

    fn check(&self, tree: &Tree) -> QaResult {
        per_tag_check(
            self.name(),
            tree,
            |tag| !tag.context_type.is_none(),
            "ContextTypeNone",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QaError {
    #[error("unknown QA check '{name}', available: {}", .available.join(", "))]
    UnknownCheck {
        name: String,
        available: Vec<&'static str>,
    },
}

/// Configuration names of the built-in checks.
pub const BUILTIN_CHECKS: [&str; 2] = ["tag_type", "context_type"];

fn builtin(name: &str) -> Option<Box<dyn QaCheck>> {
    match name {
        "tag_type" => Some(Box::new(TagTypeQa)),
        "context_type" => Some(Box::new(ContextTypeQa)),
        _ => None,
    }
}

#[derive(Default)]
pub struct QaRunner {
    checks: Vec<Box<dyn QaCheck>>,
}

impl QaRunner {
    /// A runner without checks; its report always passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Both built-in checks, tag type first.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_check(TagTypeQa)
            .with_check(ContextTypeQa)
    }

    /// Build a runner from configuration names, in the given order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, QaError> {
        let mut runner = Self::new();
        for name in names {
            let name = name.as_ref();
            let check = builtin(name).ok_or_else(|| QaError::UnknownCheck {
                name: name.to_string(),
                available: BUILTIN_CHECKS.to_vec(),
            })?;
            runner.checks.push(check);
        }
        Ok(runner)
    }

    pub fn with_check(mut self, check: impl QaCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    pub fn run(&self, tree: &Tree) -> QaResults {
        let results = QaResults::from_results(self.checks.iter().map(|c| c.check(tree)).collect());
        if !results.overall_passed {
            tracing::warn!(
                warnings = results.warning_count(),
                root = %tree.root.title,
                "QA checks failed"
            );
        }
        results
    }

    /// Run every check and store the report on the root.
    pub fn run_and_update(&self, tree: &mut Tree) {
        let results = self.run(tree);
        tree.root.qa_results = results;
    }
}

impl std::fmt::Debug for QaRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QaRunner")
            .field("checks", &self.check_names())
            .finish()
    }
}
