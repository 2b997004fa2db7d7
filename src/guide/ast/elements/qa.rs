//! QA report stored on the root

use serde::{Deserialize, Serialize};

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaResult {
    pub name: String,
    pub passed: bool,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl QaResult {
    /// Passed exactly when no warnings were collected.
    pub fn from_warnings(name: impl Into<String>, warnings: Vec<String>) -> Self {
        Self {
            name: name.into(),
            passed: warnings.is_empty(),
            warnings,
        }
    }
}

/// All check outcomes of one run. An empty run passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaResults {
    pub overall_passed: bool,
    #[serde(default)]
    pub results: Vec<QaResult>,
}

impl QaResults {
    pub fn from_results(results: Vec<QaResult>) -> Self {
        Self {
            overall_passed: results.iter().all(|r| r.passed),
            results,
        }
    }

    pub fn result(&self, name: &str) -> Option<&QaResult> {
        self.results.iter().find(|r| r.name == name)
    }

    pub fn warning_count(&self) -> usize {
        self.results.iter().map(|r| r.warnings.len()).sum()
    }
}

impl Default for QaResults {
    fn default() -> Self {
        Self::from_results(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_is_conjunction() {
        let results = QaResults::from_results(vec![
            QaResult::from_warnings("a", vec![]),
            QaResult::from_warnings("b", vec!["w".into()]),
        ]);
        assert!(!results.overall_passed);
        assert!(results.result("a").unwrap().passed);
        assert_eq!(results.warning_count(), 1);
        assert!(QaResults::default().overall_passed);
    }
}
