//! Pipeline
//!
//!     Runs the stages in order and stops at the first stage that fails:
//!
//!         lines → Lexer → Preparser → Parser → TreeBuilder → OntologyAssigner → QaRunner
//!
//!     Rust callers use [Pipeline] and get a `Result<_, PipelineError>` per stage. The free
//!     functions [lex], [preparse], [parse] and [build] run the default pipeline and wrap
//!     the outcome in a serializable report ([LexOutput], [BuildOutput], ...) where errors
//!     are flattened into [LineError]s.
//!
//!     A pipeline holds only immutable state, so a single instance can be shared across
//!     threads to process independent documents.

use std::sync::Arc;

use serde::Serialize;

use guide_config::{ErrorModeSetting, GuideConfig};

use crate::guide::ast::Tree;
use crate::guide::building::TreeBuilder;
use crate::guide::formats::{FormatError, FormatRegistry};
use crate::guide::ids::{DefaultIds, IdGenerator};
use crate::guide::lexing::{ErrorMode, LexError, Lexer};
use crate::guide::metadata::Metadata;
use crate::guide::ontology::{ContextType, OntologyAssigner, OntologyError, OntologyTable};
use crate::guide::parsing::{ParseError, Parser, SyntaxTree};
use crate::guide::preparsing::{ParsedLine, PreparseError, Preparser};
use crate::guide::qa::QaRunner;
use crate::guide::token::{Line, SourceLine, Token};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("lexing failed with {} error(s)", .0.len())]
    Lex(Vec<LexError>),

    #[error("preparsing failed with {} error(s)", .0.len())]
    Preparse(Vec<PreparseError>),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Ontology(#[from] OntologyError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PipelineError {
    /// Flatten into serializable line errors.
    pub fn line_errors(&self) -> Vec<LineError> {
        match self {
            PipelineError::Lex(errors) => errors
                .iter()
                .map(|e| LineError::at(e.line(), Stage::Lex, e.code(), e.message()))
                .collect(),
            PipelineError::Preparse(errors) => errors
                .iter()
                .map(|e| LineError::at(e.line(), Stage::Preparse, e.code(), e.message()))
                .collect(),
            PipelineError::Parse(error) => vec![match error.line() {
                Some(line) => LineError::at(line, Stage::Parse, error.code(), error.message()),
                None => LineError::document(Stage::Parse, error.code(), error.message()),
            }],
            PipelineError::Ontology(error) => vec![LineError::document(
                Stage::Build,
                error.code(),
                error.to_string(),
            )],
            PipelineError::Format(error) => {
                vec![LineError::document(Stage::Build, "FORMAT", error.to_string())]
            }
            PipelineError::Config(message) => {
                vec![LineError::document(Stage::Build, "CONFIG", message.clone())]
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Lex,
    Preparse,
    Parse,
    Build,
}

/// A stage error in wire form. Document-level errors use line 0 and empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineError {
    pub number: usize,
    pub text: String,
    pub stage: Stage,
    pub code: String,
    pub message: String,
}

impl LineError {
    fn at(line: &SourceLine, stage: Stage, code: &str, message: impl Into<String>) -> Self {
        Self {
            number: line.number,
            text: line.text.clone(),
            stage,
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn document(stage: Stage, code: &str, message: impl Into<String>) -> Self {
        Self::at(&SourceLine::new(0, ""), stage, code, message)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LexOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
    pub errors: Vec<LineError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreparseOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<ParsedLine>>,
    pub errors: Vec<LineError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<SyntaxTree>,
    pub errors: Vec<LineError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<Tree>,
    pub errors: Vec<LineError>,
}

fn split<T>(result: Result<T, PipelineError>) -> (bool, Option<T>, Vec<LineError>) {
    match result {
        Ok(value) => (true, Some(value), Vec::new()),
        Err(error) => (false, None, error.line_errors()),
    }
}

/// Settings a [Pipeline] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub error_mode: ErrorMode,
    /// Context used when the document metadata does not name one.
    pub default_context: ContextType,
    /// QA check names, see [QaRunner::from_names].
    pub qa_checks: Vec<String>,
    /// Output format name, see [FormatRegistry].
    pub format: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Accumulate,
            default_context: ContextType::None,
            qa_checks: crate::guide::qa::BUILTIN_CHECKS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            format: "json".to_string(),
        }
    }
}

impl TryFrom<&GuideConfig> for PipelineOptions {
    type Error = PipelineError;

    fn try_from(config: &GuideConfig) -> Result<Self, Self::Error> {
        let error_mode = match config.lexing.error_mode {
            ErrorModeSetting::Accumulate => ErrorMode::Accumulate,
            ErrorModeSetting::FailFast => ErrorMode::FailFast,
        };
        let default_context = config
            .building
            .default_context
            .parse::<ContextType>()
            .map_err(|err| PipelineError::Config(err.to_string()))?;
        Ok(Self {
            error_mode,
            default_context,
            qa_checks: config.qa.checks.clone(),
            format: config.output.format.clone(),
        })
    }
}

pub struct Pipeline {
    lexer: Lexer,
    preparser: Preparser,
    parser: Parser,
    ids: Arc<dyn IdGenerator>,
    ontology: &'static OntologyTable,
    qa: QaRunner,
    formats: FormatRegistry,
    default_context: ContextType,
    format: String,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            lexer: Lexer::new(),
            preparser: Preparser::new(),
            parser: Parser::new(),
            ids: Arc::new(DefaultIds),
            ontology: OntologyTable::standard(),
            qa: QaRunner::with_defaults(),
            formats: FormatRegistry::with_defaults(),
            default_context: ContextType::None,
            format: "json".to_string(),
        }
    }

    pub fn with_options(options: PipelineOptions) -> Result<Self, PipelineError> {
        let qa = QaRunner::from_names(&options.qa_checks)
            .map_err(|err| PipelineError::Config(err.to_string()))?;
        let formats = FormatRegistry::with_defaults();
        formats
            .resolve(&options.format)
            .map_err(|err| PipelineError::Config(err.to_string()))?;
        Ok(Self {
            lexer: Lexer::new().with_error_mode(options.error_mode),
            preparser: Preparser::new().with_error_mode(options.error_mode),
            qa,
            formats,
            default_context: options.default_context,
            format: options.format,
            ..Self::new()
        })
    }

    pub fn from_config(config: &GuideConfig) -> Result<Self, PipelineError> {
        Self::with_options(PipelineOptions::try_from(config)?)
    }

    /// Pipeline configured from the embedded default configuration.
    pub fn from_default_config() -> Result<Self, PipelineError> {
        let config =
            guide_config::load_defaults().map_err(|err| PipelineError::Config(err.to_string()))?;
        Self::from_config(&config)
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_ontology(mut self, table: &'static OntologyTable) -> Self {
        self.ontology = table;
        self
    }

    pub fn with_qa(mut self, qa: QaRunner) -> Self {
        self.qa = qa;
        self
    }

    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.lexer.error_mode()
    }

    pub fn default_context(&self) -> ContextType {
        self.default_context
    }

    pub fn lex_lines(&self, lines: &[Line]) -> Result<Vec<Token>, PipelineError> {
        self.lexer.lex(lines).into_result().map_err(|errors| {
            tracing::warn!(errors = errors.len(), "lexing failed");
            PipelineError::Lex(errors)
        })
    }

    pub fn preparse_lines(&self, lines: &[Line]) -> Result<Vec<ParsedLine>, PipelineError> {
        let tokens = self.lex_lines(lines)?;
        self.preparser.parse(&tokens).into_result().map_err(|errors| {
            tracing::warn!(errors = errors.len(), "preparsing failed");
            PipelineError::Preparse(errors)
        })
    }

    pub fn parse_lines(
        &self,
        lines: &[Line],
        metadata: Metadata,
    ) -> Result<SyntaxTree, PipelineError> {
        let parsed = self.preparse_lines(lines)?;
        let ast = self.parser.parse(&parsed, metadata).map_err(|error| {
            tracing::warn!(%error, "parsing failed");
            PipelineError::Parse(error)
        })?;
        tracing::debug!(nodes = ast.len(), "parsed syntax tree");
        Ok(ast)
    }

    pub fn build_lines(&self, lines: &[Line], metadata: Metadata) -> Result<Tree, PipelineError> {
        let ast = self.parse_lines(lines, metadata.clone())?;
        Ok(self.build_syntax_tree(&ast, metadata)?)
    }

    /// Compile a whole document.
    pub fn compile(&self, source: &str, metadata: Metadata) -> Result<Tree, PipelineError> {
        self.build_lines(&Line::from_source(source), metadata)
    }

    /// Build the domain tree, type it when a context applies, then run QA.
    ///
    /// The metadata context wins over the pipeline default. An ontology miss aborts
    /// the build; QA failures only show up in the root's report.
    pub fn build_syntax_tree(
        &self,
        ast: &SyntaxTree,
        mut metadata: Metadata,
    ) -> Result<Tree, OntologyError> {
        if metadata.context_type.is_none() {
            metadata.context_type = self.default_context;
        }
        let context = metadata.context_type;
        let mut tree = TreeBuilder::new(self.ids.as_ref()).build(ast, metadata);
        if !context.is_none() {
            OntologyAssigner::new(self.ontology).assign(&mut tree, context)?;
        }
        self.qa.run_and_update(&mut tree);
        tracing::debug!(
            tags = tree.tag_count(),
            depth = tree.max_depth(),
            qa_passed = tree.root.qa_results.overall_passed,
            "built tree"
        );
        Ok(tree)
    }

    /// Serialize with the configured output format.
    pub fn render(&self, tree: &Tree) -> Result<String, PipelineError> {
        Ok(self.formats.serialize(tree, &self.format)?)
    }

    pub fn lex(&self, lines: &[Line]) -> LexOutput {
        let (success, tokens, errors) = split(self.lex_lines(lines));
        LexOutput {
            success,
            tokens,
            errors,
        }
    }

    pub fn preparse(&self, lines: &[Line]) -> PreparseOutput {
        let (success, tokens, errors) = split(self.preparse_lines(lines));
        PreparseOutput {
            success,
            tokens,
            errors,
        }
    }

    pub fn parse(&self, lines: &[Line], metadata: Metadata) -> ParseOutput {
        let (success, ast, errors) = split(self.parse_lines(lines, metadata));
        ParseOutput {
            success,
            ast,
            errors,
        }
    }

    pub fn build(&self, lines: &[Line], metadata: Metadata) -> BuildOutput {
        let (success, tree, errors) = split(self.build_lines(lines, metadata));
        BuildOutput {
            success,
            tree,
            errors,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("error_mode", &self.error_mode())
            .field("qa", &self.qa)
            .field("default_context", &self.default_context)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

fn numbered<S: AsRef<str>>(lines: &[S]) -> Vec<Line> {
    Line::numbered(lines.iter().map(|line| line.as_ref().to_string()))
}

pub fn lex<S: AsRef<str>>(lines: &[S]) -> LexOutput {
    Pipeline::new().lex(&numbered(lines))
}

pub fn preparse<S: AsRef<str>>(lines: &[S]) -> PreparseOutput {
    Pipeline::new().preparse(&numbered(lines))
}

pub fn parse<S: AsRef<str>>(lines: &[S], metadata: Metadata) -> ParseOutput {
    Pipeline::new().parse(&numbered(lines), metadata)
}

pub fn build<S: AsRef<str>>(lines: &[S], metadata: Metadata) -> BuildOutput {
    Pipeline::new().build(&numbered(lines), metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::ids::SequentialIds;
    use crate::guide::ontology::TagType;

    const GUIDE: [&str; 6] = [
        "Biology Guide",
        "Science: Biology: Cells",
        "1. What is a cell? - Unit of life",
        "Learn More: Cells are the basic unit.",
        "",
        "2. What is DNA? - Genetic material",
    ];

    #[test]
    fn build_without_context_fails_qa_only() {
        let output = build(&GUIDE, Metadata::new("study_guide"));
        assert!(output.success);
        assert!(output.errors.is_empty());
        let tree = output.tree.unwrap();
        assert_eq!(tree.root.title, "Biology Guide");
        assert!(!tree.root.qa_results.overall_passed);
        assert_eq!(tree.root.qa_results.warning_count(), 6);
    }

    #[test]
    fn default_context_applies_when_metadata_has_none() {
        let options = PipelineOptions {
            default_context: ContextType::APExams,
            ..PipelineOptions::default()
        };
        let pipeline = Pipeline::with_options(options)
            .unwrap()
            .with_ids(Arc::new(SequentialIds::new()));
        let tree = pipeline
            .build_lines(&Line::numbered(GUIDE), Metadata::default())
            .unwrap();
        assert_eq!(tree.metadata.context_type, ContextType::APExams);
        let cells = tree.find_path(&["Science", "Biology", "Cells"]).unwrap();
        assert_eq!(cells.tag_type, TagType::Topic);
        assert!(tree.root.qa_results.overall_passed);
    }

    #[test]
    fn lexer_errors_are_reported_per_line() {
        let output = lex(&["Guide", "A: B: C", "1. no delimiter", "2. also none"]);
        assert!(!output.success);
        assert!(output.tokens.is_none());
        let numbers: Vec<_> = output.errors.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![3, 4]);
        assert_eq!(output.errors[0].stage, Stage::Lex);
        assert_eq!(output.errors[0].code, "MISSING_ANSWER_DELIMITER");
    }

    #[test]
    fn empty_input_is_a_document_error() {
        let output = build::<&str>(&[], Metadata::default());
        assert!(!output.success);
        assert!(output.tree.is_none());
        assert_eq!(
            output.errors,
            vec![LineError {
                number: 0,
                text: String::new(),
                stage: Stage::Parse,
                code: "VALIDATION".into(),
                message: "no lines to parse".into(),
            }]
        );
    }

    #[test]
    fn ontology_miss_aborts_build() {
        let output = build(&GUIDE, Metadata::default().with_context(ContextType::Colleges));
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "ONTOLOGY_NOT_FOUND");
        assert_eq!(
            output.errors[0].message,
            "no ontology found for context type 'Colleges' with depth 3"
        );
    }

    #[test]
    fn invalid_options_are_config_errors() {
        let bad_check = PipelineOptions {
            qa_checks: vec!["spelling".into()],
            ..PipelineOptions::default()
        };
        assert!(matches!(
            Pipeline::with_options(bad_check),
            Err(PipelineError::Config(_))
        ));
        let bad_format = PipelineOptions {
            format: "xml".into(),
            ..PipelineOptions::default()
        };
        let err = Pipeline::with_options(bad_format).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: unknown output format 'xml', available: \
             json (Pretty-printed JSON), treeviz (One line per node with icons and indentation), \
             yaml (YAML document)"
        );
    }

    #[test]
    fn output_serializes_without_missing_value() {
        let output = lex(&["", "x"]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("tokens").is_none());
        assert_eq!(json["errors"][0]["stage"], "lex");
        assert_eq!(json["errors"][0]["code"], "MISSING_FILE_HEADER");
    }

    #[test]
    fn pipeline_is_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();

        let pipeline = Arc::new(Pipeline::new());
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let pipeline = Arc::clone(&pipeline);
                std::thread::spawn(move || {
                    let source = format!("Guide {n}\nA: B: Topic {n}\n1. Q? - A");
                    pipeline
                        .compile(&source, Metadata::default())
                        .map(|tree| tree.root.title)
                })
            })
            .collect();
        let mut titles: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["Guide 0", "Guide 1", "Guide 2", "Guide 3"]);
    }
}
