//! Internal error type for the analysis pipeline.
//!
//! None of these escape [`crate::analyze`]: the dispatcher turns every
//! variant into a finding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("language {requested:?} is not supported (choose one of: {supported})")]
    UnsupportedLanguage { requested: String, supported: String },
    #[error("grammar for {0} could not be loaded: {1}")]
    Grammar(&'static str, #[source] tree_sitter::LanguageError),
    #[error("parser produced no tree for {0} source")]
    NoTree(&'static str),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
