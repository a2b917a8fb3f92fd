//! Error handling for the questionnaire mapper.
//!
//! Missing answers are never errors: every builder resolves them to omitted
//! output. The only failure the engine can surface is an input document that
//! violates the answer contract, caught once at the untyped entry point.

/// Specialized error type for mapping operations
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// Input did not match the questionnaire answer contract
    #[error("invalid questionnaire input in {stage}: {message}")]
    InvalidInput {
        /// Mapping stage that rejected the input
        stage: &'static str,
        /// Original message from the failed decode
        message: String,
    },
}

/// Result type for mapper operations
pub type Result<T> = std::result::Result<T, MapperError>;
