//! Generation error types

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the generator
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can abort a single generation request
///
/// None of these are fatal to the host process. The ones reported by
/// [`GenError::is_warning`] are expected user-facing outcomes; the rest
/// indicate an environment problem (I/O, template rendering).
#[derive(Debug, Error)]
pub enum GenError {
    /// Model name or field spec was empty
    #[error("{0} is empty")]
    EmptyInput(&'static str),

    /// DDL text contained no `CREATE TABLE` statement
    #[error("cannot get model name: no CREATE TABLE statement found")]
    NoTableNameFound,

    /// Converter selection contained more than one struct
    #[error("struct already defined: {first} (found second struct {second})")]
    MultipleStructDefinitions {
        /// First struct name encountered
        first: String,
        /// Struct name that triggered the failure
        second: String,
    },

    /// Converter selection contained no struct at all
    #[error("no `pub struct` definition found in selection")]
    NoStructDefinition,

    /// Target file already exists and was left untouched
    #[error("file already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// Template rendering error
    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Whether this error is an expected outcome that should be shown as a
    /// warning rather than a failure
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput(_)
                | Self::NoTableNameFound
                | Self::MultipleStructDefinitions { .. }
                | Self::NoStructDefinition
                | Self::DestinationExists(_)
        )
    }
}
