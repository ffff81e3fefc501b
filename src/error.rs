use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while turning data files into a rendered exclusion plot.
///
/// Every variant aborts the current plot; nothing is retried or partially drawn.
#[derive(Debug, Error)]
pub enum ExclusionError {
    /// Empty sample set, mismatched discovery lists, and similar caller mistakes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A row that is not two numeric columns, or a non-finite sample.
    #[error("{location}: {message}")]
    Format { location: String, message: String },

    #[error("cannot read {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ExclusionError>;

impl ExclusionError {
    pub fn format(location: impl Into<String>, message: impl Into<String>) -> Self {
        ExclusionError::Format {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Wrap a plotting backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        ExclusionError::Render(err.to_string())
    }
}
