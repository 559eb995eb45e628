use thiserror::Error;

/// Errors raised by grid construction, board editing and searches.
///
/// Not finding a path is not an error: searches report it through
/// [Outcome::found](crate::solver::Outcome::found).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("search interrupted by progress sink")]
    Interrupted,
}

impl SearchError {
    pub(crate) fn config(msg: impl Into<String>) -> SearchError {
        SearchError::InvalidConfiguration(msg.into())
    }
}
