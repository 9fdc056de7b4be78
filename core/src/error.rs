use thiserror::Error;

pub type Result<T, E = SearchError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Malformed or missing required input. Raised where it is detected and never retried.
    #[error("invalid argument `{arg}`: {msg}")]
    InvalidArgument { arg: &'static str, msg: String },

    #[error("no indexable records were read from the data source")]
    EmptyIndex,

    #[error("query set is empty")]
    EmptyQuerySet,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    pub(crate) fn invalid_argument<S: Into<String>>(arg: &'static str, msg: S) -> Self {
        Self::InvalidArgument { arg, msg: msg.into() }
    }

    /// True for every error in the invalid-argument family, including the empty-input conditions.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::EmptyIndex | Self::EmptyQuerySet)
    }
}
