use thiserror::Error;

/// Enumerates high-level errors returned by this library.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Represents a provider name with no entry in the provider table.
    #[error("Unknown provider {name:?}")]
    UnknownProvider { name: String },

    /// Represents a resolver mode other than `direct` or `signed`.
    #[error("Unknown URL mode {mode:?}")]
    UnknownUrlMode { mode: String },

    /// Represents a base server address that is not an absolute URL.
    #[error("Invalid base URL {base:?}")]
    InvalidBaseUrl {
        base: String,
        source: url::ParseError,
    },

    /// Represents a request body that could not be read as submissions.
    #[error("Malformed submission: {source}")]
    MalformedSubmission { source: serde_json::Error },
}
