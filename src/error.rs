use thiserror::Error;

/// Failures surfaced by the credential, client and listing layers.
///
/// Nothing here is retried: the first error aborts the invocation and its
/// message is shown to the user verbatim.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    CredentialBackend(#[from] keyring::Error),

    #[error(transparent)]
    Prompt(#[from] std::io::Error),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    // The serde error is part of the message rather than a `source`, so
    // `{:#}` printing does not repeat it.
    #[error("error unmarshalling {what} response: {error}, with body: {body}")]
    Decode {
        what: &'static str,
        body: String,
        error: serde_json::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("mention name {0:?} cannot be used in a search query")]
    InvalidMention(String),
}

pub type Result<T> = std::result::Result<T, Error>;
