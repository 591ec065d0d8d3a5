use thiserror::Error;

/// The two ways cleaning a paste can fail. Both are non-fatal: the caller
/// clears its input field and tells the user, identically for either.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("no URL found in the text")]
    NotFound,
    #[error("matched text is not a valid absolute URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
