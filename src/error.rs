use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("font error: {0}")]
    Font(String),

    /// The conversation log holds no assistant message to render.
    #[error("conversation has no letter to render")]
    NoLetter,

    /// A required text input was empty or whitespace only.
    #[error("missing input: {0} must not be empty")]
    MissingInput(&'static str),
}
