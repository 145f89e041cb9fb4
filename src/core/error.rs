use thiserror::Error;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("the URL \"{0}\" does not appear to be a valid GitHub URL")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metadata query failed: {0}")]
    Query(String),

    #[error("Malformed metadata response: {0}")]
    MalformedResponse(String),

    #[error("No usable release or tag found for {0}")]
    NoReleaseFound(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The scaffolder exited with a non-zero status code.
    /// The exit code should be propagated to the shell.
    #[error("Command exited with code {0}")]
    SubprocessExit(i32),
}
