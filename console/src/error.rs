use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde Json Error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
