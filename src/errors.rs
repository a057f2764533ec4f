use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(String, String),

    #[error("Failed to write output {0}: {1}")]
    OutputWriteError(String, String),

    #[error("Invalid pattern: {0}")]
    PatternError(String),

    #[error("Tokenizer Error: {0}")]
    TokenizerError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Export produced no output: {0}")]
    EmptyExport(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

impl From<glob::PatternError> for ExportError {
    fn from(err: glob::PatternError) -> Self {
        ExportError::PatternError(err.to_string())
    }
}
