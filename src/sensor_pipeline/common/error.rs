use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Malformed sample on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Unknown sensor kind: {0}")]
    UnknownSensorKind(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to encode report: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
