use std::path::PathBuf;
use std::process::ExitStatus;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Failed to write engine input file: {path}")]
    EncodeIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start engine: {program}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Engine {program} failed ({status})")]
    ExitStatus { program: String, status: ExitStatus },

    #[error("Failed to remove stale engine output file: {path}")]
    OutputClear {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read engine output file: {path}")]
    OutputRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
