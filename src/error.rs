use std::path::PathBuf;
use thiserror::Error;

/// Failures of the merge orchestrator.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("at least {min} resumes are required to merge, got {count}")]
    TooFewResumes { count: usize, min: usize },
}

/// Failures while turning input files into resumes, at the command-line boundary.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("unsupported document type: {} (supply extracted text or a parsed JSON resume)", path.display())]
    Unsupported { path: PathBuf },

    #[error("at most {max} resumes can be uploaded at once, got {count}")]
    TooManyResumes { count: usize, max: usize },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
