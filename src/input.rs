//! Turns files named on the command line into resumes.
//!
//! Text extraction from PDF or DOCX belongs to an upstream tool; this boundary only accepts
//! plain text (extracted on the fly) or JSON holding an already-parsed resume.

use crate::config::{JSON_EXTENSION, MAX_RESUMES, MIN_RESUMES, TEXT_EXTENSIONS};
use crate::error::{InputError, MergeError};
use crate::extract::ResumeExtractor;
use crate::models::ParsedResume;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    ParsedJson,
}

/// Classifies a path by extension (case-insensitive).
pub fn input_kind(path: &Path) -> Result<InputKind, InputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Ok(InputKind::Text)
    } else if ext == JSON_EXTENSION {
        Ok(InputKind::ParsedJson)
    } else {
        Err(InputError::Unsupported {
            path: path.to_path_buf(),
        })
    }
}

/// Reads the text of a plain-text document.
pub fn load_document(path: &Path) -> Result<String, InputError> {
    match input_kind(path)? {
        InputKind::Text => read(path),
        InputKind::ParsedJson => Err(InputError::Unsupported {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads one resume, extracting text documents and deserializing JSON ones.
pub fn load_resume(path: &Path, extractor: &ResumeExtractor) -> Result<ParsedResume, InputError> {
    let resume = match input_kind(path)? {
        InputKind::Text => extractor.extract(&read(path)?),
        InputKind::ParsedJson => {
            let raw = read(path)?;
            serde_json::from_str(&raw).map_err(|source| InputError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
    };
    debug!(path = %path.display(), "Loaded resume");
    Ok(resume)
}

/// Enforces the 2..=5 window for one batch of documents handed to `parse`.
pub fn check_upload_count(count: usize) -> anyhow::Result<()> {
    check_merge_count(count)?;
    if count > MAX_RESUMES {
        return Err(InputError::TooManyResumes {
            count,
            max: MAX_RESUMES,
        }
        .into());
    }
    Ok(())
}

/// A merge request has no upper bound, only the minimum the merger itself needs.
pub fn check_merge_count(count: usize) -> Result<(), MergeError> {
    if count < MIN_RESUMES {
        return Err(MergeError::TooFewResumes {
            count,
            min: MIN_RESUMES,
        });
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
