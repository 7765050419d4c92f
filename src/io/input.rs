use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Document;

/// Errors raised while loading source documents.
///
/// `Missing` is the one condition the pipeline distinguishes: it is checked
/// eagerly, before any model call, so an absent input never costs a model
/// invocation.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing input file: {0}")]
    Missing(PathBuf),

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from PDF {path}")]
    PdfExtract {
        path: PathBuf,
        #[source]
        source: pdf_extract::OutputError,
    },
}

/// Load a text document and apply the character budget.
pub fn read_document(path: &Path, max_chars: usize) -> Result<Document, InputError> {
    if !path.exists() {
        return Err(InputError::Missing(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Document::new(content).truncate_to(max_chars))
}

/// Load a PDF, extract its text, and apply the character budget.
pub fn read_pdf_document(path: &Path, max_chars: usize) -> Result<Document, InputError> {
    if !path.exists() {
        return Err(InputError::Missing(path.to_path_buf()));
    }

    let text = pdf_extract::extract_text(path).map_err(|source| InputError::PdfExtract {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Document::new(text.trim()).truncate_to(max_chars))
}
