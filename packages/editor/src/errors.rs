//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Store error: {0}")]
    Store(#[from] folio_store::StoreError),
}

impl EditorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EditorError::Store(e) if e.is_not_found())
    }
}
