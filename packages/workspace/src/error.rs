use folio_editor::{EditorError, MutationError};
use folio_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("Invalid mutation: {0}")]
    Mutation(#[from] MutationError),

    #[error("No builder session open for portfolio {0}")]
    SessionNotOpen(u64),
}

impl BuilderError {
    pub fn is_not_found(&self) -> bool {
        match self {
            BuilderError::Store(e) => e.is_not_found(),
            BuilderError::Editor(e) => e.is_not_found(),
            BuilderError::SessionNotOpen(_) => true,
            BuilderError::Mutation(_) => false,
        }
    }
}
