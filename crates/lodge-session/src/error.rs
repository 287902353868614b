use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store error: {0}")]
    StoreError(String),
}
