use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The store could not be opened or read. Distinct from an empty
    /// result set, which is a normal outcome.
    #[error("Catalog storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    #[error("Unknown process type: '{0}'")]
    UnknownProcessType(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
