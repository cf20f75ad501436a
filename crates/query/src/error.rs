use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Catalog error: {0}")]
    Storage(#[from] cutsel_catalog::CatalogError),

    /// The completeness gate rejected the input set; no search was run.
    #[error("Incomplete input: {present} field(s) given, at least {required} required ({policy})")]
    IncompleteInput {
        present: usize,
        required: usize,
        policy: &'static str,
    },
}
