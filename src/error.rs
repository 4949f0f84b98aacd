use thiserror::Error;

/// Errors produced by catalog operations and CSV ingest.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A song referenced an album that was never registered.
    #[error("invalid album name: '{album}' is not registered")]
    InvalidReference { album: String },

    /// A query needed at least one album and the catalog had none.
    #[error("catalog has no albums")]
    EmptyCatalog,

    /// A CSV input could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
