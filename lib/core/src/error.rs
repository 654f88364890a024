use thiserror::Error;

use crate::document::ProductId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The product has no stored TF-IDF vector: either no sync has run
    /// yet, or the product was added to the catalog after the last pass.
    #[error("no vector for product {0}: run a catalog sync first")]
    VectorNotFound(ProductId),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
