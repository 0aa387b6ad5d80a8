use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StorefrontError {
    #[error("catalog has no products")]
    EmptyCatalog,
    #[error("catalog source failed: {0}")]
    CatalogUnavailable(String),
    #[error("{0}")]
    Validation(String),
    #[error("order rejected: {0}")]
    OrderRejected(String),
    #[error("{0}")]
    Internal(String),
}
