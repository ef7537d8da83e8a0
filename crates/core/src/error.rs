//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures.
/// Infrastructure concerns (file IO, snapshot parsing) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A strict quantity lookup named an item that is not in stock.
    #[error("item not in stock: {0}")]
    NotFound(String),
}

impl StockError {
    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_missing_item() {
        let err = StockError::not_found("apple");
        assert_eq!(err.to_string(), "item not in stock: apple");
    }
}


