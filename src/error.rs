// src/error.rs

//! Unified error handling for the receipt processor.

use thiserror::Error;

/// Result type alias for receipt processor operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure to derive points from a receipt's raw fields.
///
/// The first field that fails to parse wins; no partial score is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// `purchaseDate` is not a real `YYYY-MM-DD` date
    #[error("invalid purchase date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// `purchaseTime` is not a 24-hour `HH:MM` time
    #[error("invalid purchase time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    /// `total` is not a money amount
    #[error("invalid total format: '{0}'")]
    InvalidTotalFormat(String),

    /// An item's `price` is not a money amount
    #[error("invalid price format for item {index}: '{price}'")]
    InvalidPriceFormat { index: usize, price: String },
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed required input field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Receipt fields could not be scored
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// No receipt is stored under the id
    #[error("No receipt found for id '{0}'")]
    NotFound(String),

    /// Receipt store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error for a receipt id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_error_converts_into_app_error() {
        let err: AppError = CalculationError::InvalidTotalFormat("abc".to_string()).into();
        assert!(matches!(
            err,
            AppError::Calculation(CalculationError::InvalidTotalFormat(_))
        ));
        assert_eq!(
            err.to_string(),
            "Calculation error: invalid total format: 'abc'"
        );
    }

    #[test]
    fn price_error_names_the_item() {
        let err = CalculationError::InvalidPriceFormat {
            index: 2,
            price: "1,00".to_string(),
        };
        assert_eq!(err.to_string(), "invalid price format for item 2: '1,00'");
    }
}
