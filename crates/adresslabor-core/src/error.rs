//! Error types for the core crate.

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building a check request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A requested product key is not on the allow-list.
    #[error("invalid product key \"{product}\"! allowed product keys are {allowed}.")]
    InvalidProduct {
        /// The offending token, as given by the caller.
        product: String,
        /// The full comma-separated allow-list.
        allowed: String,
    },

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Build an `InvalidProduct` error for the given token.
    #[must_use]
    pub fn invalid_product(product: impl Into<String>) -> Self {
        Self::InvalidProduct {
            product: product.into(),
            allowed: crate::PRODUCT_KEYS.to_string(),
        }
    }
}
