//! Client error types.

use adresslabor_core::CoreError;

/// Errors that can occur when using the Adresslabor client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A requested product key is not on the allow-list. Raised before any
    /// request is sent.
    #[error("invalid product key \"{product}\"! allowed product keys are {allowed}.")]
    InvalidProduct {
        /// The offending token.
        product: String,
        /// The full comma-separated allow-list.
        allowed: String,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The response body is not a JSON object or lacks `credits`.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether this error came from the network or HTTP layer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidProduct { product, allowed } => {
                Self::InvalidProduct { product, allowed }
            }
            CoreError::Configuration(msg) => Self::Configuration(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_invalid_product_keeps_message() {
        let core = CoreError::invalid_product("xx");
        let expected = core.to_string();
        let err = ClientError::from(core);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_transport());
    }

    #[test]
    fn status_is_transport() {
        let err = ClientError::Status {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "HTTP status 502: Bad Gateway");
    }
}
