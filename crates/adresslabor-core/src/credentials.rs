//! API credentials.

use std::fmt;

use crate::error::CoreError;

/// Environment variable holding the API client id.
pub const ENV_API_CID: &str = "ADRESSLABOR_API_CID";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ADRESSLABOR_API_KEY";

/// The `apicid`/`apikey` pair appended to every request.
///
/// Both values can be found on the account page of the Adresslabor portal.
/// The key is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_cid: String,
    api_key: String,
}

impl Credentials {
    /// Create credentials from a client id and API key.
    #[must_use]
    pub fn new(api_cid: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_cid: api_cid.into(),
            api_key: api_key.into(),
        }
    }

    /// Load credentials from `ADRESSLABOR_API_CID` and `ADRESSLABOR_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if either variable is unset or empty.
    pub fn from_env() -> Result<Self, CoreError> {
        Ok(Self::new(require_env(ENV_API_CID)?, require_env(ENV_API_KEY)?))
    }

    /// The client id, sent as `apicid`.
    #[must_use]
    pub fn api_cid(&self) -> &str {
        &self.api_cid
    }

    /// The API key, sent as `apikey`.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The form fields carrying these credentials.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("apicid", &self.api_cid), ("apikey", &self.api_key)]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_cid", &self.api_cid)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn require_env(name: &str) -> Result<String, CoreError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(CoreError::Configuration(format!("{name} is not set"))),
    }
}
