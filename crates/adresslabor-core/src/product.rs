//! Product keys accepted by the check endpoint.
//!
//! Every request names one or more products in its `product` field. The
//! endpoint bills per product, so unknown keys are rejected locally before
//! anything is sent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The allow-list of product keys, in the order the API documents them.
pub const PRODUCT_KEYS: &str = "sc,scx,sc_int,fk,nc,em,emx,pb,pbt,vatid,vatidx";

/// A check product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProductKey {
    /// Address check DACH.
    Sc,
    /// Address check DACH, extended.
    Scx,
    /// Address check world.
    ScInt,
    /// Fake check (identity plausibility).
    Fk,
    /// Name check B2C.
    Nc,
    /// Email check.
    Em,
    /// Email check, extended.
    Emx,
    /// Telephone directory.
    Pb,
    /// Telephone directory, pay per hit.
    Pbt,
    /// VAT number check.
    Vatid,
    /// VAT number check, extended.
    Vatidx,
}

impl ProductKey {
    /// All product keys, in allow-list order.
    pub const ALL: [Self; 11] = [
        Self::Sc,
        Self::Scx,
        Self::ScInt,
        Self::Fk,
        Self::Nc,
        Self::Em,
        Self::Emx,
        Self::Pb,
        Self::Pbt,
        Self::Vatid,
        Self::Vatidx,
    ];

    /// The wire name of this product.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sc => "sc",
            Self::Scx => "scx",
            Self::ScInt => "sc_int",
            Self::Fk => "fk",
            Self::Nc => "nc",
            Self::Em => "em",
            Self::Emx => "emx",
            Self::Pb => "pb",
            Self::Pbt => "pbt",
            Self::Vatid => "vatid",
            Self::Vatidx => "vatidx",
        }
    }

    /// The base product of this key's family.
    ///
    /// Extended and pay-per-hit variants map onto their standard product;
    /// every other key is its own family.
    #[must_use]
    pub const fn family(self) -> Self {
        match self {
            Self::Scx => Self::Sc,
            Self::Emx => Self::Em,
            Self::Pbt => Self::Pb,
            Self::Vatidx => Self::Vatid,
            other => other,
        }
    }

    /// Whether this key is a variant of another product.
    #[must_use]
    pub const fn is_variant(self) -> bool {
        matches!(self, Self::Scx | Self::Emx | Self::Pbt | Self::Vatidx)
    }
}

impl FromStr for ProductKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == lower)
            .ok_or_else(|| CoreError::invalid_product(s))
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ProductKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductKey> for String {
    fn from(key: ProductKey) -> Self {
        key.as_str().to_string()
    }
}

/// Parse a comma-separated product selection such as `"sc,em"`.
///
/// Tokens are matched case-insensitively and are not trimmed. The first
/// unknown token fails the whole selection.
///
/// # Errors
///
/// Returns `CoreError::InvalidProduct` naming the first unknown token.
pub fn parse_product_list(products: &str) -> Result<Vec<ProductKey>, CoreError> {
    products.split(',').map(str::parse).collect()
}
