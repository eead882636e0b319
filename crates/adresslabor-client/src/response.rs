//! Response shapes.
//!
//! Every response is a JSON object with a `credits` balance and one field per
//! requested product family. Product results are passed through untouched.

use std::fmt;

use adresslabor_core::ProductKey;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

/// Generic key-value representation of a response.
pub type ResponseMap = Map<String, Value>;

/// A representation the client decodes responses into.
///
/// Implemented for [`ResponseMap`] and [`CheckResponse`].
pub trait ResponseShape: DeserializeOwned + fmt::Debug + Send + Sync + 'static {
    /// The account's remaining credits, if present and numeric.
    fn credits(&self) -> Option<f64>;

    /// Borrow the result of a product.
    fn product(&self, key: ProductKey) -> Option<&Value>;

    /// Take the result of a product, consuming the response.
    fn into_product(self, key: ProductKey) -> Option<Value>;
}

impl ResponseShape for ResponseMap {
    fn credits(&self) -> Option<f64> {
        self.get("credits").and_then(Value::as_f64)
    }

    fn product(&self, key: ProductKey) -> Option<&Value> {
        self.get(key.as_str()).filter(|v| !v.is_null())
    }

    fn into_product(mut self, key: ProductKey) -> Option<Value> {
        self.remove(key.as_str()).filter(|v| !v.is_null())
    }
}

/// Typed representation of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// The account's remaining credits.
    pub credits: f64,
    /// Product results keyed by product family.
    #[serde(flatten)]
    pub products: Map<String, Value>,
}

impl ResponseShape for CheckResponse {
    fn credits(&self) -> Option<f64> {
        Some(self.credits)
    }

    fn product(&self, key: ProductKey) -> Option<&Value> {
        self.products.get(key.as_str()).filter(|v| !v.is_null())
    }

    fn into_product(mut self, key: ProductKey) -> Option<Value> {
        self.products.remove(key.as_str()).filter(|v| !v.is_null())
    }
}

/// Decode a response body into the requested shape.
pub(crate) fn parse_body<R: ResponseShape>(body: &str) -> Result<R, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"credits":4711,"sc":{"status":"ok","street":"Hauptstr."},"em":null}"#;

    #[test]
    fn map_shape_reads_credits_and_products() {
        let map: ResponseMap = parse_body(BODY).unwrap();
        assert_eq!(map.credits(), Some(4711.0));
        assert_eq!(map.product(ProductKey::Sc).unwrap()["status"], "ok");
        assert!(map.product(ProductKey::Em).is_none());
        assert!(map.product(ProductKey::Fk).is_none());
    }

    #[test]
    fn typed_shape_reads_credits_and_products() {
        let typed: CheckResponse = parse_body(BODY).unwrap();
        assert!((typed.credits - 4711.0).abs() < f64::EPSILON);
        assert!(!typed.products.contains_key("credits"));
        let sc = typed.into_product(ProductKey::Sc).unwrap();
        assert_eq!(sc["street"], "Hauptstr.");
    }

    #[test]
    fn parsing_is_idempotent() {
        let first: ResponseMap = parse_body(BODY).unwrap();
        let second: ResponseMap = parse_body(BODY).unwrap();
        assert_eq!(first, second);

        let first: CheckResponse = parse_body(BODY).unwrap();
        let second: CheckResponse = parse_body(BODY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn map_shape_tolerates_missing_credits() {
        let map: ResponseMap = parse_body(r#"{"sc":{}}"#).unwrap();
        assert_eq!(map.credits(), None);
    }

    #[test]
    fn typed_shape_requires_credits() {
        let err = parse_body::<CheckResponse>(r#"{"sc":{}}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn non_object_bodies_are_malformed() {
        assert!(matches!(
            parse_body::<ResponseMap>("[1,2,3]"),
            Err(ClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_body::<ResponseMap>("<html>"),
            Err(ClientError::MalformedResponse(_))
        ));
    }
}
