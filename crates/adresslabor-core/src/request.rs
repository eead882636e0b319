//! Check request payloads.

use crate::credentials::Credentials;
use crate::error::CoreError;
use crate::product::{parse_product_list, ProductKey};

/// Form fields reserved for credentials.
const CREDENTIAL_FIELDS: [&str; 2] = ["apicid", "apikey"];

/// The form payload of a single check.
///
/// Always carries a `product` selection. Product-specific fields are kept in
/// insertion order; absent optional fields are recorded as `None` and left
/// out of the encoded form, while empty strings are sent as empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    product: String,
    fields: Vec<(String, Option<String>)>,
}

impl CheckRequest {
    /// Create a request for a raw product selection such as `"sc,em"`.
    ///
    /// The selection is validated when the request is sent, not here.
    #[must_use]
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            fields: Vec::new(),
        }
    }

    /// Create a request for a single product.
    #[must_use]
    pub fn for_product(product: ProductKey) -> Self {
        Self::new(product.as_str())
    }

    /// Create a request combining several products.
    #[must_use]
    pub fn for_products(products: &[ProductKey]) -> Self {
        let joined: Vec<&str> = products.iter().map(|p| p.as_str()).collect();
        Self::new(joined.join(","))
    }

    /// Add a required field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), Some(value.into()));
        self
    }

    /// Add an optional field. `None` is recorded but not sent.
    #[must_use]
    pub fn optional_field<V: Into<String>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.set(name.into(), value.map(Into::into));
        self
    }

    fn set(&mut self, name: String, value: Option<String>) {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// The raw product selection.
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// All product-specific fields, including absent ones.
    #[must_use]
    pub fn fields(&self) -> &[(String, Option<String>)] {
        &self.fields
    }

    /// Look up a field. The outer `Option` tells whether the field was
    /// recorded at all, the inner one whether it has a value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    /// Validate the product selection against the allow-list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidProduct` naming the first unknown token.
    pub fn products(&self) -> Result<Vec<ProductKey>, CoreError> {
        parse_product_list(&self.product)
    }

    /// The encoded form pairs: `product`, every present field, then the
    /// credentials. Credentials override same-named fields.
    #[must_use]
    pub fn form_pairs<'a>(&'a self, credentials: &'a Credentials) -> Vec<(&'a str, &'a str)> {
        let mut pairs = Vec::with_capacity(self.fields.len() + 3);
        pairs.push(("product", self.product.as_str()));
        pairs.extend(
            self.fields
                .iter()
                .filter(|(name, _)| name != "product" && !CREDENTIAL_FIELDS.contains(&name.as_str()))
                .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v))),
        );
        pairs.extend(credentials.form_fields());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_none_is_recorded_but_not_sent() {
        let req = CheckRequest::for_product(ProductKey::Sc)
            .field("street", "Main St")
            .optional_field::<String>("country", None);
        assert_eq!(req.get("country"), Some(None));
        assert_eq!(req.get("missing"), None);

        let creds = Credentials::new("cid", "key");
        let pairs = req.form_pairs(&creds);
        assert_eq!(
            pairs,
            vec![
                ("product", "sc"),
                ("street", "Main St"),
                ("apicid", "cid"),
                ("apikey", "key"),
            ]
        );
    }

    #[test]
    fn empty_string_is_sent() {
        let req = CheckRequest::for_product(ProductKey::Vatid).field("vatin", "");
        let creds = Credentials::new("cid", "key");
        assert!(req.form_pairs(&creds).contains(&("vatin", "")));
    }

    #[test]
    fn credentials_override_caller_fields() {
        let req = CheckRequest::new("em")
            .field("apikey", "forged")
            .field("email", "a@b.de");
        let creds = Credentials::new("cid", "real");
        let pairs = req.form_pairs(&creds);
        assert!(!pairs.contains(&("apikey", "forged")));
        assert!(pairs.contains(&("apikey", "real")));
    }

    #[test]
    fn setting_a_field_twice_replaces_it() {
        let req = CheckRequest::new("nc")
            .field("title", "Dr.")
            .optional_field::<&str>("title", None);
        assert_eq!(req.fields().len(), 1);
        assert_eq!(req.get("title"), Some(None));
    }

    #[test]
    fn for_products_joins_with_commas() {
        let req = CheckRequest::for_products(&[ProductKey::Sc, ProductKey::Em]);
        assert_eq!(req.product(), "sc,em");
        assert_eq!(req.products().unwrap(), vec![ProductKey::Sc, ProductKey::Em]);
    }

    #[test]
    fn products_rejects_unknown_selection() {
        let req = CheckRequest::new("sc,xyz");
        assert_eq!(req.products().unwrap_err(), CoreError::invalid_product("xyz"));
    }
}
