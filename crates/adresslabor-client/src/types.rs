//! Input types for the check methods that take more than a handful of fields.

use adresslabor_core::{CheckRequest, ProductKey};
use serde::{Deserialize, Serialize};

/// International address for the world address check (`sc_int`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldAddress {
    /// Street name.
    pub street: String,
    /// House number (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hno: Option<String>,
    /// Postal code.
    pub zip: String,
    /// City.
    pub city: String,
    /// Country code.
    pub country: String,
    /// State or province.
    pub state: String,
    /// Postal code add-on (e.g. ZIP+4).
    pub zip_add_on: String,
    /// Locality within the city.
    pub location: String,
    /// Housing estate.
    pub house_estate: String,
    /// Sub-building name (flat, floor).
    pub sub_building_name: String,
    /// Organisation at this address.
    pub organisation: String,
}

impl WorldAddress {
    pub(crate) fn into_request(self) -> CheckRequest {
        CheckRequest::for_product(ProductKey::ScInt)
            .field("street", self.street)
            .optional_field("hno", self.hno)
            .field("zip", self.zip)
            .field("city", self.city)
            .field("country", self.country)
            .field("state", self.state)
            .field("zip_add_on", self.zip_add_on)
            .field("location", self.location)
            .field("house_estate", self.house_estate)
            .field("sub_building_name", self.sub_building_name)
            .field("organisation", self.organisation)
    }
}

/// Identity for the fake check (`fk`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FakeCheckQuery {
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Street (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// House number (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hno: Option<String>,
    /// Postal code (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// City (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country code (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl FakeCheckQuery {
    /// A query with only the required name fields.
    #[must_use]
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_request(self) -> CheckRequest {
        CheckRequest::for_product(ProductKey::Fk)
            .field("firstname", self.firstname)
            .field("lastname", self.lastname)
            .optional_field("street", self.street)
            .optional_field("hno", self.hno)
            .optional_field("zip", self.zip)
            .optional_field("city", self.city)
            .optional_field("country", self.country)
    }
}

/// Person for the B2C name check (`nc`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameCheckQuery {
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Salutation, e.g. "Herr" (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    /// Academic title (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl NameCheckQuery {
    /// A query with only the required name fields.
    #[must_use]
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_request(self) -> CheckRequest {
        CheckRequest::for_product(ProductKey::Nc)
            .optional_field("salutation", self.salutation)
            .optional_field("title", self.title)
            .field("firstname", self.firstname)
            .field("lastname", self.lastname)
    }
}

/// Entry to look up in the telephone directory (`pb` / `pbt`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelephoneDirectoryQuery {
    /// Academic title (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Street.
    pub street: String,
    /// House number (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hno: Option<String>,
    /// Postal code.
    pub zip: String,
    /// City.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Phone number.
    pub phone: String,
}

impl TelephoneDirectoryQuery {
    pub(crate) fn into_request(self, pay_per_hit: bool) -> CheckRequest {
        let product = if pay_per_hit {
            ProductKey::Pbt
        } else {
            ProductKey::Pb
        };

        CheckRequest::for_product(product)
            .optional_field("title", self.title)
            .field("firstname", self.firstname)
            .field("lastname", self.lastname)
            .field("street", self.street)
            .optional_field("hno", self.hno)
            .field("zip", self.zip)
            .field("city", self.city)
            .field("country", self.country)
            .field("phone", self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_address_records_missing_hno() {
        let req = WorldAddress {
            street: "Baker Street".into(),
            zip: "NW1 6XE".into(),
            city: "London".into(),
            country: "gb".into(),
            ..WorldAddress::default()
        }
        .into_request();

        assert_eq!(req.product(), "sc_int");
        assert_eq!(req.get("hno"), Some(None));
        assert_eq!(req.get("zip_add_on"), Some(Some("")));
        assert_eq!(req.fields().len(), 11);
    }

    #[test]
    fn fake_check_optional_fields() {
        let mut query = FakeCheckQuery::new("Max", "Mustermann");
        query.city = Some("Berlin".into());
        let req = query.into_request();

        assert_eq!(req.product(), "fk");
        assert_eq!(req.get("city"), Some(Some("Berlin")));
        assert_eq!(req.get("street"), Some(None));
    }

    #[test]
    fn name_check_fields() {
        let req = NameCheckQuery::new("Erika", "Mustermann").into_request();
        assert_eq!(req.product(), "nc");
        assert_eq!(req.get("firstname"), Some(Some("Erika")));
        assert_eq!(req.get("salutation"), Some(None));
    }

    #[test]
    fn telephone_directory_product_selection() {
        let query = TelephoneDirectoryQuery {
            firstname: "Max".into(),
            lastname: "Mustermann".into(),
            ..TelephoneDirectoryQuery::default()
        };
        assert_eq!(query.clone().into_request(false).product(), "pb");
        assert_eq!(query.into_request(true).product(), "pbt");
    }
}
