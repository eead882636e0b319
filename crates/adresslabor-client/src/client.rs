//! Adresslabor HTTP client implementation.

use std::marker::PhantomData;
use std::sync::{Mutex, PoisonError};

use adresslabor_core::{CheckRequest, Credentials, ProductKey};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ClientError;
use crate::options::ClientOptions;
use crate::response::{parse_body, ResponseMap, ResponseShape};
use crate::types::{FakeCheckQuery, NameCheckQuery, TelephoneDirectoryQuery, WorldAddress};

/// Version 1 check path.
#[deprecated(note = "use PATH_V3")]
pub const PATH_V1: &str = "/v1/de/check";

/// Version 2 check path.
#[deprecated(note = "use PATH_V3")]
pub const PATH_V2: &str = "/v2/de/check";

/// Current check path.
pub const PATH_V3: &str = "/v3/de/check";

/// Adresslabor check API client.
///
/// Owns its HTTP connection pool and the credentials. Responses are decoded
/// into `R`, a generic JSON map unless another [`ResponseShape`] is chosen
/// with [`CheckClient::connect_with_shape`].
#[derive(Debug)]
pub struct CheckClient<R = ResponseMap> {
    client: Client,
    base_url: String,
    credentials: Credentials,
    credits: Mutex<Option<f64>>,
    shape: PhantomData<fn() -> R>,
}

impl CheckClient {
    /// Connect to the production API.
    ///
    /// Sends one empty VAT number check to validate the credentials and
    /// read the current credit balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the credentials are rejected
    /// or the response is malformed.
    pub async fn connect(credentials: Credentials) -> Result<Self, ClientError> {
        Self::connect_with_options(credentials, ClientOptions::default()).await
    }

    /// Connect with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the initial check fails.
    pub async fn connect_with_options(
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        Self::connect_with_shape(credentials, options).await
    }
}

impl<R: ResponseShape> CheckClient<R> {
    /// Connect, decoding responses into `R`.
    ///
    /// ```no_run
    /// use adresslabor_client::{CheckClient, CheckResponse, ClientOptions, Credentials};
    ///
    /// # async fn example() -> Result<(), adresslabor_client::ClientError> {
    /// let client: CheckClient<CheckResponse> =
    ///     CheckClient::connect_with_shape(Credentials::from_env()?, ClientOptions::default()).await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the initial check fails.
    pub async fn connect_with_shape(
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Self::build(credentials, options)?;

        client.vat_number_check("", false).await?;
        tracing::info!(
            base_url = %client.base_url,
            api_cid = %client.credentials.api_cid(),
            credits = ?client.credits(),
            "Connected to Adresslabor check API"
        );

        Ok(client)
    }

    fn build(credentials: Credentials, options: ClientOptions) -> Result<Self, ClientError> {
        let base_url = options.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            ClientError::Configuration(format!("invalid base URL {base_url:?}: {e}"))
        })?;

        let mut builder = Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            credentials,
            credits: Mutex::new(None),
            shape: PhantomData,
        })
    }

    /// The credit balance reported by the most recent response.
    #[must_use]
    pub fn credits(&self) -> Option<f64> {
        *self.credits.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_credits(&self, credits: f64) {
        *self.credits.lock().unwrap_or_else(PoisonError::into_inner) = Some(credits);
    }

    /// Check a DACH address (`sc`, or `scx` when `extended`).
    ///
    /// Returns the result of whichever product was requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn address_check_dach(
        &self,
        street: &str,
        hno: &str,
        zip: &str,
        city: &str,
        country: Option<&str>,
        extended: bool,
    ) -> Result<Option<Value>, ClientError> {
        let product = if extended {
            ProductKey::Scx
        } else {
            ProductKey::Sc
        };
        let request = CheckRequest::for_product(product)
            .field("street", street)
            .field("hno", hno)
            .field("zip", zip)
            .field("city", city)
            .optional_field("country", country);

        self.check_and_extract(&request, product).await
    }

    /// Check an international address (`sc_int`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn address_check_world(
        &self,
        address: WorldAddress,
    ) -> Result<Option<Value>, ClientError> {
        self.check_and_extract(&address.into_request(), ProductKey::ScInt)
            .await
    }

    /// Check whether an identity is plausible (`fk`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn fake_check(&self, query: FakeCheckQuery) -> Result<Option<Value>, ClientError> {
        self.check_and_extract(&query.into_request(), ProductKey::Fk)
            .await
    }

    /// Check a consumer name (`nc`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn name_check_b2c(
        &self,
        query: NameCheckQuery,
    ) -> Result<Option<Value>, ClientError> {
        self.check_and_extract(&query.into_request(), ProductKey::Nc)
            .await
    }

    /// Check an email address (`em`, or `emx` when `extended`).
    ///
    /// Both variants are answered under `em`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn email_check(
        &self,
        email: &str,
        extended: bool,
    ) -> Result<Option<Value>, ClientError> {
        let product = if extended {
            ProductKey::Emx
        } else {
            ProductKey::Em
        };
        let request = CheckRequest::for_product(product).field("email", email);

        self.check_and_extract(&request, product.family()).await
    }

    /// Look up a person in the telephone directory (`pb`, or `pbt` when
    /// `pay_per_hit`).
    ///
    /// Both variants are answered under `pb`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn telephone_directory(
        &self,
        query: TelephoneDirectoryQuery,
        pay_per_hit: bool,
    ) -> Result<Option<Value>, ClientError> {
        self.check_and_extract(&query.into_request(pay_per_hit), ProductKey::Pb)
            .await
    }

    /// Check a VAT identification number (`vatid`, or `vatidx` when
    /// `extended`).
    ///
    /// An empty `vat_id` is accepted; it only validates the credentials.
    /// Both variants are answered under `vatid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn vat_number_check(
        &self,
        vat_id: &str,
        extended: bool,
    ) -> Result<Option<Value>, ClientError> {
        let product = if extended {
            ProductKey::Vatidx
        } else {
            ProductKey::Vatid
        };
        let request = CheckRequest::for_product(product).field("vatin", vat_id);

        self.check_and_extract(&request, product.family()).await
    }

    /// Run several products in one request against the current API version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn check_products(
        &self,
        products: &[ProductKey],
        fields: &[(&str, Option<&str>)],
    ) -> Result<R, ClientError> {
        let request = fields
            .iter()
            .fold(CheckRequest::for_products(products), |req, (name, value)| {
                req.optional_field(*name, *value)
            });

        self.check(PATH_V3, &request).await
    }

    /// Send a check request and return the full response.
    ///
    /// The product selection is validated before anything is sent. The
    /// response's `credits` becomes the client's current balance.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidProduct` for unknown product keys,
    /// `ClientError::Http` or `ClientError::Status` on transport failures and
    /// `ClientError::MalformedResponse` if the body is not a JSON object
    /// carrying `credits`.
    pub async fn check(&self, path: &str, request: &CheckRequest) -> Result<R, ClientError> {
        request.products()?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path = %path, product = %request.product(), "Sending check request");

        let response = self
            .client
            .post(&url)
            .form(&request.form_pairs(&self.credentials))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path = %path, "Check request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: R = parse_body(&body).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Could not decode check response");
            e
        })?;

        let credits = parsed.credits().ok_or_else(|| {
            tracing::warn!(path = %path, "Check response carries no credits");
            ClientError::MalformedResponse("response has no numeric `credits` field".into())
        })?;
        self.set_credits(credits);

        Ok(parsed)
    }

    async fn check_and_extract(
        &self,
        request: &CheckRequest,
        result_key: ProductKey,
    ) -> Result<Option<Value>, ClientError> {
        let response = self.check(PATH_V3, request).await?;
        let result = response.into_product(result_key);
        if result.is_none() {
            tracing::debug!(product = %result_key, "Response has no result for product");
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::CheckResponse;
    use std::time::Duration;

    fn build(base_url: &str) -> CheckClient {
        CheckClient::build(
            Credentials::new("cid", "key"),
            ClientOptions::default().with_base_url(base_url),
        )
        .unwrap()
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = build("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn client_starts_without_credits() {
        let client = build("http://localhost:8080");
        assert_eq!(client.credits(), None);
    }

    #[test]
    fn credits_are_last_writer_wins() {
        let client = build("http://localhost:8080");
        client.set_credits(10.0);
        client.set_credits(7.0);
        assert_eq!(client.credits(), Some(7.0));
    }

    #[test]
    fn invalid_base_url_is_configuration_error() {
        let err = CheckClient::<CheckResponse>::build(
            Credentials::new("cid", "key"),
            ClientOptions::default().with_base_url("not a url"),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn timeout_option_is_accepted() {
        let client = CheckClient::<ResponseMap>::build(
            Credentials::new("cid", "key"),
            ClientOptions::default().with_timeout(Duration::from_secs(3)),
        );
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn invalid_product_fails_before_sending() {
        // Nothing listens on port 9; a request would fail with a transport error.
        let client = build("http://127.0.0.1:9");
        let err = client
            .check(PATH_V3, &CheckRequest::new("sc,bogus"))
            .await
            .unwrap_err();
        match err {
            ClientError::InvalidProduct { product, .. } => assert_eq!(product, "bogus"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn legacy_paths_are_versioned() {
        #[allow(deprecated)]
        let legacy = [PATH_V1, PATH_V2];
        assert_eq!(legacy, ["/v1/de/check", "/v2/de/check"]);
        assert_eq!(PATH_V3, "/v3/de/check");
    }
}
