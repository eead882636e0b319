//! Adresslabor Client SDK.
//!
//! This crate provides an async client for the Adresslabor check API:
//! address checks (DACH and world), fake checks, name checks, email checks,
//! telephone directory lookups and VAT number checks.
//!
//! Connecting performs one empty VAT number check to validate the credentials
//! and to read the account's credit balance.
//!
//! # Example
//!
//! ```no_run
//! use adresslabor_client::{CheckClient, Credentials};
//!
//! # async fn example() -> Result<(), adresslabor_client::ClientError> {
//! let client = CheckClient::connect(Credentials::new("12345", "your-api-key")).await?;
//! println!("Remaining credits: {:?}", client.credits());
//!
//! // Standard DACH address check
//! if let Some(result) = client
//!     .address_check_dach("Hauptstr.", "1", "10115", "Berlin", Some("de"), false)
//!     .await?
//! {
//!     println!("{result}");
//! }
//!
//! // Extended email check, the result is read from the `em` field
//! let email = client.email_check("info@example.com", true).await?;
//! println!("{email:?}");
//! # Ok(())
//! # }
//! ```
//!
//! # Response Shapes
//!
//! The full response of `CheckClient::check` is returned either as a generic
//! JSON map (the default) or as a typed [`CheckResponse`]. The shape is a type
//! parameter of the client and cannot change after connecting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod options;
mod response;
mod types;

pub use adresslabor_core::{CheckRequest, Credentials, ProductKey, PRODUCT_KEYS};
pub use client::{CheckClient, PATH_V1, PATH_V2, PATH_V3};
pub use error::ClientError;
pub use options::{ClientOptions, BASE_URL, ENV_BASE_URL, ENV_TIMEOUT_SECONDS};
pub use response::{CheckResponse, ResponseMap, ResponseShape};
pub use types::*;
