//! Core types for the Adresslabor check API.
//!
//! This crate provides the network-free building blocks used by the client:
//!
//! - **Products**: `ProductKey`, the allow-list of check products, and
//!   `parse_product_list` for comma-separated product selections
//! - **Credentials**: `Credentials`, the `apicid`/`apikey` pair sent with every request
//! - **Requests**: `CheckRequest`, the form payload of a single check
//!
//! # Product Keys
//!
//! | Key | Product |
//! |-----|---------|
//! | `sc` / `scx` | Address check DACH (standard / extended) |
//! | `sc_int` | Address check world |
//! | `fk` | Fake check |
//! | `nc` | Name check B2C |
//! | `em` / `emx` | Email check (standard / extended) |
//! | `pb` / `pbt` | Telephone directory (standard / pay per hit) |
//! | `vatid` / `vatidx` | VAT number check (standard / extended) |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod credentials;
pub mod error;
pub mod product;
pub mod request;

pub use credentials::{Credentials, ENV_API_CID, ENV_API_KEY};
pub use error::{CoreError, Result};
pub use product::{parse_product_list, ProductKey, PRODUCT_KEYS};
pub use request::CheckRequest;
