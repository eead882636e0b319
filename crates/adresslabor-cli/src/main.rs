//! Adresslabor CLI - run address and identity checks from the shell.
//!
//! Commands:
//! - `adresslabor dach` - Address check DACH
//! - `adresslabor world` - Address check world
//! - `adresslabor fake` - Fake check
//! - `adresslabor name` - Name check B2C
//! - `adresslabor email` - Email check
//! - `adresslabor phone` - Telephone directory
//! - `adresslabor vat` - VAT number check
//! - `adresslabor check` - Raw check with any product combination

use std::time::Duration;

use adresslabor_client::{CheckClient, ClientOptions, Credentials};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "adresslabor")]
#[command(about = "Address, name, email, phone and VAT checks via the Adresslabor API")]
#[command(version)]
struct Cli {
    /// API client id
    #[arg(long, env = "ADRESSLABOR_API_CID", hide_env_values = true)]
    api_cid: String,

    /// API key
    #[arg(long, env = "ADRESSLABOR_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a German, Austrian or Swiss address
    Dach {
        street: String,
        hno: String,
        zip: String,
        city: String,

        /// Country code
        #[arg(long)]
        country: Option<String>,

        /// Use the extended check (scx)
        #[arg(long)]
        extended: bool,
    },

    /// Check an international address
    World {
        #[arg(long)]
        street: String,
        #[arg(long)]
        hno: Option<String>,
        #[arg(long)]
        zip: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        country: String,
        #[arg(long, default_value = "")]
        state: String,
        #[arg(long, default_value = "")]
        zip_add_on: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        house_estate: String,
        #[arg(long, default_value = "")]
        sub_building_name: String,
        #[arg(long, default_value = "")]
        organisation: String,
    },

    /// Check whether an identity is plausible
    Fake {
        firstname: String,
        lastname: String,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        hno: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },

    /// Check a consumer name
    Name {
        firstname: String,
        lastname: String,
        #[arg(long)]
        salutation: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },

    /// Check an email address
    Email {
        email: String,

        /// Use the extended check (emx)
        #[arg(long)]
        extended: bool,
    },

    /// Look up a person in the telephone directory
    Phone {
        #[arg(long)]
        firstname: String,
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        hno: Option<String>,
        #[arg(long)]
        zip: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        title: Option<String>,

        /// Only pay for hits (pbt)
        #[arg(long)]
        pay_per_hit: bool,
    },

    /// Check a VAT identification number
    Vat {
        vat_id: String,

        /// Use the extended check (vatidx)
        #[arg(long)]
        extended: bool,
    },

    /// Send a raw check and print the full response
    Check {
        /// Comma-separated product keys, e.g. "sc,em"
        products: String,

        /// Request field as name=value, repeatable
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut options = ClientOptions::from_env()?;
    if let Some(base_url) = cli.base_url {
        options.base_url = base_url;
    }
    if let Some(seconds) = cli.timeout {
        options.timeout = Some(Duration::from_secs(seconds));
    }

    let client = CheckClient::connect_with_options(Credentials::new(cli.api_cid, cli.api_key), options)
        .await
        .context("Failed to connect to the Adresslabor API")?;

    let output = commands::run(&client, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    tracing::info!(credits = ?client.credits(), "Check complete");
    Ok(())
}
