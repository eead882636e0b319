//! Live API integration tests.
//!
//! These tests run against the real Adresslabor API and spend credits.
//! Set `ADRESSLABOR_API_CID` and `ADRESSLABOR_API_KEY`; `ADRESSLABOR_BASE_URL`
//! optionally points at another host.
//!
//! Run with: cargo test -p adresslabor-client --test live_api -- --nocapture --ignored

use adresslabor_client::{CheckClient, ClientError, ClientOptions, Credentials};

async fn live_client() -> CheckClient {
    let credentials = Credentials::from_env().expect("live credentials must be set");
    let options = ClientOptions::from_env().expect("valid client options");
    CheckClient::connect_with_options(credentials, options)
        .await
        .expect("Failed to connect")
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn live_connect_reports_credits() {
    let client = live_client().await;
    let credits = client.credits().expect("connect seeds credits");

    println!("Credits: {credits}");
    assert!(credits >= 0.0);
}

#[tokio::test]
#[ignore]
async fn live_vat_number_check() {
    let client = live_client().await;
    let before = client.credits();

    let result = client.vat_number_check("DE811907980", false).await.unwrap();

    println!("Result: {result:?}");
    println!("Credits: {before:?} -> {:?}", client.credits());
    assert!(result.is_some(), "Expected a vatid result");
}

#[tokio::test]
#[ignore]
async fn live_invalid_credentials_are_rejected() {
    let options = ClientOptions::from_env().expect("valid client options");
    let result =
        CheckClient::connect_with_options(Credentials::new("0", "invalid"), options).await;

    match result {
        Err(err @ (ClientError::Status { .. } | ClientError::MalformedResponse(_))) => {
            println!("Rejected as expected: {err}");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(client) => panic!("invalid credentials accepted, credits {:?}", client.credits()),
    }
}
