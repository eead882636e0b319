//! Subcommand execution.

use adresslabor_client::{
    CheckClient, CheckRequest, FakeCheckQuery, NameCheckQuery, TelephoneDirectoryQuery,
    WorldAddress, PATH_V3,
};
use anyhow::{bail, Result};
use serde_json::Value;

use crate::Commands;

/// Run a subcommand and return what should be printed.
pub async fn run(client: &CheckClient, command: Commands) -> Result<Value> {
    let result = match command {
        Commands::Dach {
            street,
            hno,
            zip,
            city,
            country,
            extended,
        } => {
            client
                .address_check_dach(&street, &hno, &zip, &city, country.as_deref(), extended)
                .await?
        }
        Commands::World {
            street,
            hno,
            zip,
            city,
            country,
            state,
            zip_add_on,
            location,
            house_estate,
            sub_building_name,
            organisation,
        } => {
            client
                .address_check_world(WorldAddress {
                    street,
                    hno,
                    zip,
                    city,
                    country,
                    state,
                    zip_add_on,
                    location,
                    house_estate,
                    sub_building_name,
                    organisation,
                })
                .await?
        }
        Commands::Fake {
            firstname,
            lastname,
            street,
            hno,
            zip,
            city,
            country,
        } => {
            client
                .fake_check(FakeCheckQuery {
                    firstname,
                    lastname,
                    street,
                    hno,
                    zip,
                    city,
                    country,
                })
                .await?
        }
        Commands::Name {
            firstname,
            lastname,
            salutation,
            title,
        } => {
            client
                .name_check_b2c(NameCheckQuery {
                    firstname,
                    lastname,
                    salutation,
                    title,
                })
                .await?
        }
        Commands::Email { email, extended } => client.email_check(&email, extended).await?,
        Commands::Phone {
            firstname,
            lastname,
            street,
            hno,
            zip,
            city,
            country,
            phone,
            title,
            pay_per_hit,
        } => {
            let query = TelephoneDirectoryQuery {
                title,
                firstname,
                lastname,
                street,
                hno,
                zip,
                city,
                country,
                phone,
            };
            client.telephone_directory(query, pay_per_hit).await?
        }
        Commands::Vat { vat_id, extended } => client.vat_number_check(&vat_id, extended).await?,
        Commands::Check { products, fields } => {
            let request = build_request(&products, &fields)?;
            let response = client.check(PATH_V3, &request).await?;
            return Ok(Value::Object(response));
        }
    };

    Ok(result.unwrap_or(Value::Null))
}

/// Build a raw request from `name=value` arguments.
fn build_request(products: &str, fields: &[String]) -> Result<CheckRequest> {
    let mut request = CheckRequest::new(products);
    for field in fields {
        let Some((name, value)) = field.split_once('=') else {
            bail!("field {field:?} must be written as name=value");
        };
        if name.is_empty() {
            bail!("field {field:?} has an empty name");
        }
        request = request.field(name, value);
    }
    Ok(request)
}
