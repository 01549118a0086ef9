//! Property panel commands.

use tabled::Tabled;

use crate::error::Result;
use crate::panel::Panel;
use crate::remote::ApiClient;
use crate::resource::{Property, PropertyFields, RecordId};

use super::{run_create, run_edit, run_ls, run_remove};

/// A row in the property list table
#[derive(Tabled)]
struct PropertyRow {
    #[tabled(rename = "ID")]
    id: RecordId,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Landlord")]
    landlord: String,
}

fn to_row(property: &Property) -> PropertyRow {
    PropertyRow {
        id: property.id,
        address: property.address.clone(),
        landlord: property.landlord_id.clone(),
    }
}

fn search_text(property: &Property) -> String {
    format!("{} {} {}", property.id, property.address, property.landlord_id)
}

pub async fn cmd_properties_ls(
    client: &ApiClient,
    filter: Option<&str>,
    json: bool,
) -> Result<()> {
    let panel = Panel::<Property>::open(client);
    run_ls(&panel, filter, json, search_text, to_row).await
}

pub async fn cmd_properties_add(client: &ApiClient, fields: PropertyFields) -> Result<()> {
    let panel = Panel::<Property>::open(client);
    run_create(&panel, fields).await
}

/// Field changes for `properties edit`; unset flags leave the draft as-is.
#[derive(Debug, Default)]
pub struct PropertyEditOptions {
    pub address: Option<String>,
    pub landlord_id: Option<String>,
}

pub async fn cmd_properties_edit(
    client: &ApiClient,
    id: RecordId,
    options: PropertyEditOptions,
) -> Result<()> {
    let panel = Panel::<Property>::open(client);
    run_edit(&panel, id, "Updated", |draft| {
        if let Some(address) = options.address {
            draft.address = address;
        }
        if let Some(landlord_id) = options.landlord_id {
            draft.landlord_id = landlord_id;
        }
    })
    .await
}

pub async fn cmd_properties_rm(client: &ApiClient, id: RecordId) -> Result<()> {
    let panel = Panel::<Property>::open(client);
    run_remove(&panel, id).await
}
