//! Tenant panel commands.

use tabled::Tabled;

use crate::error::Result;
use crate::panel::Panel;
use crate::remote::ApiClient;
use crate::resource::{RecordId, Tenant, TenantFields};

use super::{run_create, run_edit, run_ls, run_remove, set_opt_reference};

/// A row in the tenant list table
#[derive(Tabled)]
struct TenantRow {
    #[tabled(rename = "ID")]
    id: RecordId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Landlord")]
    landlord: String,
    #[tabled(rename = "Property")]
    property: String,
}

fn to_row(tenant: &Tenant) -> TenantRow {
    TenantRow {
        id: tenant.id,
        name: tenant.name.clone(),
        phone: tenant.phone_number.clone(),
        email: tenant.email.clone(),
        landlord: tenant.landlord_id.clone(),
        property: tenant.property_id.clone().unwrap_or_default(),
    }
}

fn search_text(tenant: &Tenant) -> String {
    format!(
        "{} {} {} {}",
        tenant.id, tenant.name, tenant.email, tenant.phone_number
    )
}

pub async fn cmd_tenants_ls(client: &ApiClient, filter: Option<&str>, json: bool) -> Result<()> {
    let panel = Panel::<Tenant>::open(client);
    run_ls(&panel, filter, json, search_text, to_row).await
}

pub async fn cmd_tenants_add(client: &ApiClient, fields: TenantFields) -> Result<()> {
    let panel = Panel::<Tenant>::open(client);
    run_create(&panel, fields).await
}

/// Field changes for `tenants edit`; unset flags leave the draft as-is.
#[derive(Debug, Default)]
pub struct TenantEditOptions {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub landlord_id: Option<String>,
    pub property_id: Option<String>,
}

pub async fn cmd_tenants_edit(
    client: &ApiClient,
    id: RecordId,
    options: TenantEditOptions,
) -> Result<()> {
    let panel = Panel::<Tenant>::open(client);
    run_edit(&panel, id, "Updated", |draft| {
        if let Some(name) = options.name {
            draft.name = name;
        }
        if let Some(phone_number) = options.phone_number {
            draft.phone_number = phone_number;
        }
        if let Some(email) = options.email {
            draft.email = email;
        }
        if let Some(landlord_id) = options.landlord_id {
            draft.landlord_id = landlord_id;
        }
        if let Some(property_id) = options.property_id {
            set_opt_reference(&mut draft.property_id, property_id);
        }
    })
    .await
}

pub async fn cmd_tenants_rm(client: &ApiClient, id: RecordId) -> Result<()> {
    let panel = Panel::<Tenant>::open(client);
    run_remove(&panel, id).await
}
