//! Contractor panel commands.

use tabled::Tabled;

use crate::error::Result;
use crate::panel::Panel;
use crate::remote::ApiClient;
use crate::resource::{Contractor, ContractorFields, RecordId};

use super::{run_create, run_edit, run_ls, run_remove};

/// A row in the contractor list table
#[derive(Tabled)]
struct ContractorRow {
    #[tabled(rename = "ID")]
    id: RecordId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Work")]
    work: String,
    #[tabled(rename = "Landlord")]
    landlord: String,
}

fn to_row(contractor: &Contractor) -> ContractorRow {
    ContractorRow {
        id: contractor.id,
        name: contractor.name.clone(),
        phone: contractor.phone_number.clone(),
        email: contractor.email.clone(),
        work: contractor.work.clone(),
        landlord: contractor.landlord_id.clone(),
    }
}

fn search_text(contractor: &Contractor) -> String {
    format!(
        "{} {} {} {}",
        contractor.id, contractor.name, contractor.email, contractor.work
    )
}

pub async fn cmd_contractors_ls(
    client: &ApiClient,
    filter: Option<&str>,
    json: bool,
) -> Result<()> {
    let panel = Panel::<Contractor>::open(client);
    run_ls(&panel, filter, json, search_text, to_row).await
}

pub async fn cmd_contractors_add(client: &ApiClient, fields: ContractorFields) -> Result<()> {
    let panel = Panel::<Contractor>::open(client);
    run_create(&panel, fields).await
}

/// Field changes for `contractors edit`; unset flags leave the draft as-is.
#[derive(Debug, Default)]
pub struct ContractorEditOptions {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub work: Option<String>,
    pub landlord_id: Option<String>,
}

pub async fn cmd_contractors_edit(
    client: &ApiClient,
    id: RecordId,
    options: ContractorEditOptions,
) -> Result<()> {
    let panel = Panel::<Contractor>::open(client);
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
        if let Some(work) = options.work {
            draft.work = work;
        }
        if let Some(landlord_id) = options.landlord_id {
            draft.landlord_id = landlord_id;
        }
    })
    .await
}

pub async fn cmd_contractors_rm(client: &ApiClient, id: RecordId) -> Result<()> {
    let panel = Panel::<Contractor>::open(client);
    run_remove(&panel, id).await
}
