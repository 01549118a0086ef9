//! Maintenance issue panel commands.

use owo_colors::OwoColorize;
use tabled::Tabled;

use crate::error::Result;
use crate::panel::Panel;
use crate::remote::ApiClient;
use crate::resource::{Issue, IssueFields, RecordId};

use super::{run_create, run_edit, run_ls, run_remove, set_opt_reference};

/// A row in the issue list table
#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "ID")]
    id: RecordId,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Property")]
    property: String,
}

fn to_row(issue: &Issue) -> IssueRow {
    let status = if issue.resolved {
        "resolved".green().to_string()
    } else {
        "open".yellow().to_string()
    };

    IssueRow {
        id: issue.id,
        description: issue.description.clone(),
        location: issue.location.clone(),
        action: issue.action.clone(),
        status,
        property: issue.property_id.clone().unwrap_or_default(),
    }
}

fn search_text(issue: &Issue) -> String {
    format!(
        "{} {} {} {}",
        issue.id, issue.description, issue.location, issue.action
    )
}

pub async fn cmd_issues_ls(client: &ApiClient, filter: Option<&str>, json: bool) -> Result<()> {
    let panel = Panel::<Issue>::open(client);
    run_ls(&panel, filter, json, search_text, to_row).await
}

pub async fn cmd_issues_add(client: &ApiClient, fields: IssueFields) -> Result<()> {
    let panel = Panel::<Issue>::open(client);
    run_create(&panel, fields).await
}

/// Field changes for `issues edit`; unset flags leave the draft as-is.
#[derive(Debug, Default)]
pub struct IssueEditOptions {
    pub description: Option<String>,
    pub location: Option<String>,
    pub action: Option<String>,
    pub property_id: Option<String>,
}

pub async fn cmd_issues_edit(
    client: &ApiClient,
    id: RecordId,
    options: IssueEditOptions,
) -> Result<()> {
    let panel = Panel::<Issue>::open(client);
    run_edit(&panel, id, "Updated", |draft| {
        if let Some(description) = options.description {
            draft.description = description;
        }
        if let Some(location) = options.location {
            draft.location = location;
        }
        if let Some(action) = options.action {
            draft.action = action;
        }
        if let Some(property_id) = options.property_id {
            set_opt_reference(&mut draft.property_id, property_id);
        }
    })
    .await
}

/// Mark an issue resolved through the ordinary update path.
pub async fn cmd_issues_resolve(client: &ApiClient, id: RecordId) -> Result<()> {
    let panel = Panel::<Issue>::open(client);
    run_edit(&panel, id, "Resolved", |draft| {
        draft.resolved = true;
    })
    .await
}

pub async fn cmd_issues_rm(client: &ApiClient, id: RecordId) -> Result<()> {
    let panel = Panel::<Issue>::open(client);
    run_remove(&panel, id).await
}
