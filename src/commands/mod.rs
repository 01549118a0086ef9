//! CLI command implementations.
//!
//! Commands are the presentation layer: each one opens the panel for its
//! resource kind, drives intents through the sync controller, and
//! renders a snapshot of the store. A panel that surfaced an error makes
//! the command fail with that message; `main` prints it once.

mod config;
mod contractors;
mod issues;
mod overview;
mod properties;
mod tenants;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use contractors::{
    ContractorEditOptions, cmd_contractors_add, cmd_contractors_edit, cmd_contractors_ls,
    cmd_contractors_rm,
};
pub use issues::{
    IssueEditOptions, cmd_issues_add, cmd_issues_edit, cmd_issues_ls, cmd_issues_resolve,
    cmd_issues_rm,
};
pub use overview::cmd_overview;
pub use properties::{
    PropertyEditOptions, cmd_properties_add, cmd_properties_edit, cmd_properties_ls,
    cmd_properties_rm,
};
pub use tenants::{
    TenantEditOptions, cmd_tenants_add, cmd_tenants_edit, cmd_tenants_ls, cmd_tenants_rm,
};

use tabled::Tabled;

use crate::display;
use crate::error::{CastellanError, Result};
use crate::panel::Panel;
use crate::resource::{RecordId, Resource};

/// List a collection: load, then render table / JSON / empty state.
pub(crate) async fn run_ls<R, Row>(
    panel: &Panel<R>,
    filter: Option<&str>,
    json: bool,
    search_text: fn(&R) -> String,
    to_row: fn(&R) -> Row,
) -> Result<()>
where
    R: Resource,
    Row: Tabled,
{
    panel.load().await;

    let state = panel.store().snapshot();
    if let Some(message) = state.error {
        return Err(CastellanError::Other(message));
    }

    let query = filter.unwrap_or("");
    let visible = display::fuzzy_filter(&state.records, query, search_text);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if state.records.is_empty() {
        println!("{}", display::empty_state(R::PLURAL));
        return Ok(());
    }
    if visible.is_empty() {
        println!("No {} match '{query}'", R::PLURAL);
        return Ok(());
    }

    println!("{}", display::render_table(visible.iter().map(|r| to_row(r))));
    Ok(())
}

/// Create a record through the panel's form flow.
///
/// A blank required field is the controller's silent no-op; the command
/// then simply exits without output, matching the core contract.
pub(crate) async fn run_create<R: Resource>(panel: &Panel<R>, fields: R::Fields) -> Result<()> {
    let store = panel.store();
    store.show_create_form();
    {
        let fields = fields.clone();
        store.edit_create_form(move |form| *form = fields);
    }

    panel.create(fields).await;

    let state = panel.store().snapshot();
    if let Some(message) = state.error {
        return Err(CastellanError::Other(message));
    }
    if let Some(record) = state.records.last() {
        println!(
            "{}",
            display::confirmation("Created", R::SINGULAR, record.id())
        );
    }
    Ok(())
}

/// Edit a record through the panel's draft flow: load, open a draft on
/// the target, merge the changes, push the update.
pub(crate) async fn run_edit<R: Resource>(
    panel: &Panel<R>,
    id: RecordId,
    verb: &str,
    apply: impl FnOnce(&mut R),
) -> Result<()> {
    panel.load().await;

    let state = panel.store().snapshot();
    if let Some(message) = state.error {
        return Err(CastellanError::Other(message));
    }

    let record = state
        .records
        .iter()
        .find(|record| record.id() == id)
        .ok_or(CastellanError::RecordNotFound {
            kind: R::SINGULAR,
            id,
        })?;

    panel.store().begin_edit(record.clone());
    panel.store().edit_draft(apply);

    let Some(draft) = panel.store().snapshot().draft else {
        return Err(CastellanError::Other(format!(
            "no open draft for {} {id}",
            R::SINGULAR
        )));
    };

    panel.update(draft).await;

    let state = panel.store().snapshot();
    if let Some(message) = state.error {
        return Err(CastellanError::Other(message));
    }
    println!("{}", display::confirmation(verb, R::SINGULAR, id));
    Ok(())
}

/// Delete a record. The local copy goes only after the server confirms.
pub(crate) async fn run_remove<R: Resource>(panel: &Panel<R>, id: RecordId) -> Result<()> {
    panel.remove(id).await;

    let state = panel.store().snapshot();
    if let Some(message) = state.error {
        return Err(CastellanError::Other(message));
    }
    println!("{}", display::confirmation("Deleted", R::SINGULAR, id));
    Ok(())
}

/// Replace an optional reference from a CLI flag: an empty string clears
/// the reference, anything else sets it.
pub(crate) fn set_opt_reference(target: &mut Option<String>, value: String) {
    *target = if value.is_empty() { None } else { Some(value) };
}
