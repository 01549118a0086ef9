//! The overview command: all four collections, loaded concurrently.

use owo_colors::OwoColorize;
use tabled::Tabled;

use crate::display;
use crate::error::{CastellanError, Result};
use crate::panel::{Panel, PanelState};
use crate::remote::ApiClient;
use crate::resource::{Contractor, Issue, Property, Resource, Tenant};

#[derive(Tabled)]
struct OverviewRow {
    #[tabled(rename = "Collection")]
    collection: &'static str,
    #[tabled(rename = "Records")]
    records: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn row_for<R: Resource>(state: &PanelState<R>, failures: &mut usize) -> OverviewRow {
    match &state.error {
        Some(message) => {
            *failures += 1;
            OverviewRow {
                collection: R::PLURAL,
                records: "-".to_string(),
                status: message.clone().red().to_string(),
            }
        }
        None => OverviewRow {
            collection: R::PLURAL,
            records: state.records.len().to_string(),
            status: "synced".green().to_string(),
        },
    }
}

pub async fn cmd_overview(client: &ApiClient) -> Result<()> {
    let tenants = Panel::<Tenant>::open(client);
    let contractors = Panel::<Contractor>::open(client);
    let properties = Panel::<Property>::open(client);
    let issues = Panel::<Issue>::open(client);

    // The panels are independent; load them all at once.
    futures::join!(
        tenants.load(),
        contractors.load(),
        properties.load(),
        issues.load()
    );

    let mut failures = 0;
    let mut rows = vec![
        row_for(&tenants.store().snapshot(), &mut failures),
        row_for(&contractors.store().snapshot(), &mut failures),
        row_for(&properties.store().snapshot(), &mut failures),
    ];

    // Issues also report how many are still open.
    let issue_state = issues.store().snapshot();
    let mut issue_row = row_for(&issue_state, &mut failures);
    if issue_state.error.is_none() {
        let open = issue_state.records.iter().filter(|i| !i.resolved).count();
        issue_row.records = format!("{} ({open} open)", issue_state.records.len());
    }
    rows.push(issue_row);

    println!("{}", display::render_table(rows));

    if failures > 0 {
        return Err(CastellanError::Other(format!(
            "{failures} of 4 collections failed to load"
        )));
    }
    Ok(())
}
