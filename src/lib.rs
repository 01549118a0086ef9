pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod panel;
pub mod remote;
pub mod resource;

pub use config::Config;
pub use error::{CastellanError, Result};
pub use panel::{Controller, Panel, PanelState, Store};
pub use remote::{ApiClient, CollectionResource, RestCollection};
pub use resource::{
    Contractor, ContractorFields, Issue, IssueFields, Property, PropertyFields, RecordFields,
    RecordId, Resource, Tenant, TenantFields,
};
