//! Resource panels: one store + sync controller pair per resource kind.
//!
//! The store holds the authoritative local copy of the collection and
//! the panel's transient UI state; the controller translates user
//! intents into remote operations and reconciles the outcomes. The
//! presentation layer consumes store snapshots read-only.

pub mod controller;
pub mod store;
pub mod validate;

pub use controller::{Controller, Panel};
pub use store::{PanelState, Store};
