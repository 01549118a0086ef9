//! The sync controller: user intents in, remote operations out,
//! outcomes reconciled into the store.
//!
//! One controller per resource kind, parameterized only by the record
//! type and the collection transport. All remote failures are caught
//! here and converted to the store's error flag; nothing propagates
//! further up, and a failed mutation never corrupts local state.

use std::sync::Arc;

use crate::remote::{ApiClient, CollectionResource, RestCollection};
use crate::resource::{RecordFields, RecordId, Resource};

use super::store::Store;
use super::validate;

/// Sync controller for one resource kind.
pub struct Controller<R: Resource, C: CollectionResource<R>> {
    store: Arc<Store<R>>,
    remote: C,
}

/// A panel wired to the shared HTTP client.
pub type Panel<R> = Controller<R, RestCollection<R>>;

impl<R: Resource> Controller<R, RestCollection<R>> {
    /// Open a panel against the remote collection for `R`.
    pub fn open(client: &ApiClient) -> Self {
        Controller::new(client.collection::<R>())
    }
}

impl<R: Resource, C: CollectionResource<R>> Controller<R, C> {
    pub fn new(remote: C) -> Self {
        Self {
            store: Arc::new(Store::new()),
            remote,
        }
    }

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    /// Fetch the full collection and replace the local copy.
    ///
    /// On failure the prior collection is left untouched and a
    /// kind-specific message is surfaced. The loading flag clears on
    /// every arm; a stale response does not touch the store at all.
    pub async fn load(&self) {
        let generation = self.store.begin_operation();
        let outcome = self.remote.list().await;

        self.store.apply_if_current(generation, |state| {
            match outcome {
                Ok(records) => {
                    tracing::debug!(kind = R::BASE, count = records.len(), "collection loaded");
                    state.set_collection(records);
                    state.clear_error();
                }
                Err(e) => {
                    tracing::warn!(kind = R::BASE, error = %e, "load failed");
                    state.set_error(format!("Failed to load {}: {e}", R::PLURAL));
                }
            }
            state.set_loading(false);
        });
    }

    /// Create a record from the given field set.
    ///
    /// A blank required field makes this a silent no-op: no remote call,
    /// no error. On success the server's record (with its assigned id)
    /// is appended and the create form resets; on failure the form and
    /// the user's input stay put for retry.
    pub async fn create(&self, fields: R::Fields) {
        let missing = validate::missing_required(&fields);
        if !missing.is_empty() {
            tracing::debug!(kind = R::BASE, ?missing, "create skipped: required field empty");
            return;
        }

        let fields = fields.trimmed();
        let generation = self.store.begin_operation();
        let outcome = self.remote.create(&fields).await;

        self.store.apply_if_current(generation, |state| match outcome {
            Ok(record) => {
                tracing::debug!(kind = R::BASE, id = record.id(), "record created");
                state.append_record(record);
                state.reset_create_form();
                state.clear_error();
            }
            Err(e) => {
                tracing::warn!(kind = R::BASE, error = %e, "create failed");
                state.set_error(format!("Failed to create {}: {e}", R::SINGULAR));
            }
        });
    }

    /// Push the draft's current field values to the remote.
    ///
    /// No client-side validation here, unlike create. On success the
    /// confirmed record replaces its predecessor and the draft closes;
    /// on failure the draft stays open and intact for retry.
    pub async fn update(&self, draft: R) {
        let id = draft.id();
        let generation = self.store.begin_operation();
        let outcome = self.remote.update(id, &draft.fields()).await;

        self.store.apply_if_current(generation, |state| match outcome {
            Ok(record) => {
                tracing::debug!(kind = R::BASE, id, "record updated");
                state.replace_record(id, record);
                state.cancel_edit();
                state.clear_error();
            }
            Err(e) => {
                tracing::warn!(kind = R::BASE, id, error = %e, "update failed");
                state.set_error(format!("Failed to update {}: {e}", R::SINGULAR));
            }
        });
    }

    /// Delete a record. No optimistic removal: the local copy goes only
    /// after the server confirms.
    pub async fn remove(&self, id: RecordId) {
        let generation = self.store.begin_operation();
        let outcome = self.remote.delete(id).await;

        self.store.apply_if_current(generation, |state| match outcome {
            Ok(()) => {
                tracing::debug!(kind = R::BASE, id, "record deleted");
                state.remove_record(id);
                state.clear_error();
            }
            Err(e) => {
                tracing::warn!(kind = R::BASE, id, error = %e, "delete failed");
                state.set_error(format!("Failed to delete {}: {e}", R::SINGULAR));
            }
        });
    }
}
