//! The resource store: the authoritative local copy of one collection
//! plus the transient UI state of its panel.
//!
//! No remote calls originate here. The store is the reconciliation
//! target only; the sync controller applies deltas through
//! [`Store::apply_if_current`], and local-only toggles (form visibility,
//! edit selection) go through the convenience methods, which never touch
//! the remote.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::resource::{RecordId, Resource};

/// Snapshot-able panel state for one resource kind.
#[derive(Debug, Clone)]
pub struct PanelState<R: Resource> {
    /// The local copy of the collection, in server response order.
    /// Never two records with the same id.
    pub records: Vec<R>,
    /// True only until the first list fetch resolves.
    pub loading: bool,
    /// Last human-readable failure, cleared on the next successful
    /// operation. At most one per panel.
    pub error: Option<String>,
    /// Edit-in-progress copy of one record. Never merged into `records`
    /// before the remote confirms the update.
    pub draft: Option<R>,
    /// Structured create-form value, reset after a successful create.
    pub create_form: R::Fields,
    pub show_create: bool,
    pub show_edit: bool,
}

impl<R: Resource> Default for PanelState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            draft: None,
            create_form: R::Fields::default(),
            show_create: false,
            show_edit: false,
        }
    }
}

impl<R: Resource> PanelState<R> {
    /// Replace the collection wholesale (after a list fetch).
    pub fn set_collection(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Insert one record at the end (after a create).
    pub fn append_record(&mut self, record: R) {
        self.records.push(record);
    }

    /// Swap the record matching `id` (after an update). A miss is a
    /// caller bug, not a runtime error: the store logs and moves on.
    pub fn replace_record(&mut self, id: RecordId, record: R) {
        match self.records.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => *existing = record,
            None => {
                tracing::warn!(kind = R::BASE, id, "replace_record: no record with that id");
            }
        }
    }

    /// Delete the record matching `id` (after a delete).
    pub fn remove_record(&mut self, id: RecordId) {
        self.records.retain(|record| record.id() != id);
    }

    /// Open a draft on a copy of `record`. The collection is untouched.
    pub fn begin_edit(&mut self, record: R) {
        self.draft = Some(record);
        self.show_edit = true;
    }

    /// Discard the draft and close the edit modal.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
        self.show_edit = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Reset the create form and hide it (after a successful create).
    pub fn reset_create_form(&mut self) {
        self.create_form = R::Fields::default();
        self.show_create = false;
    }
}

/// Shared handle on one panel's state, plus the generation counter that
/// stamps in-flight operations.
///
/// Overlapping operations are not queued; instead every remote operation
/// captures a generation at issue time and reconciles only while that
/// generation is still current. A newer operation, or [`Store::invalidate`]
/// on teardown, bumps the counter so stale responses are discarded instead
/// of overwriting newer state.
pub struct Store<R: Resource> {
    state: Mutex<PanelState<R>>,
    generation: AtomicU64,
}

impl<R: Resource> Store<R> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PanelState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// A clone of the current state for the presentation layer.
    pub fn snapshot(&self) -> PanelState<R> {
        self.state.lock().clone()
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Stamp a new remote operation: bumps the generation and returns
    /// the value the operation must present to reconcile.
    pub fn begin_operation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Detach the store: everything still in flight reconciles against
    /// a stale generation and is discarded.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Apply a reconciliation delta if `generation` is still current.
    /// Returns false (leaving the state untouched) when it is stale.
    pub fn apply_if_current<F>(&self, generation: u64, apply: F) -> bool
    where
        F: FnOnce(&mut PanelState<R>),
    {
        let mut state = self.state.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                kind = R::BASE,
                generation,
                current = self.generation.load(Ordering::SeqCst),
                "discarding stale reconciliation"
            );
            return false;
        }
        apply(&mut state);
        true
    }

    // Local-only UI toggles. None of these touch the remote.

    pub fn begin_edit(&self, record: R) {
        self.state.lock().begin_edit(record);
    }

    pub fn cancel_edit(&self) {
        self.state.lock().cancel_edit();
    }

    pub fn show_create_form(&self) {
        self.state.lock().show_create = true;
    }

    pub fn hide_create_form(&self) {
        self.state.lock().show_create = false;
    }

    /// Merge an edit into the create form.
    pub fn edit_create_form<F>(&self, edit: F)
    where
        F: FnOnce(&mut R::Fields),
    {
        edit(&mut self.state.lock().create_form);
    }

    /// Merge an edit into the open draft, if any.
    pub fn edit_draft<F>(&self, edit: F)
    where
        F: FnOnce(&mut R),
    {
        if let Some(draft) = self.state.lock().draft.as_mut() {
            edit(draft);
        }
    }
}

impl<R: Resource> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
