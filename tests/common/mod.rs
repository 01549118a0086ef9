//! Shared test support: an in-memory scriptable collection resource and
//! record builders.
//!
//! [`FakeCollection`] stands in for the HTTP transport at the
//! `CollectionResource` seam. It keeps records in memory, assigns ids
//! the way the server would, records every call, and can be scripted to
//! fail or to stall until released (for in-flight interleaving tests).

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::Notify;

use castellan::error::{CastellanError, Result};
use castellan::remote::CollectionResource;
use castellan::resource::{
    Contractor, ContractorFields, Issue, IssueFields, Property, PropertyFields, RecordId, Resource,
    Tenant, TenantFields,
};

type BuildFn<R> = dyn Fn(RecordId, &<R as Resource>::Fields) -> R + Send + Sync;

struct FakeInner<R: Resource> {
    records: Mutex<Vec<R>>,
    next_id: AtomicU64,
    failures: Mutex<VecDeque<(u16, String)>>,
    calls: Mutex<Vec<&'static str>>,
    gate: Mutex<Option<Arc<Notify>>>,
    build: Box<BuildFn<R>>,
}

/// In-memory stand-in for one remote collection resource.
pub struct FakeCollection<R: Resource> {
    inner: Arc<FakeInner<R>>,
}

impl<R: Resource> Clone for FakeCollection<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Resource> FakeCollection<R> {
    pub fn new(build: impl Fn(RecordId, &R::Fields) -> R + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(FakeInner {
                records: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                failures: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
                gate: Mutex::new(None),
                build: Box::new(build),
            }),
        }
    }

    /// Seed the remote with records; the next assigned id lands above them.
    pub fn with_records(self, records: Vec<R>) -> Self {
        self.replace_records(records);
        self
    }

    /// Replace the remote's records mid-test.
    pub fn replace_records(&self, records: Vec<R>) {
        let max_id = records.iter().map(|r| r.id()).max().unwrap_or(0);
        self.inner.next_id.store(max_id + 1, Ordering::SeqCst);
        *self.inner.records.lock() = records;
    }

    /// Pin the id the server assigns to the next created record.
    pub fn with_next_id(self, id: RecordId) -> Self {
        self.inner.next_id.store(id, Ordering::SeqCst);
        self
    }

    /// Script the next operation to fail with the given status.
    pub fn fail_next(&self, status: u16, message: &str) {
        self.inner
            .failures
            .lock()
            .push_back((status, message.to_string()));
    }

    /// Make the next operation stall until the returned handle is
    /// notified. Used to interleave in-flight requests deterministically.
    pub fn hold_next(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.inner.gate.lock() = Some(Arc::clone(&gate));
        gate
    }

    /// Every operation name invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.calls.lock().clone()
    }

    /// The fake server's current records.
    pub fn records(&self) -> Vec<R> {
        self.inner.records.lock().clone()
    }

    /// The server side of an operation runs at request time; only the
    /// response is delayed. So: log the call, take any scripted failure,
    /// let the caller compute/apply the result, then stall on the gate
    /// before the "response" is returned.
    fn begin(&self, op: &'static str) -> Option<CastellanError> {
        self.inner.calls.lock().push(op);
        self.inner
            .failures
            .lock()
            .pop_front()
            .map(|(status, message)| CastellanError::Api { status, message })
    }

    async fn deliver<T>(&self, response: Result<T>) -> Result<T> {
        let gate = self.inner.gate.lock().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        response
    }

    fn not_found(id: RecordId) -> CastellanError {
        CastellanError::Api {
            status: 404,
            message: format!("{} {id} not found", R::SINGULAR),
        }
    }
}

impl<R: Resource> CollectionResource<R> for FakeCollection<R> {
    async fn list(&self) -> Result<Vec<R>> {
        let response = match self.begin("list") {
            Some(err) => Err(err),
            None => Ok(self.inner.records.lock().clone()),
        };
        self.deliver(response).await
    }

    async fn create(&self, fields: &R::Fields) -> Result<R> {
        let response = match self.begin("create") {
            Some(err) => Err(err),
            None => {
                let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
                let record = (self.inner.build)(id, fields);
                self.inner.records.lock().push(record.clone());
                Ok(record)
            }
        };
        self.deliver(response).await
    }

    async fn update(&self, id: RecordId, fields: &R::Fields) -> Result<R> {
        let response = match self.begin("update") {
            Some(err) => Err(err),
            None => {
                let record = (self.inner.build)(id, fields);
                let mut records = self.inner.records.lock();
                match records.iter_mut().find(|existing| existing.id() == id) {
                    Some(existing) => {
                        *existing = record.clone();
                        Ok(record)
                    }
                    None => Err(Self::not_found(id)),
                }
            }
        };
        self.deliver(response).await
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        let response = match self.begin("delete") {
            Some(err) => Err(err),
            None => {
                let mut records = self.inner.records.lock();
                let before = records.len();
                records.retain(|record| record.id() != id);
                if records.len() == before {
                    Err(Self::not_found(id))
                } else {
                    Ok(())
                }
            }
        };
        self.deliver(response).await
    }
}

// === Builders ===

pub fn fake_tenants() -> FakeCollection<Tenant> {
    FakeCollection::new(|id, fields: &TenantFields| Tenant {
        id,
        name: fields.name.clone(),
        phone_number: fields.phone_number.clone(),
        email: fields.email.clone(),
        landlord_id: fields.landlord_id.clone(),
        property_id: fields.property_id.clone(),
    })
}

pub fn fake_contractors() -> FakeCollection<Contractor> {
    FakeCollection::new(|id, fields: &ContractorFields| Contractor {
        id,
        name: fields.name.clone(),
        phone_number: fields.phone_number.clone(),
        email: fields.email.clone(),
        work: fields.work.clone(),
        landlord_id: fields.landlord_id.clone(),
    })
}

pub fn fake_properties() -> FakeCollection<Property> {
    FakeCollection::new(|id, fields: &PropertyFields| Property {
        id,
        address: fields.address.clone(),
        landlord_id: fields.landlord_id.clone(),
    })
}

pub fn fake_issues() -> FakeCollection<Issue> {
    FakeCollection::new(|id, fields: &IssueFields| Issue {
        id,
        description: fields.description.clone(),
        location: fields.location.clone(),
        action: fields.action.clone(),
        resolved: fields.resolved,
        property_id: fields.property_id.clone(),
    })
}

pub fn tenant(id: RecordId, name: &str) -> Tenant {
    Tenant {
        id,
        name: name.to_string(),
        phone_number: "555-0000".to_string(),
        email: format!("{name}@example.com"),
        landlord_id: "L1".to_string(),
        property_id: None,
    }
}

pub fn tenant_fields(name: &str) -> TenantFields {
    TenantFields {
        name: name.to_string(),
        phone_number: "555-1234".to_string(),
        email: format!("{name}@x.com"),
        landlord_id: "L1".to_string(),
        property_id: None,
    }
}

pub fn issue(id: RecordId, description: &str) -> Issue {
    Issue {
        id,
        description: description.to_string(),
        location: "Kitchen".to_string(),
        action: "Inspect".to_string(),
        resolved: false,
        property_id: None,
    }
}
