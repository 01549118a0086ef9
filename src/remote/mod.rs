//! Remote collection access.
//!
//! This module provides the interface to the remote collection API: one
//! REST resource per kind, all with the same shape. The sync controllers
//! depend only on the [`CollectionResource`] trait; [`ApiClient`] is the
//! factory for HTTP-backed implementations of it.

pub mod error;
pub mod http;

use crate::error::Result;
use crate::resource::{RecordId, Resource};

pub use http::{ApiClient, RestCollection};

/// Common interface to one remote collection resource.
///
/// One implementor per transport; the HTTP one is [`RestCollection`].
/// Tests substitute in-memory fakes at this seam.
pub trait CollectionResource<R: Resource>: Send + Sync {
    /// Fetch the full collection, in server order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<R>>> + Send;

    /// Create a record; the returned record carries the server-assigned id.
    fn create(&self, fields: &R::Fields) -> impl std::future::Future<Output = Result<R>> + Send;

    /// Update the record with the given id from the full field set.
    fn update(
        &self,
        id: RecordId,
        fields: &R::Fields,
    ) -> impl std::future::Future<Output = Result<R>> + Send;

    /// Delete the record with the given id. Any 2xx is success.
    fn delete(&self, id: RecordId) -> impl std::future::Future<Output = Result<()>> + Send;
}
