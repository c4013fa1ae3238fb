//! The `ContactRepository` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The web layer depends on this abstraction, not on any concrete backend.
//! Each `save`/`delete` call is its own commit; no transaction spans calls.

use std::future::Future;

use uuid::Uuid;

use crate::contact::Contact;

/// Abstraction over contact persistence.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn find(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// All contacts, ordered by name (case-insensitive), then creation time.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Insert or replace `contact`, keyed by its id.
  fn save<'a>(
    &'a self,
    contact: &'a Contact,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove a contact by id. Returns `true` iff a row was removed.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
