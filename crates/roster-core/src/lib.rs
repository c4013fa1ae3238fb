//! Core types and trait definitions for the Roster contact admin.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod access;
pub mod contact;
pub mod page;
pub mod repo;

pub use access::{Capability, Role, granted};
pub use contact::{Contact, ContactInput};
pub use page::Page;
pub use repo::ContactRepository;
