//! Contact — the single entity the roster manages.
//!
//! Identity metadata (`contact_id`, `created_at`) is assigned once at
//! creation and never changes; update replaces the field set wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The validated field set of a contact, as produced by form binding.
///
/// Optional fields are `None` when the submitted value was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
  pub name:    String,
  pub email:   String,
  pub phone:   Option<String>,
  pub company: Option<String>,
  pub notes:   Option<String>,
}

/// A roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
  pub contact_id: Uuid,
  pub created_at: DateTime<Utc>,
  pub name:       String,
  pub email:      String,
  pub phone:      Option<String>,
  pub company:    Option<String>,
  pub notes:      Option<String>,
}

impl Contact {
  /// Build a new contact from a validated field set, assigning identity.
  pub fn new(input: ContactInput) -> Self {
    Self {
      contact_id: Uuid::new_v4(),
      created_at: Utc::now(),
      name:       input.name,
      email:      input.email,
      phone:      input.phone,
      company:    input.company,
      notes:      input.notes,
    }
  }

  /// Replace the field set, keeping `contact_id` and `created_at`.
  pub fn apply(&mut self, input: ContactInput) {
    self.name = input.name;
    self.email = input.email;
    self.phone = input.phone;
    self.company = input.company;
    self.notes = input.notes;
  }

  /// The field set currently held by this contact.
  pub fn input(&self) -> ContactInput {
    ContactInput {
      name:    self.name.clone(),
      email:   self.email.clone(),
      phone:   self.phone.clone(),
      company: self.company.clone(),
      notes:   self.notes.clone(),
    }
  }
}
