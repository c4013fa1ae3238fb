//! Form binding and validation.
//!
//! Binding never fails: it captures whatever the client submitted so an
//! invalid form can be re-rendered with the values in place. Validation is a
//! separate step producing either a typed [`ContactInput`] or field errors.

use std::collections::HashMap;

use uuid::Uuid;

use roster_core::{Contact, ContactInput};

/// An urlencoded request body, as delivered by `axum::Form`.
pub type RawForm = HashMap<String, String>;

/// A validation failure on a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
  pub field:   &'static str,
  pub message: &'static str,
}

// ─── Contact form ────────────────────────────────────────────────────────────

/// The contact form as submitted — raw values, whitespace-trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub company: String,
  pub notes:   String,
}

impl ContactForm {
  /// Capture the submitted values. Missing fields bind as empty.
  pub fn bind(raw: &RawForm) -> Self {
    let value = |key: &str| -> String {
      raw.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    };
    Self {
      name:    value("name"),
      email:   value("email"),
      phone:   value("phone"),
      company: value("company"),
      notes:   value("notes"),
    }
  }

  /// Populate the form from an existing contact, for the edit view.
  pub fn from_contact(contact: &Contact) -> Self {
    Self {
      name:    contact.name.clone(),
      email:   contact.email.clone(),
      phone:   contact.phone.clone().unwrap_or_default(),
      company: contact.company.clone().unwrap_or_default(),
      notes:   contact.notes.clone().unwrap_or_default(),
    }
  }

  /// Check the schema and produce the typed field set, or the reasons not to.
  pub fn validate(&self) -> Result<ContactInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    if self.name.is_empty() {
      errors.push(FieldError { field: "name", message: "is required" });
    }
    if self.email.is_empty() {
      errors.push(FieldError { field: "email", message: "is required" });
    } else if !self.email.contains('@') {
      errors.push(FieldError {
        field:   "email",
        message: "is not a valid email address",
      });
    }

    if !errors.is_empty() {
      return Err(errors);
    }

    Ok(ContactInput {
      name:    self.name.clone(),
      email:   self.email.clone(),
      phone:   none_if_empty(&self.phone),
      company: none_if_empty(&self.company),
      notes:   none_if_empty(&self.notes),
    })
  }
}

fn none_if_empty(value: &str) -> Option<String> {
  if value.is_empty() {
    None
  } else {
    Some(value.to_string())
  }
}

// ─── Delete-confirmation form ────────────────────────────────────────────────

/// The delete-confirmation form: a hidden `confirm` field carrying the
/// contact id, rendered into the detail and edit views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteForm {
  pub confirm: Uuid,
}

impl DeleteForm {
  /// `None` when the confirmation is missing or malformed; the delete
  /// handler then skips deletion without touching the store.
  pub fn bind(raw: &RawForm) -> Option<Self> {
    let confirm = Uuid::parse_str(raw.get("confirm")?.trim()).ok()?;
    Some(Self { confirm })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(pairs: &[(&str, &str)]) -> RawForm {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn bind_trims_and_defaults_missing_fields() {
    let form = ContactForm::bind(&raw(&[
      ("name", "  Alice  "),
      ("email", "alice@example.com"),
    ]));
    assert_eq!(form.name, "Alice");
    assert_eq!(form.email, "alice@example.com");
    assert_eq!(form.phone, "");
    assert_eq!(form.notes, "");
  }

  #[test]
  fn valid_form_produces_input_with_normalised_optionals() {
    let form = ContactForm::bind(&raw(&[
      ("name", "Alice"),
      ("email", "alice@example.com"),
      ("phone", ""),
      ("company", "Acme"),
    ]));
    let input = form.validate().expect("valid");
    assert_eq!(input.name, "Alice");
    assert_eq!(input.phone, None);
    assert_eq!(input.company.as_deref(), Some("Acme"));
  }

  #[test]
  fn missing_name_and_email_both_reported() {
    let errors = ContactForm::bind(&raw(&[])).validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, ["name", "email"]);
  }

  #[test]
  fn email_without_at_sign_is_rejected() {
    let errors = ContactForm::bind(&raw(&[
      ("name", "Alice"),
      ("email", "not-an-address"),
    ]))
    .validate()
    .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "email");
  }

  #[test]
  fn delete_form_requires_well_formed_confirm() {
    let id = Uuid::new_v4();
    let bound = DeleteForm::bind(&raw(&[("confirm", &id.to_string())]));
    assert_eq!(bound, Some(DeleteForm { confirm: id }));

    assert!(DeleteForm::bind(&raw(&[])).is_none());
    assert!(DeleteForm::bind(&raw(&[("confirm", "not-a-uuid")])).is_none());
  }
}
