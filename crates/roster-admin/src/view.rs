//! Server-rendered HTML for the admin pages.
//!
//! Markup is built by hand; every interpolated value passes through [`esc`].
//! Edit and delete submissions ride on POST with a `_method` field, rewritten
//! by the router's method-override layer.

use roster_core::{Contact, Page};
use uuid::Uuid;

use crate::forms::{ContactForm, FieldError};

/// Escape text for interpolation into HTML element or attribute content.
pub fn esc(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

fn layout(title: &str, body: &str) -> String {
  format!(
    "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
     <title>{title} — Roster</title>\n</head>\n<body>\n\
     <nav><a href=\"/contacts\">Contacts</a></nav>\n{body}</body>\n</html>\n",
    title = esc(title),
  )
}

// ─── Listing ─────────────────────────────────────────────────────────────────

pub fn index_page(page: &Page<Contact>) -> String {
  let mut rows = String::new();
  for contact in &page.items {
    rows.push_str(&format!(
      "<tr class=\"contact-row\">\
       <td><a href=\"/contacts/{id}\">{name}</a></td>\
       <td>{email}</td><td>{company}</td></tr>\n",
      id = contact.contact_id,
      name = esc(&contact.name),
      email = esc(&contact.email),
      company = esc(contact.company.as_deref().unwrap_or("")),
    ));
  }

  let body = format!(
    "<h1>Contacts</h1>\n\
     <p><a href=\"/contacts/new\">New contact</a></p>\n\
     <table>\n<thead><tr><th>Name</th><th>Email</th><th>Company</th></tr></thead>\n\
     <tbody>\n{rows}</tbody>\n</table>\n{nav}",
    nav = page_nav(page),
  );
  layout("Contacts", &body)
}

fn page_nav(page: &Page<Contact>) -> String {
  let mut nav = format!(
    "<p class=\"pagination\">Page {} of {}",
    page.number, page.total_pages
  );
  if page.has_prev() {
    nav.push_str(&format!(
      " <a rel=\"prev\" href=\"/contacts?page={}\">Previous</a>",
      page.number - 1
    ));
  }
  if page.has_next() {
    nav.push_str(&format!(
      " <a rel=\"next\" href=\"/contacts?page={}\">Next</a>",
      page.number + 1
    ));
  }
  nav.push_str("</p>\n");
  nav
}

// ─── Forms ───────────────────────────────────────────────────────────────────

pub fn new_page(form: &ContactForm, errors: &[FieldError]) -> String {
  let body = format!(
    "<h1>New contact</h1>\n\
     <form method=\"post\" action=\"/contacts\">\n{fields}\
     <button type=\"submit\">Create</button>\n</form>\n",
    fields = contact_fields(form, errors),
  );
  layout("New contact", &body)
}

pub fn edit_page(
  id: Uuid,
  form: &ContactForm,
  errors: &[FieldError],
  updated: bool,
) -> String {
  let banner = if updated {
    "<p class=\"notice\">Contact updated.</p>\n"
  } else {
    ""
  };
  let body = format!(
    "<h1>Edit contact</h1>\n{banner}\
     <form method=\"post\" action=\"/contacts/{id}\">\n\
     <input type=\"hidden\" name=\"_method\" value=\"PUT\">\n{fields}\
     <button type=\"submit\">Update</button>\n</form>\n{delete}",
    fields = contact_fields(form, errors),
    delete = delete_form(id),
  );
  layout("Edit contact", &body)
}

fn contact_fields(form: &ContactForm, errors: &[FieldError]) -> String {
  format!(
    "{name}{email}{phone}{company}\
     <p><label>Notes<br>\
     <textarea name=\"notes\" rows=\"4\">{notes}</textarea></label>{notes_err}</p>\n",
    name = text_field("Name", "name", &form.name, errors),
    email = text_field("Email", "email", &form.email, errors),
    phone = text_field("Phone", "phone", &form.phone, errors),
    company = text_field("Company", "company", &form.company, errors),
    notes = esc(&form.notes),
    notes_err = field_error(errors, "notes"),
  )
}

fn text_field(
  label: &str,
  name: &str,
  value: &str,
  errors: &[FieldError],
) -> String {
  format!(
    "<p><label>{label}<br>\
     <input type=\"text\" name=\"{name}\" value=\"{value}\"></label>{err}</p>\n",
    value = esc(value),
    err = field_error(errors, name),
  )
}

fn field_error(errors: &[FieldError], field: &str) -> String {
  errors
    .iter()
    .filter(|e| e.field == field)
    .map(|e| format!("<span class=\"field-error\">{}</span>", e.message))
    .collect()
}

// ─── Detail ──────────────────────────────────────────────────────────────────

pub fn show_page(contact: &Contact) -> String {
  let optional = |value: &Option<String>| esc(value.as_deref().unwrap_or("—"));
  let body = format!(
    "<h1>{name}</h1>\n<dl>\n\
     <dt>Email</dt><dd>{email}</dd>\n\
     <dt>Phone</dt><dd>{phone}</dd>\n\
     <dt>Company</dt><dd>{company}</dd>\n\
     <dt>Notes</dt><dd>{notes}</dd>\n\
     <dt>Created</dt><dd>{created}</dd>\n</dl>\n\
     <p><a href=\"/contacts/{id}/edit\">Edit</a></p>\n{delete}",
    name = esc(&contact.name),
    email = esc(&contact.email),
    phone = optional(&contact.phone),
    company = optional(&contact.company),
    notes = optional(&contact.notes),
    created = contact.created_at.format("%Y-%m-%d %H:%M UTC"),
    id = contact.contact_id,
    delete = delete_form(contact.contact_id),
  );
  layout(&contact.name, &body)
}

fn delete_form(id: Uuid) -> String {
  format!(
    "<form method=\"post\" action=\"/contacts/{id}\">\n\
     <input type=\"hidden\" name=\"_method\" value=\"DELETE\">\n\
     <input type=\"hidden\" name=\"confirm\" value=\"{id}\">\n\
     <button type=\"submit\">Delete</button>\n</form>\n"
  )
}

// ─── Error pages ─────────────────────────────────────────────────────────────

pub fn error_page(title: &str, message: &str) -> String {
  let body = format!(
    "<h1>{title}</h1>\n<p>{message}</p>\n",
    title = esc(title),
    message = esc(message),
  );
  layout(title, &body)
}

#[cfg(test)]
mod tests {
  use super::*;
  use roster_core::{Contact, ContactInput};

  fn contact() -> Contact {
    Contact::new(ContactInput {
      name:    "Alice <script>".to_string(),
      email:   "alice@example.com".to_string(),
      phone:   None,
      company: None,
      notes:   None,
    })
  }

  #[test]
  fn esc_covers_html_metacharacters() {
    assert_eq!(
      esc(r#"<a href="x">&'"#),
      "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
    );
  }

  #[test]
  fn interpolated_names_are_escaped() {
    let page = show_page(&contact());
    assert!(page.contains("Alice &lt;script&gt;"));
    assert!(!page.contains("<script>"));
  }

  #[test]
  fn edit_page_banner_only_when_updated() {
    let c = contact();
    let form = ContactForm::from_contact(&c);
    let with = edit_page(c.contact_id, &form, &[], true);
    let without = edit_page(c.contact_id, &form, &[], false);
    assert!(with.contains("Contact updated."));
    assert!(!without.contains("Contact updated."));
  }

  #[test]
  fn field_errors_render_next_to_their_field() {
    let form = ContactForm::default();
    let errors = [FieldError { field: "email", message: "is required" }];
    let page = new_page(&form, &errors);
    assert!(page.contains("field-error"));
    assert!(page.contains("is required"));
  }

  #[test]
  fn delete_form_carries_confirm_and_method_override() {
    let c = contact();
    let page = show_page(&c);
    assert!(page.contains("name=\"_method\" value=\"DELETE\""));
    assert!(
      page.contains(&format!("name=\"confirm\" value=\"{}\"", c.contact_id))
    );
  }
}
