//! Handlers for the `/contacts` resource.
//!
//! | Method | Path | Capability |
//! |--------|------|------------|
//! | `GET`    | `/contacts` | Read |
//! | `GET`    | `/contacts/new` | Write |
//! | `POST`   | `/contacts` | Write |
//! | `GET`    | `/contacts/:id` | Read |
//! | `GET`    | `/contacts/:id/edit` | Update |
//! | `PUT`    | `/contacts/:id` | Update |
//! | `DELETE` | `/contacts/:id` | Delete |
//!
//! Every handler checks its capability before any store access. Validation
//! failures re-render the originating form; they are never error responses.

use axum::{
  Form,
  extract::{Path, Query, State},
  response::{Html, IntoResponse, Redirect, Response},
};
use uuid::Uuid;

use roster_core::{Capability, Contact, ContactRepository, Page};

use crate::{
  AppState,
  auth::Actor,
  error::Error,
  forms::{ContactForm, DeleteForm, RawForm},
  view,
};

/// Contacts per listing page.
const PER_PAGE: usize = 50;

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /contacts?page=N`
pub async fn index<R>(
  State(state): State<AppState<R>>,
  actor: Actor,
  Query(params): Query<RawForm>,
) -> Result<Html<String>, Error>
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  actor.require(Capability::Read)?;

  // Unparseable or non-positive page numbers fall back to the first page.
  let number: i64 = params
    .get("page")
    .and_then(|v| v.parse().ok())
    .unwrap_or(1);

  let contacts = state
    .repo
    .find_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let page = Page::slice(contacts, number, PER_PAGE);
  Ok(Html(view::index_page(&page)))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `GET /contacts/new`
pub async fn new<R>(
  State(_state): State<AppState<R>>,
  actor: Actor,
) -> Result<Html<String>, Error>
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  actor.require(Capability::Write)?;
  Ok(Html(view::new_page(&ContactForm::default(), &[])))
}

/// `POST /contacts`
pub async fn create<R>(
  State(state): State<AppState<R>>,
  actor: Actor,
  Form(raw): Form<RawForm>,
) -> Result<Response, Error>
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  actor.require(Capability::Write)?;

  let form = ContactForm::bind(&raw);
  match form.validate() {
    Ok(input) => {
      let contact = Contact::new(input);
      state
        .repo
        .save(&contact)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
      tracing::info!(contact_id = %contact.contact_id, "contact created");
      Ok(
        Redirect::to(&format!("/contacts/{}", contact.contact_id))
          .into_response(),
      )
    }
    Err(errors) => Ok(Html(view::new_page(&form, &errors)).into_response()),
  }
}

// ─── Show ────────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn show<R>(
  State(state): State<AppState<R>>,
  actor: Actor,
  Path(id): Path<Uuid>,
) -> Result<Html<String>, Error>
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  actor.require(Capability::Read)?;

  let contact = state
    .repo
    .find(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;
  Ok(Html(view::show_page(&contact)))
}

// ─── Edit / update ───────────────────────────────────────────────────────────

/// `GET /contacts/:id/edit`
pub async fn edit<R>(
  State(state): State<AppState<R>>,
  actor: Actor,
  Path(id): Path<Uuid>,
) -> Result<Html<String>, Error>
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  actor.require(Capability::Update)?;

  let contact = state
    .repo
    .find(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;
  Ok(Html(view::edit_page(
    contact.contact_id,
    &ContactForm::from_contact(&contact),
    &[],
    false,
  )))
}

/// `PUT /contacts/:id`
///
/// On success this re-renders the edit view with a confirmation banner
/// instead of redirecting; only create and delete redirect.
pub async fn update<R>(
  State(state): State<AppState<R>>,
  actor: Actor,
  Path(id): Path<Uuid>,
  Form(raw): Form<RawForm>,
) -> Result<Html<String>, Error>
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  actor.require(Capability::Update)?;

  let mut contact = state
    .repo
    .find(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;

  let form = ContactForm::bind(&raw);
  match form.validate() {
    Ok(input) => {
      contact.apply(input);
      state
        .repo
        .save(&contact)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
      tracing::info!(contact_id = %contact.contact_id, "contact updated");
      Ok(Html(view::edit_page(
        contact.contact_id,
        &ContactForm::from_contact(&contact),
        &[],
        true,
      )))
    }
    Err(errors) => {
      Ok(Html(view::edit_page(contact.contact_id, &form, &errors, false)))
    }
  }
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id`
///
/// An invalid confirmation form skips deletion without touching the store.
/// The response is a redirect to the listing either way.
pub async fn remove<R>(
  State(state): State<AppState<R>>,
  actor: Actor,
  Path(id): Path<Uuid>,
  Form(raw): Form<RawForm>,
) -> Result<Response, Error>
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  actor.require(Capability::Delete)?;

  if DeleteForm::bind(&raw).is_some() {
    let removed = state
      .repo
      .delete(id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    if !removed {
      return Err(Error::NotFound);
    }
    tracing::info!(contact_id = %id, "contact deleted");
  }

  Ok(Redirect::to("/contacts").into_response())
}
