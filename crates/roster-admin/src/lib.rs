//! Admin web layer for Roster.
//!
//! Exposes an axum [`Router`] serving the contact CRUD pages backed by any
//! [`ContactRepository`], with per-operation role checks.

pub mod auth;
pub mod contacts;
pub mod error;
pub mod forms;
pub mod view;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  body::Body,
  extract::Request,
  http::{HeaderMap, Method, StatusCode, header},
  middleware::{self, Next},
  response::{IntoResponse, Redirect, Response},
  routing::get,
};
use roster_core::ContactRepository;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::{AuthConfig, UserConfig};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub users:      Vec<UserConfig>,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<R: ContactRepository> {
  pub repo: Arc<R>,
  pub auth: Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the admin pages.
pub fn router<R>(state: AppState<R>) -> Router
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(|| async { Redirect::to("/contacts") }))
    .route(
      "/contacts",
      get(contacts::index::<R>).post(contacts::create::<R>),
    )
    .route("/contacts/new", get(contacts::new::<R>))
    .route(
      "/contacts/{id}",
      get(contacts::show::<R>)
        .put(contacts::update::<R>)
        .delete(contacts::remove::<R>),
    )
    .route("/contacts/{id}/edit", get(contacts::edit::<R>))
    .with_state(state)
    .layer(middleware::from_fn(method_override))
    .layer(TraceLayer::new_for_http())
}

// ─── Method override ─────────────────────────────────────────────────────────

const FORM_BODY_LIMIT: usize = 64 * 1024;

/// Browser forms can only submit GET and POST. The edit and delete forms ride
/// on POST with a `_method` field, rewritten here before routing.
async fn method_override(req: Request, next: Next) -> Response {
  let (mut parts, body) = req.into_parts();

  if parts.method == Method::POST && is_form_urlencoded(&parts.headers) {
    let bytes = match axum::body::to_bytes(body, FORM_BODY_LIMIT).await {
      Ok(b) => b,
      Err(_) => {
        return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
          .into_response();
      }
    };
    if let Some(method) = overridden_method(&bytes) {
      parts.method = method;
    }
    return next.run(Request::from_parts(parts, Body::from(bytes))).await;
  }

  next.run(Request::from_parts(parts, body)).await
}

fn is_form_urlencoded(headers: &HeaderMap) -> bool {
  headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Scan an urlencoded body for a `_method` pair. Only PUT and DELETE may be
/// assumed; anything else leaves the method as POST.
fn overridden_method(body: &[u8]) -> Option<Method> {
  let body = std::str::from_utf8(body).ok()?;
  for pair in body.split('&') {
    let Some((key, value)) = pair.split_once('=') else {
      continue;
    };
    if key == "_method" {
      return match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
      };
    }
  }
  None
}

// ─── Integration tests ────────────────────────────────────────────────────────
