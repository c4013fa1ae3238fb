//! HTTP Basic-auth actor resolution and per-operation capability checks.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use serde::Deserialize;

use roster_core::{Capability, ContactRepository, Role, granted};

use crate::{AppState, error::Error};

/// One configured account.
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub roles:         Vec<Role>,
}

/// Credentials accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub users: Vec<UserConfig>,
}

/// The authenticated identity issuing a request, with its granted role set.
#[derive(Debug, Clone)]
pub struct Actor {
  pub username: String,
  pub roles:    Vec<Role>,
}

impl Actor {
  /// Fail with `Forbidden` unless this actor's role set grants `capability`.
  pub fn require(&self, capability: Capability) -> Result<(), Error> {
    if granted(&self.roles, capability) {
      Ok(())
    } else {
      Err(Error::Forbidden)
    }
  }
}

/// Verify credentials directly from headers and resolve the actor.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<Actor, Error> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(Error::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| Error::Unauthorized)?;
  let creds   = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(Error::Unauthorized)?;

  let user = config
    .users
    .iter()
    .find(|u| u.username == username)
    .ok_or(Error::Unauthorized)?;

  let parsed_hash = PasswordHash::new(&user.password_hash)
    .map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(Actor {
    username: user.username.clone(),
    roles:    user.roles.clone(),
  })
}

impl<R> FromRequestParts<AppState<R>> for Actor
where
  R: ContactRepository + Clone + Send + Sync + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<R>,
  ) -> Result<Self, Self::Rejection> {
    verify_auth(&parts.headers, &state.auth)
  }
}
