//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::{HeaderValue, StatusCode, header},
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::view;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
  #[error("forbidden")]
  Forbidden,
  #[error("not found")]
  NotFound,
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => {
        let page = view::error_page("Unauthorized", "Sign in to continue.");
        let mut res =
          (StatusCode::UNAUTHORIZED, Html(page)).into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Basic realm=\"roster\""),
        );
        res
      }
      Error::Forbidden => {
        let page = view::error_page(
          "Access denied",
          "Your account does not have the role required for this action.",
        );
        (StatusCode::FORBIDDEN, Html(page)).into_response()
      }
      Error::NotFound => {
        let page =
          view::error_page("Not found", "No such contact exists.");
        (StatusCode::NOT_FOUND, Html(page)).into_response()
      }
      Error::BadRequest(msg) => {
        let page = view::error_page("Bad request", &msg);
        (StatusCode::BAD_REQUEST, Html(page)).into_response()
      }
      Error::Store(e) => {
        let page = view::error_page("Server error", &e.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
      }
    }
  }
}
