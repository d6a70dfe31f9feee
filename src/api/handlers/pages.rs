//! Handlers for the static informational pages.

use axum::http::StatusCode;
use axum::response::Response;

use crate::api::templates;

pub async fn index() -> Response {
    templates::page("index")
}

pub async fn about() -> Response {
    templates::page("about")
}

pub async fn resume() -> Response {
    templates::page("resume")
}

pub async fn contact() -> Response {
    templates::page("contact")
}

/// Confirmation page for the contact form. The form submits with GET, and
/// whatever query parameters arrive are accepted and ignored.
pub async fn thankyou() -> Response {
    templates::page("thankyou")
}

/// Fallback for every unmapped path.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
