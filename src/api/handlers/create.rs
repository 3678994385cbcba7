//! Handler for link creation.

use axum::{Form, Json, extract::State};
use validator::Validate;

use crate::api::dto::create::{CreateForm, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL submitted as a form.
///
/// # Endpoint
///
/// `POST /create` with `application/x-www-form-urlencoded` body `url=...`
///
/// Submitting a URL that was shortened before returns the existing code.
///
/// # Response
///
/// ```json
/// {
///   "code": "aB3xYz",
///   "short_url": "http://localhost:3000/r/aB3xYz",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL is malformed or longer than 2048 characters
/// - 503 Service Unavailable if no free code was found within the attempt budget
/// - 500 Internal Server Error on database errors
pub async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateForm>,
) -> Result<Json<CreateResponse>, AppError> {
    form.validate()?;

    let code = state.link_service.create_or_get(&form.url).await?;
    let short_url = state.link_service.short_url(&code);

    Ok(Json(CreateResponse {
        code,
        short_url,
        long_url: form.url,
    }))
}
