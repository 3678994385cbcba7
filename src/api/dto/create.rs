//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Form submitted to `POST /create`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateForm {
    #[validate(
        url(message = "Invalid URL"),
        length(max = MAX_URL_LENGTH, message = "URL is too long")
    )]
    pub url: String,
}

/// Short link returned after creation or deduplication.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
}
