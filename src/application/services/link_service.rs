//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeAlphabet, generate_code};
use serde_json::json;
use tracing::{debug, info, warn};

/// Service for minting short codes and resolving them.
///
/// # Consistency
///
/// Deduplication and collision checks are separate reads followed by an
/// insert, not one atomic statement. Two concurrent first-time requests for
/// the same long URL can each mint a code; both rows are kept and
/// [`LinkRepository::find_by_long_url`] returns the older one afterwards.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    alphabet: CodeAlphabet,
    max_attempts: usize,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn new(
        link_repository: Arc<L>,
        alphabet: CodeAlphabet,
        max_attempts: usize,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_repository,
            alphabet,
            max_attempts: max_attempts.max(1),
            base_url: base_url.into(),
        }
    }

    /// Returns the short code for `long_url`, minting one if needed.
    ///
    /// The caller is expected to have validated URL syntax and length.
    ///
    /// # Deduplication
    ///
    /// If the URL was shortened before, the existing code is returned and no
    /// row is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeSpaceExhausted`] if every generated candidate
    /// collided within the attempt budget.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn create_or_get(&self, long_url: &str) -> Result<String, AppError> {
        if let Some(existing) = self.link_repository.find_by_long_url(long_url).await? {
            debug!(code = %existing.short_code, "Reusing existing short code");
            return Ok(existing.short_code);
        }

        for attempt in 1..=self.max_attempts {
            let code = generate_code(&self.alphabet).map_err(|e| {
                AppError::internal(
                    "Random number generator unavailable",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            if self.link_repository.exists(&code).await? {
                debug!(code = %code, attempt, "Generated code already taken");
                continue;
            }

            match self
                .link_repository
                .create(NewLink::now(code, long_url.to_string()))
                .await
            {
                Ok(link) => {
                    info!(code = %link.short_code, long_url = %link.long_url, "Created short link");
                    return Ok(link.short_code);
                }
                // Taken between the existence check and the insert.
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Insert collided on short code");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.max_attempts,
            length = self.alphabet.length(),
            charset_size = self.alphabet.charset().len(),
            "Short code space exhausted"
        );
        Err(AppError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn lookup(&self, code: &str) -> Result<String, AppError> {
        self.get_link(code).await.map(|link| link.long_url)
    }

    /// Retrieves the full mapping for a short code.
    ///
    /// # Errors
    ///
    /// Same as [`Self::lookup`].
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Checks whether a short code is in use.
    pub async fn exists(&self, code: &str) -> Result<bool, AppError> {
        self.link_repository.exists(code).await
    }

    /// Builds the public URL for a short code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/r/{}", self.base_url.trim_end_matches('/'), code)
    }
}
