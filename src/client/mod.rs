//! HTTP client for the order-lookup endpoint.

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::orders::OrderId;

/// Message surfaced when an error response carries no usable `message` field.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch order";

/// Errors from the order-service HTTP exchange.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, or a success body that is not valid JSON.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// Status line of the rejected response.
        status: StatusCode,
        /// Message extracted from the error body, or the fallback text.
        message: String,
    },

    /// The configured base URL cannot carry additional path segments.
    #[error("base URL {0} cannot be extended with a request path")]
    BaseUrl(Url),
}

/// HTTP client for fetching order documents.
#[derive(Debug, Clone)]
pub struct OrderApi {
    base_url: Url,
    http: Client,
}

impl OrderApi {
    /// Create a new client for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Fetch the raw order document for `id`.
    ///
    /// The identifier is appended to the request path as its own segment, so
    /// reserved characters are percent-encoded rather than spliced into the
    /// URL.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, a non-2xx response, or
    /// a success body that is not valid JSON.
    pub async fn fetch_order(&self, id: &OrderId) -> Result<Value, FetchError> {
        let url = self.order_url(id)?;

        debug!(%url, "requesting order");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        debug!(%status, "order service responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(FetchError::Api {
                status,
                message: error_message(&body),
            });
        }

        Ok(response.json().await?)
    }

    fn order_url(&self, id: &OrderId) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| FetchError::BaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "orders", id.as_str()]);

        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Extract the user-facing message from an error-response body.
///
/// The body should be a JSON object with a `message` field, but the service
/// also answers some failures with plain text; anything unparsable falls back
/// to [`FETCH_FALLBACK_MESSAGE`].
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.to_string())
}
