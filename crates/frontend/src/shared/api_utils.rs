//! API utilities for frontend-backend communication
//!
//! Every request goes through [`api_config`], which resolves the base URL
//! from the Settings override, the build-time `SALESHUB_API_URL` and finally
//! the page location.

use crate::shared::storage;
use contracts::shared::api_config::{ApiConfig, PageLocation, API_BASE_STORAGE_KEY};
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn page_location() -> Option<PageLocation> {
    let location = web_sys::window()?.location();
    Some(PageLocation {
        protocol: location.protocol().ok()?,
        hostname: location.hostname().ok()?,
    })
}

/// Current API configuration. Cheap; re-resolved on every call so a change on
/// the Settings screen applies to the next request.
pub fn api_config() -> ApiConfig {
    ApiConfig::resolve(
        storage::load(API_BASE_STORAGE_KEY).as_deref(),
        option_env!("SALESHUB_API_URL"),
        page_location(),
    )
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders/15");
/// ```
pub fn api_url(path: &str) -> String {
    api_config().url(path)
}

async fn read_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_response(status, &body)
}

/// GET a JSON document.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body. Any 2xx is success; the response body is ignored.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }
    Ok(())
}
