//! Admin API Wrappers
//!
//! Frontend bindings to the `/_/…` REST endpoints, organized by domain.

mod notes;
mod servers;
mod nics;
mod link_aggrs;
mod images;

use std::sync::OnceLock;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AdminConfig;
use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use notes::*;
pub use servers::*;
pub use nics::*;
pub use link_aggrs::*;
pub use images::*;

static CONFIG: OnceLock<AdminConfig> = OnceLock::new();

/// Must run before the first request; later calls are ignored.
pub fn init(config: AdminConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("[API] already initialised");
    }
}

fn url(segments: &[&str]) -> ApiResult<String> {
    let config = CONFIG
        .get()
        .ok_or_else(|| ApiError::Config("API client not initialised".to_string()))?;
    if config.api_base.is_empty() {
        return Err(ApiError::Config("api_base is empty".to_string()));
    }
    Ok(config.url(segments))
}

fn request(method: Method, segments: &[&str]) -> ApiResult<RequestBuilder> {
    let url = url(segments)?;
    log::debug!("[API] {} {}", method, url);
    Ok(reqwest::Client::new()
        .request(method, url)
        .header("Accept", "application/json"))
}

async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status: status.as_u16(), body })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

async fn get_json<T: DeserializeOwned>(segments: &[&str], query: &[(&str, &str)]) -> ApiResult<T> {
    let builder = request(Method::GET, segments)?.query(query);
    decode(send(builder).await?).await
}

async fn send_json<B, T>(method: Method, segments: &[&str], body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let builder = request(method, segments)?.json(body);
    decode(send(builder).await?).await
}

/// Send `body` (if any) and ignore whatever the backend answers with
async fn send_ignore<B>(method: Method, segments: &[&str], body: Option<&B>) -> ApiResult<()>
where
    B: Serialize + ?Sized,
{
    let mut builder = request(method, segments)?;
    if let Some(body) = body {
        builder = builder.json(body);
    }
    send(builder).await?;
    Ok(())
}
