//! Blocking JSON-over-HTTP fetch.

mod error;

pub use error::FetchError;

use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use url::Url;

pub const USER_AGENT: &str = "Domkit/0.1";

#[derive(Clone, Debug, Default)]
pub struct FetchOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Relative URLs are resolved against this.
    pub base_url: Option<Url>,
}

impl FetchOptions {
    pub fn post_json(body: &Value) -> Self {
        Self {
            method: Method::POST,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body.to_string()),
            ..Self::default()
        }
    }
}

pub fn resolve_url(url: &str, base: Option<&Url>) -> Result<Url, FetchError> {
    let resolved = match base {
        Some(base) => base.join(url)?,
        None => Url::parse(url)?,
    };
    Ok(resolved)
}

/// Fetch `url` and parse the response body as JSON.
///
/// Any status outside 200..=299 fails with `FetchError::Http` before the
/// body is looked at.
pub fn fetch_json(url: &str, options: &FetchOptions) -> Result<Value, FetchError> {
    let (status, body) = fetch_text(url, options)?;
    decode_json_response(status, &body)
}

/// Like `fetch_json`, deserializing into `T`.
pub fn fetch_json_as<T: DeserializeOwned>(url: &str, options: &FetchOptions) -> Result<T, FetchError> {
    let value = fetch_json(url, options)?;
    Ok(serde_json::from_value(value)?)
}

/// Run `fetch_json` on its own thread and hand the outcome to `cb` there.
pub fn fetch_json_in_background(
    url: String,
    options: FetchOptions,
    cb: Arc<dyn Fn(Result<Value, FetchError>) + Send + Sync>,
) {
    thread::spawn(move || cb(fetch_json(&url, &options)));
}

pub fn decode_json_response(status: u16, body: &str) -> Result<Value, FetchError> {
    if !(200..=299).contains(&status) {
        return Err(FetchError::Http { status });
    }
    Ok(serde_json::from_str(body)?)
}

fn fetch_text(url: &str, options: &FetchOptions) -> Result<(u16, String), FetchError> {
    let start = Instant::now();
    let url = resolve_url(url, options.base_url.as_ref())?;

    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .user_agent(USER_AGENT)
        .build()?;

    let mut request = client
        .request(options.method.clone(), url.clone())
        .header(ACCEPT, "application/json");
    for (name, value) in &options.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &options.body {
        request = request.body(body.clone());
    }

    let resp = request.send()?;
    let status = resp.status().as_u16();
    let body = resp.text()?;
    log::debug!(
        target: "net.fetch",
        "{} {url} -> {status} ({} bytes, {}ms)",
        options.method,
        body.len(),
        start.elapsed().as_millis()
    );
    Ok((status, body))
}
