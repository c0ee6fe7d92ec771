use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

pub const AUTH_HEADER: &str = "x-auth-token";

pub fn http_client(api_key: &str, timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    let mut token = HeaderValue::from_str(api_key).context("api key is not a valid header value")?;
    token.set_sensitive(true);
    headers.insert(HeaderName::from_static(AUTH_HEADER), token);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("bsa_terminal/", env!("CARGO_PKG_VERSION"))),
    );

    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
        .context("failed to build http client")
}
