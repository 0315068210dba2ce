// src/core/net.rs
// Blocking HTTP GET for catalogue pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{CollectError, FetchError};

/// Anything that can hand back a page body for an address.
/// The collector only sees this trait; tests plug in canned pages.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// `timeout: None` keeps the client's default.
    pub fn new(timeout: Option<Duration>) -> Result<Self, CollectError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(CollectError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(transport)
    }
}
