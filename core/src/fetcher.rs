//! The network boundary of a run.
//!
//! The aggregator only knows the [`StatusFetcher`] abstraction, so tests can
//! swap the HTTP implementation for canned responses.

use std::error::Error as StdError;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use catisland_common::endpoint::EndpointDescriptor;
use reqwest::Client;

use crate::error::HostError;

const LIST_PATH: &str = "/manager/text/list";

/// Retrieves the raw status listing of one endpoint.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch(&self, endpoint: &EndpointDescriptor) -> Result<String, HostError>;
}

/// Fetches `<address>/manager/text/list` over HTTP with basic authentication.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl StatusFetcher for HttpFetcher {
    async fn fetch(&self, endpoint: &EndpointDescriptor) -> Result<String, HostError> {
        let url: String = list_url(endpoint.address());

        let response = self
            .client
            .get(&url)
            .basic_auth(endpoint.username(), Some(endpoint.password()))
            .send()
            .await
            .map_err(|e| transport_error(endpoint, describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(endpoint, format!("got status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(endpoint, describe(&e)))
    }
}

pub fn list_url(address: &str) -> String {
    format!("{}{LIST_PATH}", address.trim_end_matches('/'))
}

fn transport_error(endpoint: &EndpointDescriptor, reason: String) -> HostError {
    HostError::Transport {
        address: endpoint.address().to_string(),
        reason,
    }
}

/// Flattens the source chain, reqwest's top-level message alone is rarely useful.
fn describe(err: &reqwest::Error) -> String {
    let mut message: String = err.to_string();
    let mut source: Option<&(dyn StdError + 'static)> = err.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
