//! Outbound client for the third-party form-relay service

use std::time::Duration;

use reqwest::{StatusCode, redirect::Policy};
use serde::Serialize;
use url::Url;

use crate::{ContactMessage, Error, Result};

/// Connection settings for the relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Fixed external URL the form is forwarded to.
    pub endpoint: String,
    /// Redirect target the relay sends browsers to after accepting a
    /// submission (`_next`). Sent on every request even though this client
    /// never follows it.
    pub next_url: String,
    /// Whether the relay should challenge the sender (`_captcha`).
    pub captcha: bool,
    pub timeout: Duration,
}

/// The body of a relayed submission.
///
/// The relay service reads the visitor fields under their plain names and the
/// service directives under reserved underscore-prefixed names.
#[derive(Serialize)]
struct WireForm<'a> {
    name: &'a str,
    email: &'a str,
    #[serde(rename = "_subject")]
    subject: &'a str,
    message: &'a str,
    #[serde(rename = "_next")]
    next: &'a str,
    #[serde(rename = "_captcha")]
    captcha: &'a str,
}

#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: Url,
    next_url: String,
    captcha: bool,
}

impl RelayClient {
    /// Build a client for a fixed endpoint.
    ///
    /// Redirects are disabled: the relay answers browser-style submissions
    /// with a redirect to `_next`, and following it from here would just
    /// fetch our own page back.
    pub fn new(config: RelayConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            http,
            endpoint,
            next_url: config.next_url,
            captcha: config.captcha,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Forward a message to the relay endpoint and wait for its verdict.
    ///
    /// The response is awaited, so transport failures and rejections are
    /// real failures here, not silently swallowed. A 3xx counts as success
    /// because that is how the relay concludes a browser submission.
    pub async fn submit(&self, message: &ContactMessage) -> Result<()> {
        let form = WireForm {
            name: &message.name,
            email: &message.email,
            subject: &message.subject,
            message: &message.message,
            next: &self.next_url,
            captcha: if self.captcha { "true" } else { "false" },
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            tracing::info!(status = %status, "contact message relayed");
            Ok(())
        } else {
            Err(Error::Status { status })
        }
    }

    /// Reachability check: one GET against the endpoint.
    ///
    /// Any HTTP response proves the endpoint resolves and answers; the status
    /// is returned for logging. Only transport-level failures are errors.
    pub async fn probe(&self) -> Result<StatusCode> {
        let response = self.http.get(self.endpoint.clone()).send().await?;

        Ok(response.status())
    }
}

impl std::fmt::Debug for RelayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("next_url", &self.next_url)
            .field("captcha", &self.captcha)
            .finish()
    }
}
