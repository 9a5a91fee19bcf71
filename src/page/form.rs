//! Contact form payload and delivery.
//!
//! | Handler  | Delivery                                      |
//! |----------|-----------------------------------------------|
//! | `email`  | `mailto:` link built by [`ContactMessage::mailto`] |
//! | `api`    | JSON POST through a [`FormTransport`]         |
//! | other    | acknowledged locally, nothing sent            |

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Characters `encodeURIComponent` leaves alone, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Values collected from the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// `mailto:` link addressed to `to`, with the sender appended to the body.
    pub fn mailto(&self, to: &str) -> String {
        let body = format!(
            "{}\n\nFrom: {} ({})",
            self.message, self.name, self.email
        );
        format!(
            "mailto:{to}?subject={}&body={}",
            utf8_percent_encode(&self.subject, URI_COMPONENT),
            utf8_percent_encode(&body, URI_COMPONENT),
        )
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("no `contactForm.apiUrl` configured")]
    MissingEndpoint,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Delivers a [`ContactMessage`] to an HTTP endpoint.
#[async_trait]
pub trait FormTransport: Send + Sync {
    /// POST `message` as JSON to `url`. Success means a 2xx status with a
    /// JSON body.
    async fn post(&self, url: &str, message: &ContactMessage) -> Result<(), FormError>;
}

/// [`FormTransport`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FormError> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FormTransport for HttpTransport {
    async fn post(&self, url: &str, message: &ContactMessage) -> Result<(), FormError> {
        self.client
            .post(url)
            .json(message)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        Ok(())
    }
}
