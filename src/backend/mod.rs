//! Form backend module.
//!
//! The application form hands a [`Submission`] to a [`FormBackend`] and gets
//! a [`SubmitOutcome`] back. [`HttpBackend`] is the real implementation; the
//! network worker is generic over the trait so tests can swap it out.

mod client;
mod error;
mod submission;

pub use error::SubmitError;
pub use submission::{Submission, FORM_NAME_KEY};

use client::Client;
use log::*;

/// Result of one delivery attempt.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend answered. The status is informational only.
    Delivered { status: u16 },
    /// The request could not be built or sent.
    Failed(String),
}

/// Anything that can deliver an application.
///
#[allow(async_fn_in_trait)]
pub trait FormBackend {
    async fn submit(&self, submission: &Submission) -> SubmitOutcome;
}

/// Delivers applications over HTTP.
///
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    /// Returns a new instance posting to the given endpoint.
    ///
    pub fn new(endpoint: &str) -> Result<Self, SubmitError> {
        debug!("Initializing form backend for endpoint {}...", endpoint);
        reqwest::Url::parse(endpoint).map_err(|e| SubmitError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            message: e.to_string(),
        })?;
        Ok(HttpBackend {
            client: Client::new(endpoint)?,
        })
    }
}

impl FormBackend for HttpBackend {
    async fn submit(&self, submission: &Submission) -> SubmitOutcome {
        debug!(
            "Posting {} fields for form '{}' to {}...",
            submission.pairs().len(),
            submission.get(FORM_NAME_KEY).unwrap_or_default(),
            self.client.endpoint
        );
        match self.client.post_form(submission).await {
            Ok(status) => {
                info!("Form backend answered with status {}.", status);
                SubmitOutcome::Delivered {
                    status: status.as_u16(),
                }
            }
            Err(e) => {
                error!("Failed to post application: {}", e);
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::MockServer;

    #[tokio::test]
    async fn submit_delivered_on_any_status() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/").body_contains("form-name=contact");
                then.status(500);
            })
            .await;

        let backend = HttpBackend::new(&server.url("/"))?;
        let outcome = backend.submit(&Submission::new("contact")).await;
        assert_eq!(outcome, SubmitOutcome::Delivered { status: 500 });
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn submit_failed_when_unreachable() -> Result<()> {
        let backend = HttpBackend::new("http://127.0.0.1:1/")?;
        let outcome = backend.submit(&Submission::new("contact")).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(message) if message.contains("HTTP request failed")));
        Ok(())
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let result = HttpBackend::new("not a url");
        assert!(matches!(
            result,
            Err(SubmitError::InvalidEndpoint { endpoint, .. }) if endpoint == "not a url"
        ));
    }
}
