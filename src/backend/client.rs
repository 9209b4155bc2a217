//! HTTP client for the static-site form backend.
//!
//! Posts an application as `application/x-www-form-urlencoded` pairs to the
//! configured endpoint. The response body is never read; only the status is
//! handed back for logging.

use super::{Submission, SubmitError};
use reqwest::{StatusCode, Url};

/// Makes form posts to a single endpoint.
///
pub struct Client {
    pub(crate) endpoint: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance posting to the given endpoint.
    ///
    pub fn new(endpoint: &str) -> Result<Self, SubmitError> {
        Ok(Client {
            endpoint: endpoint.to_owned(),
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Post the submission and return the response status.
    ///
    pub async fn post_form(&self, submission: &Submission) -> Result<StatusCode, SubmitError> {
        let url = Url::parse(&self.endpoint).map_err(|e| SubmitError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })?;

        let response = self
            .http_client
            .post(url)
            .form(submission.pairs())
            .send()
            .await?;

        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::MockServer;

    fn submission() -> Submission {
        Submission::new("contact")
            .field("name", "Olena Kovalenko")
            .field("age", "24")
            .field("city", "Kyiv")
            .field("phone", "+380501234567")
            .field("telegram", "@olena")
    }

    #[tokio::test]
    async fn post_form_sends_urlencoded_body() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body_contains("form-name=contact")
                    .body_contains("name=Olena+Kovalenko")
                    .body_contains("phone=%2B380501234567")
                    .body_contains("telegram=%40olena");
                then.status(200);
            })
            .await;

        let client = Client::new(&server.url("/"))?;
        let status = client.post_form(&submission()).await?;
        assert_eq!(status, StatusCode::OK);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn post_form_returns_error_status_untouched() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/");
                then.status(404);
            })
            .await;

        let client = Client::new(&server.url("/"))?;
        let status = client.post_form(&submission()).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn post_form_rejects_invalid_endpoint() -> Result<()> {
        let client = Client::new("not a url")?;
        let err = client.post_form(&submission()).await.unwrap_err();
        assert!(matches!(err, SubmitError::InvalidEndpoint { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn post_form_reports_unreachable_host() -> Result<()> {
        let client = Client::new("http://127.0.0.1:1/")?;
        let err = client.post_form(&submission()).await.unwrap_err();
        assert!(matches!(err, SubmitError::HttpRequest(_)));
        Ok(())
    }
}
