//! Form backend error types.

/// Errors that can occur while delivering an application.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Configured endpoint is not a usable URL
    #[error("Invalid form endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_display() {
        let error = SubmitError::InvalidEndpoint {
            endpoint: "not a url".to_string(),
            message: "relative URL without a base".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("Invalid form endpoint"));
        assert!(error_str.contains("not a url"));
        assert!(error_str.contains("relative URL"));
    }
}
