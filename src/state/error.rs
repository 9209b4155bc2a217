//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No network worker was attached to the state
    #[error("Network worker is not available")]
    NetworkUnavailable,

    /// The network worker hung up
    #[error("Network worker stopped; the application was not sent")]
    NetworkChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::NetworkUnavailable;
        assert!(error.to_string().contains("not available"));

        let error = StateError::NetworkChannelClosed;
        assert!(error.to_string().contains("was not sent"));
    }
}
