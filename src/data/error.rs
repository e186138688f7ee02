use thiserror::Error;

/// Failures from either upstream service. Non-200 replies carry their
/// status code; network-level failures (DNS, refused connection, body
/// decode) are folded into the same recoverable path and surfaced inline.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn status_error_carries_the_code() {
        let err = FetchError::Status(503);
        assert_eq!(err.to_string(), "HTTP status 503");
    }
}
