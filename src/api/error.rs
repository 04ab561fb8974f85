use std::fmt;

/// Failure to retrieve or decode a page from the APOD endpoint.
///
/// The variants only sharpen the log line; every failure is handled the
/// same way by the feed loader.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (connection, timeout, DNS)
    Network(String),
    /// HTTP error response (4xx, 5xx)
    HttpStatus(u16, String),
    /// Failed to parse response
    Parse(String),
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            Self::Network(details) => format!("network error: {details}"),
            Self::HttpStatus(429, _) => "rate limited by provider".into(),
            Self::HttpStatus(code, msg) if msg.is_empty() => format!("HTTP error {code}"),
            Self::HttpStatus(code, msg) => format!("HTTP error {code}: {msg}"),
            Self::Parse(details) => format!("failed to parse response: {details}"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network("request timed out".into())
        } else if err.is_connect() {
            Self::Network("connection failed".into())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::HttpStatus(
                status.as_u16(),
                status.canonical_reason().unwrap_or("").into(),
            )
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message() {
        let err = ApiError::HttpStatus(500, "Internal Server Error".into());
        assert_eq!(err.to_string(), "HTTP error 500: Internal Server Error");
    }

    #[test]
    fn rate_limit_message() {
        let err = ApiError::HttpStatus(429, "Too Many Requests".into());
        assert_eq!(err.to_string(), "rate limited by provider");
    }

    #[test]
    fn parse_message_includes_details() {
        let err = ApiError::Parse("expected value at line 1".into());
        assert!(err.to_string().contains("expected value"));
    }
}
