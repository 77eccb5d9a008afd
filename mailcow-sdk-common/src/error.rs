/// The only error surfaced by the sdk.
///
/// Transport failures, non-success statuses and undecodable bodies all end up here;
/// the message is the only thing a caller can inspect.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }

    pub fn config(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("invalid client configuration: {}", detail))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            return Error::config(e);
        }
        if e.is_decode() {
            return Error::new(format!("failed to decode response: {}", e));
        }
        Error::new(format!("request failed: {}", e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::new(format!("failed to decode response: {}", e))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::config(format!("base url: {}", e))
    }
}
