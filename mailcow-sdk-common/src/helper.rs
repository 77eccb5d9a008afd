use crate::Error;
use crate::one_or_many::OneOrMany;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

/// Failure body sent by the mailcow api.
///
/// Only `msg` is used to build the error; `type` and `log` are kept for debugging.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub msg: Option<Message>,
    #[serde(rename = "type", default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub log: Option<serde_json::Value>,
}

/// `msg` is either plain text or a list like `["domain_not_found", "example.com"]`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Parts(Vec<serde_json::Value>),
}

impl Message {
    pub fn to_text(&self) -> String {
        match self {
            Message::Text(s) => s.clone(),
            Message::Parts(parts) => parts
                .iter()
                .map(|p| match p {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Ensures the base url ends with `/` so that paths like `get/domain/all` can be appended.
pub fn normalize_base_url(base_url: &str) -> Result<String, Error> {
    let trimmed = base_url.trim();
    Url::parse(trimmed)?;
    if trimmed.ends_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Ok(format!("{}/", trimmed))
    }
}

/// Picks the `msg` out of a failure body, falling back to a generic message that
/// still names the status code.
pub fn error_message_from_body(status: StatusCode, body: &str) -> String {
    let msg = serde_json::from_str::<OneOrMany<ErrorResponse>>(body)
        .ok()
        .and_then(|parsed| {
            parsed
                .into_vec()
                .into_iter()
                .find_map(|e| e.msg.map(|m| m.to_text()))
        });

    match msg {
        Some(msg) => msg,
        None if body.trim().is_empty() => format!("request failed with status {}", status),
        None => format!("request failed with status {}: {}", status, body.trim()),
    }
}

pub async fn into_client_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    match resp.text().await {
        Ok(body) => Error::new(error_message_from_body(status, &body)),
        Err(e) => Error::new(format!("request failed with status {}: {}", status, e)),
    }
}

pub async fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();

    if !status.is_success() {
        let err = into_client_error(resp).await;
        tracing::debug!(%status, error = %err, "mailcow api returned a failure");
        return Err(err);
    }

    let text = resp.text().await?;
    let data = serde_json::from_str(&text)?;
    Ok(data)
}
