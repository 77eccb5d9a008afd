//! Postfix mail queue.

use crate::Client;
use crate::serde_util::NumberOrString;
use crate::types::MailcowResponse;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct QueueItem {
    pub queue_name: String,
    pub queue_id: String,
    /// Unix timestamp.
    #[serde_as(as = "Option<NumberOrString>")]
    pub arrival_time: Option<i64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub message_size: Option<u64>,
    pub sender: Option<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum QueueAction {
    Flush,
    SuperDelete,
}

#[derive(Serialize)]
struct QueueRequest {
    action: QueueAction,
}

impl Client {
    pub async fn get_mail_queue(&self) -> Result<Vec<QueueItem>, Error> {
        self.get("get/mailq/all").await
    }

    /// Retries delivery of every queued message.
    pub async fn flush_mail_queue(&self) -> Result<MailcowResponse, Error> {
        let req = QueueRequest {
            action: QueueAction::Flush,
        };
        self.post("edit/mailq", &req).await
    }

    /// Drops every queued message.
    pub async fn delete_mail_queue(&self) -> Result<MailcowResponse, Error> {
        let req = QueueRequest {
            action: QueueAction::SuperDelete,
        };
        self.post("delete/mailq", &req).await
    }
}
