use crate::Client;
use crate::serde_util::NumberOrString;
use crate::types::MailcowResponse;
use mailcow_sdk_common::Error;
use serde::Deserialize;
use serde_with::serde_as;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct QuarantineItem {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    pub qid: Option<String>,
    pub subject: Option<String>,
    pub sender: Option<String>,
    /// Mailbox the message was addressed to.
    pub rcpt: Option<String>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub score: Option<f64>,
    /// `reject` or `add_header`.
    pub action: Option<String>,
    pub virus_flag: Option<serde_json::Value>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub created: Option<i64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub notified: Option<i64>,
}

impl Client {
    pub async fn get_quarantine(&self) -> Result<Vec<QuarantineItem>, Error> {
        self.get("get/quarantine/all").await
    }

    pub async fn delete_quarantine_items(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/qitem", ids).await
    }
}
