use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::{Id, MailcowResponse};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BccType {
    /// Copy mail sent by `local_dest`.
    Sender,
    /// Copy mail received by `local_dest`.
    Rcpt,
}

// region:    --- response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct BccMap {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    pub local_dest: String,
    pub bcc_dest: String,
    #[serde(rename = "type")]
    pub bcc_type: Option<BccType>,
    pub domain: Option<String>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    pub created: Option<String>,
    pub modified: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct RecipientMap {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    pub recipient_map_old: String,
    pub recipient_map_new: String,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    pub created: Option<String>,
    pub modified: Option<String>,
}
// endregion: --- response

// region:    --- add bcc map
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddBccMap<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    /// Mailbox, alias or domain whose mail is copied.
    local_dest: &'a str,
    /// Where the copies go.
    bcc_dest: &'a str,
    #[serde(rename = "type")]
    bcc_type: BccType,
    active: Option<bool>,
}

impl AddBccMap<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/bcc", self).await
    }
}
// endregion: --- add bcc map

// region:    --- add recipient map
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddRecipientMap<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    recipient_map_old: &'a str,
    recipient_map_new: &'a str,
    active: Option<bool>,
}

impl AddRecipientMap<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/recipient_map", self).await
    }
}
// endregion: --- add recipient map

impl Client {
    pub async fn get_bcc_maps(&self, id: impl Into<Id>) -> Result<Vec<BccMap>, Error> {
        self.get_many(&format!("get/bcc/{}", id.into())).await
    }

    pub async fn get_recipient_maps(&self, id: impl Into<Id>) -> Result<Vec<RecipientMap>, Error> {
        self.get_many(&format!("get/recipient_map/{}", id.into()))
            .await
    }

    pub fn add_bcc_map(&self) -> AddBccMapBuilder<'_> {
        AddBccMap::builder(self)
    }

    pub fn add_recipient_map(&self) -> AddRecipientMapBuilder<'_> {
        AddRecipientMap::builder(self)
    }

    pub async fn delete_bcc_maps(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/bcc", ids).await
    }

    pub async fn delete_recipient_maps(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/recipient_map", ids).await
    }
}
