use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::{MailcowResponse, items_setters};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Encryption {
    Tls,
    Ssl,
    Plain,
}

// region:    --- response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Syncjob {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    /// Local mailbox receiving the mail.
    pub user2: String,
    pub domain2: Option<String>,
    pub host1: String,
    #[serde_as(as = "Option<NumberOrString>")]
    pub port1: Option<u16>,
    pub user1: String,
    pub enc1: Option<Encryption>,
    pub authmech1: Option<String>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub authmd51: Option<bool>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub is_running: Option<bool>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub mins_interval: Option<u32>,
    pub subfolder2: Option<String>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub maxage: Option<u32>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub maxbytespersecond: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub timeout1: Option<u32>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub timeout2: Option<u32>,
    pub exclude: Option<String>,
    pub custom_params: Option<String>,
    pub regextrans2: Option<String>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub delete1: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub delete2: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub delete2duplicates: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub automap: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub skipcrossduplicates: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub subscribeall: Option<bool>,
    pub last_run: Option<String>,
    /// Always empty when listed through [`Client::get_syncjobs`].
    pub log: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
// endregion: --- response

// region:    --- add syncjob
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddSyncjob<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    /// Local mailbox receiving the mail.
    username: &'a str,
    host1: &'a str,
    port1: u16,
    user1: &'a str,
    password1: &'a str,
    enc1: Encryption,
    /// Minutes between runs.
    mins_interval: Option<u32>,
    subfolder2: Option<&'a str>,
    maxage: Option<u32>,
    maxbytespersecond: Option<u64>,
    timeout1: Option<u32>,
    timeout2: Option<u32>,
    /// Regex of folders to skip.
    exclude: Option<&'a str>,
    custom_params: Option<&'a str>,
    delete2duplicates: Option<bool>,
    delete1: Option<bool>,
    delete2: Option<bool>,
    automap: Option<bool>,
    skipcrossduplicates: Option<bool>,
    subscribeall: Option<bool>,
    active: Option<bool>,
}

impl AddSyncjob<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/syncjob", self).await
    }
}
// endregion: --- add syncjob

// region:    --- edit syncjob
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct SyncjobAttributes<'a> {
    username: Option<&'a str>,
    host1: Option<&'a str>,
    port1: Option<u16>,
    user1: Option<&'a str>,
    password1: Option<&'a str>,
    enc1: Option<Encryption>,
    mins_interval: Option<u32>,
    subfolder2: Option<&'a str>,
    maxage: Option<u32>,
    maxbytespersecond: Option<u64>,
    timeout1: Option<u32>,
    timeout2: Option<u32>,
    exclude: Option<&'a str>,
    custom_params: Option<&'a str>,
    delete2duplicates: Option<bool>,
    delete1: Option<bool>,
    delete2: Option<bool>,
    automap: Option<bool>,
    skipcrossduplicates: Option<bool>,
    subscribeall: Option<bool>,
    active: Option<bool>,
}

#[derive(Builder, Serialize)]
pub struct EditSyncjob<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<u64>,

    attr: SyncjobAttributes<'a>,
}

items_setters!(EditSyncjobBuilder, edit_syncjob_builder, u64);

impl EditSyncjob<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/syncjob", self).await
    }
}
// endregion: --- edit syncjob

impl Client {
    /// All sync jobs, without their logs.
    pub async fn get_syncjobs(&self) -> Result<Vec<Syncjob>, Error> {
        self.get("get/syncjobs/all/no_log").await
    }

    pub fn add_syncjob(&self) -> AddSyncjobBuilder<'_> {
        AddSyncjob::builder(self)
    }

    pub fn edit_syncjob(&self) -> EditSyncjobBuilder<'_> {
        EditSyncjob::builder(self)
    }

    pub async fn delete_syncjobs(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/syncjob", ids).await
    }
}
