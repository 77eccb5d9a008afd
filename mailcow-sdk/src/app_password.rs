use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::MailcowResponse;
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Protocols an app password may be used for.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPasswordProtocol {
    #[serde(rename = "imap_access")]
    Imap,
    #[serde(rename = "dav_access")]
    Dav,
    #[serde(rename = "smtp_access")]
    Smtp,
    #[serde(rename = "eas_access")]
    Eas,
    #[serde(rename = "pop3_access")]
    Pop3,
    #[serde(rename = "sieve_access")]
    Sieve,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct AppPassword {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    pub name: String,
    pub mailbox: String,
    pub domain: Option<String>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub imap_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub smtp_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub dav_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub eas_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub pop3_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub sieve_access: Option<bool>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddAppPassword<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    protocols: Vec<AppPasswordProtocol>,

    username: &'a str,
    /// Display name.
    app_name: &'a str,
    app_passwd: &'a str,
    app_passwd2: &'a str,
    active: Option<bool>,
}

impl<'a, S: add_app_password_builder::State> AddAppPasswordBuilder<'a, S> {
    pub fn protocol(mut self, protocol: AppPasswordProtocol) -> Self {
        self.protocols.push(protocol);
        self
    }

    pub fn protocols(mut self, protocols: impl IntoIterator<Item = AppPasswordProtocol>) -> Self {
        self.protocols.extend(protocols);
        self
    }
}

impl AddAppPassword<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        if self.app_passwd != self.app_passwd2 {
            return Err(Error::new("app_passwd and app_passwd2 do not match"));
        }
        self.client.post("add/app-passwd", self).await
    }
}

impl Client {
    /// All app passwords of `mailbox`.
    pub async fn get_app_passwords(&self, mailbox: &str) -> Result<Vec<AppPassword>, Error> {
        self.get(&format!("get/app-passwd/all/{}", mailbox)).await
    }

    pub fn add_app_password(&self) -> AddAppPasswordBuilder<'_> {
        AddAppPassword::builder(self)
    }

    pub async fn delete_app_passwords(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/app-passwd", ids).await
    }
}
