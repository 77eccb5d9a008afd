//! Sender-dependent relayhosts and transport maps.

use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::{Id, MailcowResponse};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

// region:    --- response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Relayhost {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    /// `host:port`, optionally in brackets to skip MX lookup.
    pub hostname: String,
    pub username: Option<String>,
    pub password_short: Option<String>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    /// Domains routed through this relayhost.
    pub used_by_domains: Option<String>,
    pub used_by_mailboxes: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct TransportMap {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    pub destination: String,
    pub nexthop: String,
    pub username: Option<String>,
    pub password_short: Option<String>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub is_mx_based: Option<bool>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
}
// endregion: --- response

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddRelayhost<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    hostname: &'a str,
    username: Option<&'a str>,
    password: Option<&'a str>,
}

impl AddRelayhost<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/relayhost", self).await
    }
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddTransportMap<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    /// Recipient domain or address the map applies to.
    destination: &'a str,
    nexthop: &'a str,
    username: Option<&'a str>,
    password: Option<&'a str>,
    active: Option<bool>,
}

impl AddTransportMap<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/transport", self).await
    }
}

impl Client {
    pub async fn get_relayhosts(&self, id: impl Into<Id>) -> Result<Vec<Relayhost>, Error> {
        self.get_many(&format!("get/relayhost/{}", id.into())).await
    }

    pub async fn get_transport_maps(&self, id: impl Into<Id>) -> Result<Vec<TransportMap>, Error> {
        self.get_many(&format!("get/transport/{}", id.into())).await
    }

    pub fn add_relayhost(&self) -> AddRelayhostBuilder<'_> {
        AddRelayhost::builder(self)
    }

    pub fn add_transport_map(&self) -> AddTransportMapBuilder<'_> {
        AddTransportMap::builder(self)
    }

    pub async fn delete_relayhosts(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/relayhost", ids).await
    }

    pub async fn delete_transport_maps(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/transport", ids).await
    }
}
