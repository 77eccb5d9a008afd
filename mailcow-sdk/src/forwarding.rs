use crate::Client;
use crate::serde_util::FlexibleBool;
use crate::types::MailcowResponse;
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// A host allowed to relay mail through mailcow.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct ForwardingHost {
    /// IP address or network.
    pub host: String,
    pub source: Option<String>,
    /// `true` when mail from this host skips spam filtering.
    #[serde_as(as = "Option<FlexibleBool>")]
    pub keep_spam: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddForwardingHost<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    /// IP address, network or hostname.
    hostname: &'a str,
    /// Skip spam filtering for this host.
    filter_spam: Option<bool>,
}

impl AddForwardingHost<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/fwdhost", self).await
    }
}

impl Client {
    pub async fn get_forwarding_hosts(&self) -> Result<Vec<ForwardingHost>, Error> {
        self.get("get/fwdhost/all").await
    }

    pub fn add_forwarding_host(&self) -> AddForwardingHostBuilder<'_> {
        AddForwardingHost::builder(self)
    }

    pub async fn delete_forwarding_hosts(&self, hosts: &[&str]) -> Result<MailcowResponse, Error> {
        self.post("delete/fwdhost", hosts).await
    }
}
