use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::{Id, MailcowResponse};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Postfix `smtp_tls_policy_maps` level.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TlsPolicy {
    None,
    May,
    Encrypt,
    Dane,
    #[serde(rename = "dane-only")]
    DaneOnly,
    Fingerprint,
    Verify,
    Secure,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct TlsPolicyMap {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    /// Destination domain or `.domain` for subdomains.
    pub dest: String,
    pub policy: TlsPolicy,
    pub parameters: Option<String>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    pub created: Option<String>,
    pub modified: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddTlsPolicyMap<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    dest: &'a str,
    policy: TlsPolicy,
    /// Extra policy parameters, e.g. `protocols=!SSLv2`.
    parameters: Option<&'a str>,
    active: Option<bool>,
}

impl AddTlsPolicyMap<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/tls-policy-map", self).await
    }
}

impl Client {
    pub async fn get_tls_policy_maps(&self, id: impl Into<Id>) -> Result<Vec<TlsPolicyMap>, Error> {
        self.get_many(&format!("get/tls-policy-map/{}", id.into()))
            .await
    }

    pub fn add_tls_policy_map(&self) -> AddTlsPolicyMapBuilder<'_> {
        AddTlsPolicyMap::builder(self)
    }

    pub async fn delete_tls_policy_maps(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/tls-policy-map", ids).await
    }
}
