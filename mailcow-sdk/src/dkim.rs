use crate::Client;
use crate::serde_util::NumberOrString;
use crate::types::MailcowResponse;
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct DkimKey {
    pub pubkey: String,
    /// Key size in bits.
    #[serde_as(as = "Option<NumberOrString>")]
    pub length: Option<u32>,
    /// Value of the `<selector>._domainkey` TXT record.
    pub dkim_txt: String,
    pub dkim_selector: String,
    /// Only present when the server is configured to expose private keys.
    pub privkey: Option<String>,
}

#[derive(Builder, Serialize)]
pub struct AddDkim<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    /// Comma separated when several domains share the key settings.
    domains: &'a str,
    #[builder(default = "dkim")]
    dkim_selector: &'a str,
    #[builder(default = 2048)]
    key_size: u32,
}

impl AddDkim<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/dkim", self).await
    }
}

/// Copies the key of `from_domain` to `to_domain`.
#[derive(Builder, Serialize)]
pub struct DuplicateDkim<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    from_domain: &'a str,
    to_domain: &'a str,
}

impl DuplicateDkim<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/dkim_duplicate", self).await
    }
}

impl Client {
    pub async fn get_dkim(&self, domain: &str) -> Result<DkimKey, Error> {
        self.get(&format!("get/dkim/{}", domain)).await
    }

    pub fn add_dkim(&self) -> AddDkimBuilder<'_> {
        AddDkim::builder(self)
    }

    pub fn duplicate_dkim(&self) -> DuplicateDkimBuilder<'_> {
        DuplicateDkim::builder(self)
    }

    pub async fn delete_dkim(&self, domains: &[&str]) -> Result<MailcowResponse, Error> {
        self.post("delete/dkim", domains).await
    }
}
