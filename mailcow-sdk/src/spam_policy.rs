use crate::Client;
use crate::serde_util::NumberOrString;
use crate::types::MailcowResponse;
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::fmt;

/// Whitelist or blacklist.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyList {
    #[serde(rename = "wl")]
    Whitelist,
    #[serde(rename = "bl")]
    Blacklist,
}

impl fmt::Display for PolicyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyList::Whitelist => f.write_str("wl"),
            PolicyList::Blacklist => f.write_str("bl"),
        }
    }
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct SpamPolicy {
    #[serde_as(as = "NumberOrString")]
    pub prefid: u64,
    /// The domain the policy belongs to.
    pub object: String,
    /// The sender pattern, e.g. `*@spammer.example`.
    pub value: String,
}

#[derive(Builder, Serialize)]
pub struct AddSpamPolicy<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    domain: &'a str,
    object_from: &'a str,
    object_list: PolicyList,
}

impl AddSpamPolicy<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/domain-policy", self).await
    }
}

impl Client {
    pub async fn get_spam_policies(
        &self,
        list: PolicyList,
        domain: &str,
    ) -> Result<Vec<SpamPolicy>, Error> {
        self.get(&format!("get/policy_{}_domain/{}", list, domain))
            .await
    }

    pub fn add_spam_policy(&self) -> AddSpamPolicyBuilder<'_> {
        AddSpamPolicy::builder(self)
    }

    pub async fn delete_spam_policies(&self, prefids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/domain-policy", prefids).await
    }
}
