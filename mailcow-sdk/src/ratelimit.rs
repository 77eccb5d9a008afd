use crate::Client;
use crate::serde_util::NumberOrString;
use crate::types::{Id, MailcowResponse, RateLimitFrame, items_setters};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

// region:    --- response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct DomainRatelimit {
    pub domain: String,
    /// Messages allowed per `frame`; absent when the domain is unlimited.
    #[serde_as(as = "Option<NumberOrString>")]
    pub value: Option<u64>,
    pub frame: Option<RateLimitFrame>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct MailboxRatelimit {
    pub mailbox: String,
    #[serde_as(as = "Option<NumberOrString>")]
    pub value: Option<u64>,
    pub frame: Option<RateLimitFrame>,
}
// endregion: --- response

/// `rl_value` of `0` removes the limit.
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct RatelimitAttributes {
    rl_value: Option<u64>,
    rl_frame: Option<RateLimitFrame>,
}

// region:    --- edit domain ratelimit
#[derive(Builder, Serialize)]
pub struct EditDomainRatelimit<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    attr: RatelimitAttributes,
}

items_setters!(EditDomainRatelimitBuilder, edit_domain_ratelimit_builder, &'a str);

impl EditDomainRatelimit<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/rl-domain/", self).await
    }
}
// endregion: --- edit domain ratelimit

// region:    --- edit mailbox ratelimit
#[derive(Builder, Serialize)]
pub struct EditMailboxRatelimit<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    attr: RatelimitAttributes,
}

items_setters!(EditMailboxRatelimitBuilder, edit_mailbox_ratelimit_builder, &'a str);

impl EditMailboxRatelimit<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/rl-mbox/", self).await
    }
}
// endregion: --- edit mailbox ratelimit

impl Client {
    pub async fn get_domain_ratelimits(
        &self,
        domain: impl Into<Id>,
    ) -> Result<Vec<DomainRatelimit>, Error> {
        self.get_many(&format!("get/rl-domain/{}", domain.into()))
            .await
    }

    pub async fn get_mailbox_ratelimits(
        &self,
        mailbox: impl Into<Id>,
    ) -> Result<Vec<MailboxRatelimit>, Error> {
        self.get_many(&format!("get/rl-mbox/{}", mailbox.into()))
            .await
    }

    pub fn edit_domain_ratelimit(&self) -> EditDomainRatelimitBuilder<'_> {
        EditDomainRatelimit::builder(self)
    }

    pub fn edit_mailbox_ratelimit(&self) -> EditMailboxRatelimitBuilder<'_> {
        EditMailboxRatelimit::builder(self)
    }
}
