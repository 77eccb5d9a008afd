use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::{Id, MailcowResponse, RateLimitFrame, RateLimitState, items_setters};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

// region:    --- response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Domain {
    pub domain_name: String,
    pub description: Option<String>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    #[serde_as(as = "Option<NumberOrString>")]
    pub aliases_in_domain: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub aliases_left: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_num_aliases_for_domain: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub mboxes_in_domain: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub mboxes_left: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_num_mboxes_for_domain: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_quota_for_domain: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_quota_for_mbox: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub def_quota_for_mbox: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub def_new_mailbox_quota: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_new_mailbox_quota: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub quota_used_in_domain: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub bytes_total: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub msgs_total: Option<u64>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub backupmx: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub gal: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub relay_all_recipients: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub relay_unknown_only: Option<bool>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub relayhost: Option<u64>,
    pub rl: Option<RateLimitState>,
    #[serde(default)]
    pub domain_admins: Vec<String>,
    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
// endregion: --- response

// region:    --- add domain
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddDomain<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<&'a str>,

    domain: &'a str,
    description: Option<&'a str>,
    active: Option<bool>,
    /// Max number of aliases.
    aliases: Option<u32>,
    /// Max number of mailboxes.
    mailboxes: Option<u32>,
    /// Default mailbox quota in MiB.
    defquota: Option<u64>,
    /// Max quota per mailbox in MiB.
    maxquota: Option<u64>,
    /// Domain quota in MiB.
    quota: Option<u64>,
    backupmx: Option<bool>,
    relay_all_recipients: Option<bool>,
    relay_unknown_only: Option<bool>,
    rl_value: Option<u32>,
    rl_frame: Option<RateLimitFrame>,
    restart_sogo: Option<bool>,
    lang: Option<&'a str>,
}

impl<'a, S: add_domain_builder::State> AddDomainBuilder<'a, S> {
    pub fn tag(mut self, tag: &'a str) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags.extend(tags);
        self
    }
}

impl AddDomain<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/domain", self).await
    }
}
// endregion: --- add domain

// region:    --- edit domain
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct DomainAttributes<'a> {
    description: Option<&'a str>,
    active: Option<bool>,
    aliases: Option<u32>,
    mailboxes: Option<u32>,
    defquota: Option<u64>,
    maxquota: Option<u64>,
    quota: Option<u64>,
    backupmx: Option<bool>,
    relay_all_recipients: Option<bool>,
    relay_unknown_only: Option<bool>,
    /// Global address list.
    gal: Option<bool>,
    relayhost: Option<u64>,
    lang: Option<&'a str>,
}

#[derive(Builder, Serialize)]
pub struct EditDomain<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    attr: DomainAttributes<'a>,
}

items_setters!(EditDomainBuilder, edit_domain_builder, &'a str);

impl EditDomain<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/domain", self).await
    }
}
// endregion: --- edit domain

impl Client {
    /// `id` is a domain name or `"all"`. A single domain is returned as a one-element `Vec`.
    pub async fn get_domains(&self, id: impl Into<Id>) -> Result<Vec<Domain>, Error> {
        self.get_many(&format!("get/domain/{}", id.into())).await
    }

    pub fn add_domain(&self) -> AddDomainBuilder<'_> {
        AddDomain::builder(self)
    }

    pub fn edit_domain(&self) -> EditDomainBuilder<'_> {
        EditDomain::builder(self)
    }

    pub async fn delete_domains(&self, domains: &[&str]) -> Result<MailcowResponse, Error> {
        self.post("delete/domain", domains).await
    }
}
