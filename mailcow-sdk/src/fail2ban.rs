use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::MailcowResponse;
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Fail2BanConfig {
    /// Seconds.
    #[serde_as(as = "Option<NumberOrString>")]
    pub ban_time: Option<u64>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub ban_time_increment: Option<bool>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_ban_time: Option<u64>,
    /// Subnet prefix length banned together with an offending IPv4 address.
    #[serde_as(as = "Option<NumberOrString>")]
    pub netban_ipv4: Option<u8>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub netban_ipv6: Option<u8>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_attempts: Option<u32>,
    /// Seconds in which `max_attempts` must be reached.
    #[serde_as(as = "Option<NumberOrString>")]
    pub retry_window: Option<u64>,
    /// Newline separated list of networks.
    pub whitelist: Option<String>,
    pub blacklist: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct Fail2BanAttributes<'a> {
    ban_time: Option<u64>,
    ban_time_increment: Option<bool>,
    max_ban_time: Option<u64>,
    netban_ipv4: Option<u8>,
    netban_ipv6: Option<u8>,
    max_attempts: Option<u32>,
    retry_window: Option<u64>,
    whitelist: Option<&'a str>,
    blacklist: Option<&'a str>,
}

/// The server keeps a single fail2ban configuration, so `items` is always `["none"]`.
#[derive(Builder, Serialize)]
pub struct EditFail2Ban<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(skip = ["none"])]
    items: [&'static str; 1],

    attr: Fail2BanAttributes<'a>,
}

impl EditFail2Ban<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/fail2ban", self).await
    }
}

impl Client {
    pub async fn get_fail2ban(&self) -> Result<Fail2BanConfig, Error> {
        self.get("get/fail2ban").await
    }

    pub fn edit_fail2ban(&self) -> EditFail2BanBuilder<'_> {
        EditFail2Ban::builder(self)
    }
}
