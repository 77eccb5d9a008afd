use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::{Id, MailcowResponse, RateLimitState, items_setters};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

// region:    --- response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Mailbox {
    pub username: String,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub local_part: Option<String>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    /// Quota in bytes, 0 for unlimited.
    #[serde_as(as = "Option<NumberOrString>")]
    pub quota: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub quota_used: Option<u64>,
    /// `None` for unlimited mailboxes, where the server sends `"- "`.
    #[serde_as(as = "DefaultOnError<Option<NumberOrString>>")]
    #[serde(default)]
    pub percent_in_use: Option<f64>,
    pub percent_class: Option<String>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub messages: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub max_new_quota: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub spam_aliases: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub last_imap_login: Option<i64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub last_smtp_login: Option<i64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub last_pop3_login: Option<i64>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub pushover_active: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub is_relayed: Option<bool>,
    pub rl: Option<RateLimitState>,
    pub rl_scope: Option<String>,
    pub attributes: Option<MailboxFlags>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct MailboxFlags {
    #[serde_as(as = "Option<FlexibleBool>")]
    pub force_pw_update: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub tls_enforce_in: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub tls_enforce_out: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub sogo_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub imap_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub pop3_access: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub smtp_access: Option<bool>,
    pub mailbox_format: Option<String>,
    pub quarantine_notification: Option<QuarantineSchedule>,
    pub quarantine_category: Option<QuarantineCategory>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuarantineSchedule {
    Hourly,
    Daily,
    Weekly,
    Never,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuarantineCategory {
    Reject,
    AddHeader,
    All,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserAcl {
    SpamAlias,
    TlsPolicy,
    SpamScore,
    SpamPolicy,
    DelimiterAction,
    Syncjobs,
    EasReset,
    Quarantine,
    SogoProfileReset,
    QuarantineAttachments,
    QuarantineNotification,
    QuarantineCategory,
    AppPasswds,
    Pushover,
}
// endregion: --- response

// region:    --- add mailbox
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddMailbox<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    local_part: &'a str,
    domain: &'a str,
    name: Option<&'a str>,
    password: &'a str,
    password2: &'a str,
    /// Quota in MiB, 0 for unlimited.
    quota: Option<u64>,
    active: Option<bool>,
    force_pw_update: Option<bool>,
    tls_enforce_in: Option<bool>,
    tls_enforce_out: Option<bool>,
}

impl AddMailbox<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        if self.password != self.password2 {
            return Err(Error::new("password and password2 do not match"));
        }
        self.client.post("add/mailbox", self).await
    }
}
// endregion: --- add mailbox

// region:    --- edit mailbox
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct MailboxAttributes<'a> {
    name: Option<&'a str>,
    password: Option<&'a str>,
    password2: Option<&'a str>,
    quota: Option<u64>,
    active: Option<bool>,
    force_pw_update: Option<bool>,
    sogo_access: Option<bool>,
    sender_acl: Option<Vec<&'a str>>,
}

#[derive(Builder, Serialize)]
pub struct EditMailbox<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    attr: MailboxAttributes<'a>,
}

items_setters!(EditMailboxBuilder, edit_mailbox_builder, &'a str);

impl EditMailbox<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/mailbox", self).await
    }
}
// endregion: --- edit mailbox

// region:    --- pushover
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct PushoverAttributes<'a> {
    active: Option<bool>,
    evaluate_x_prio: Option<bool>,
    key: Option<&'a str>,
    token: Option<&'a str>,
    only_x_prio: Option<bool>,
    senders: Option<&'a str>,
    senders_regex: Option<&'a str>,
    text: Option<&'a str>,
    title: Option<&'a str>,
}

#[derive(Builder, Serialize)]
pub struct EditPushover<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    attr: PushoverAttributes<'a>,
}

items_setters!(EditPushoverBuilder, edit_pushover_builder, &'a str);

impl EditPushover<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/pushover", self).await
    }
}
// endregion: --- pushover

// region:    --- quarantine notification
#[derive(Serialize, Debug, Clone)]
pub struct QuarantineNotificationAttributes {
    pub quarantine_notification: QuarantineSchedule,
}

#[derive(Builder, Serialize)]
pub struct EditQuarantineNotification<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    #[builder(name = schedule, with = |schedule: QuarantineSchedule| QuarantineNotificationAttributes { quarantine_notification: schedule })]
    attr: QuarantineNotificationAttributes,
}

items_setters!(
    EditQuarantineNotificationBuilder,
    edit_quarantine_notification_builder,
    &'a str
);

impl EditQuarantineNotification<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client
            .post("edit/quarantine_notification", self)
            .await
    }
}
// endregion: --- quarantine notification

// region:    --- spam score
#[derive(Serialize, Debug, Clone)]
pub struct SpamScoreAttributes {
    /// `"<low>,<high>"`, e.g. `"8,15"`.
    pub spam_score: String,
}

#[derive(Builder, Serialize)]
pub struct EditSpamScore<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    /// Scores above `low` are tagged as spam, above `high` rejected.
    #[builder(name = score, with = |low: f32, high: f32| SpamScoreAttributes { spam_score: format!("{},{}", low, high) })]
    attr: SpamScoreAttributes,
}

items_setters!(EditSpamScoreBuilder, edit_spam_score_builder, &'a str);

impl EditSpamScore<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/spam-score", self).await
    }
}
// endregion: --- spam score

// region:    --- user acl
#[derive(Serialize, Debug, Clone)]
pub struct UserAclAttributes {
    pub user_acl: Vec<UserAcl>,
}

#[derive(Builder, Serialize)]
pub struct EditUserAcl<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    /// The full set of acls the mailbox should end up with.
    #[builder(name = acls, with = |acls: impl IntoIterator<Item = UserAcl>| UserAclAttributes { user_acl: acls.into_iter().collect() })]
    attr: UserAclAttributes,
}

items_setters!(EditUserAclBuilder, edit_user_acl_builder, &'a str);

impl EditUserAcl<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/user-acl", self).await
    }
}
// endregion: --- user acl

impl Client {
    /// `id` is a mailbox address or `"all"`. A single mailbox is returned as a one-element `Vec`.
    pub async fn get_mailboxes(&self, id: impl Into<Id>) -> Result<Vec<Mailbox>, Error> {
        self.get_many(&format!("get/mailbox/{}", id.into())).await
    }

    pub fn add_mailbox(&self) -> AddMailboxBuilder<'_> {
        AddMailbox::builder(self)
    }

    pub fn edit_mailbox(&self) -> EditMailboxBuilder<'_> {
        EditMailbox::builder(self)
    }

    pub async fn delete_mailboxes(&self, mailboxes: &[&str]) -> Result<MailcowResponse, Error> {
        self.post("delete/mailbox", mailboxes).await
    }

    pub fn edit_pushover(&self) -> EditPushoverBuilder<'_> {
        EditPushover::builder(self)
    }

    pub fn edit_quarantine_notification(&self) -> EditQuarantineNotificationBuilder<'_> {
        EditQuarantineNotification::builder(self)
    }

    pub fn edit_spam_score(&self) -> EditSpamScoreBuilder<'_> {
        EditSpamScore::builder(self)
    }

    pub fn edit_user_acl(&self) -> EditUserAclBuilder<'_> {
        EditUserAcl::builder(self)
    }

    /// The active sieve script of a mailbox, one entry per line.
    pub async fn get_active_user_sieve(&self, mailbox: &str) -> Result<Vec<String>, Error> {
        self.get(&format!("get/active-user-sieve/{}", mailbox)).await
    }
}
