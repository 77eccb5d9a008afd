use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::{Id, MailcowResponse, items_setters};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

// region:    --- response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Alias {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    pub address: String,
    /// Comma separated list of destinations.
    pub goto: String,
    pub domain: Option<String>,
    pub in_primary_domain: Option<String>,
    pub public_comment: Option<String>,
    pub private_comment: Option<String>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub sogo_visible: Option<bool>,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub is_catch_all: Option<bool>,
    pub created: Option<String>,
    pub modified: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
// endregion: --- response

// region:    --- add alias
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddAlias<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    /// Alias address, or `@example.com` for a catch-all.
    address: &'a str,
    /// Comma separated destinations.
    goto: Option<&'a str>,
    /// Silently discard mail.
    goto_null: Option<bool>,
    /// Learn as spam.
    goto_spam: Option<bool>,
    /// Learn as ham.
    goto_ham: Option<bool>,
    sogo_visible: Option<bool>,
    active: Option<bool>,
    private_comment: Option<&'a str>,
    public_comment: Option<&'a str>,
}

impl AddAlias<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        if self.goto.is_none()
            && !self.goto_null.unwrap_or(false)
            && !self.goto_spam.unwrap_or(false)
            && !self.goto_ham.unwrap_or(false)
        {
            return Err(Error::new(
                "alias needs a goto address or one of goto_null, goto_spam, goto_ham",
            ));
        }
        self.client.post("add/alias", self).await
    }
}
// endregion: --- add alias

// region:    --- edit alias
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct AliasAttributes<'a> {
    address: Option<&'a str>,
    goto: Option<&'a str>,
    goto_null: Option<bool>,
    goto_spam: Option<bool>,
    goto_ham: Option<bool>,
    sogo_visible: Option<bool>,
    active: Option<bool>,
    private_comment: Option<&'a str>,
    public_comment: Option<&'a str>,
}

#[derive(Builder, Serialize)]
pub struct EditAlias<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<u64>,

    attr: AliasAttributes<'a>,
}

items_setters!(EditAliasBuilder, edit_alias_builder, u64);

impl EditAlias<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/alias", self).await
    }
}
// endregion: --- edit alias

impl Client {
    /// `id` is a numeric alias id or `"all"`.
    pub async fn get_aliases(&self, id: impl Into<Id>) -> Result<Vec<Alias>, Error> {
        self.get_many(&format!("get/alias/{}", id.into())).await
    }

    pub fn add_alias(&self) -> AddAliasBuilder<'_> {
        AddAlias::builder(self)
    }

    pub fn edit_alias(&self) -> EditAliasBuilder<'_> {
        EditAlias::builder(self)
    }

    /// Deletes several aliases in one call; the server reports one result per id.
    pub async fn delete_aliases(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/alias", ids).await
    }
}
