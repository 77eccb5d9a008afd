use crate::Client;
use crate::serde_util::FlexibleBool;
use crate::types::{MailcowResponse, items_setters};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct DomainAdmin {
    pub username: String,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
    #[serde_as(as = "Option<FlexibleBool>")]
    pub tfa_active: Option<bool>,
    /// Domains this admin manages.
    #[serde(default)]
    pub selected_domains: Vec<String>,
    #[serde(default)]
    pub unselected_domains: Vec<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

// region:    --- add domain admin
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddDomainAdmin<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    domains: Vec<&'a str>,

    username: &'a str,
    password: &'a str,
    password2: &'a str,
    active: Option<bool>,
}

impl<'a, S: add_domain_admin_builder::State> AddDomainAdminBuilder<'a, S> {
    pub fn domain(mut self, domain: &'a str) -> Self {
        self.domains.push(domain);
        self
    }

    pub fn domains(mut self, domains: impl IntoIterator<Item = &'a str>) -> Self {
        self.domains.extend(domains);
        self
    }
}

impl AddDomainAdmin<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        if self.password != self.password2 {
            return Err(Error::new("password and password2 do not match"));
        }
        self.client.post("add/domain-admin", self).await
    }
}
// endregion: --- add domain admin

// region:    --- edit domain admin
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Default, Debug, Clone)]
pub struct DomainAdminAttributes<'a> {
    /// Renames the admin.
    username_new: Option<&'a str>,
    /// Replaces the managed domains.
    domains: Option<Vec<&'a str>>,
    password: Option<&'a str>,
    password2: Option<&'a str>,
    active: Option<bool>,
}

#[derive(Builder, Serialize)]
pub struct EditDomainAdmin<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(field)]
    items: Vec<&'a str>,

    attr: DomainAdminAttributes<'a>,
}

items_setters!(EditDomainAdminBuilder, edit_domain_admin_builder, &'a str);

impl EditDomainAdmin<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("edit/domain-admin", self).await
    }
}
// endregion: --- edit domain admin

#[derive(Serialize)]
struct SsoTokenRequest<'a> {
    username: &'a str,
}

impl Client {
    pub async fn get_domain_admins(&self) -> Result<Vec<DomainAdmin>, Error> {
        self.get("get/domain-admin/all").await
    }

    pub fn add_domain_admin(&self) -> AddDomainAdminBuilder<'_> {
        AddDomainAdmin::builder(self)
    }

    pub fn edit_domain_admin(&self) -> EditDomainAdminBuilder<'_> {
        EditDomainAdmin::builder(self)
    }

    pub async fn delete_domain_admins(&self, usernames: &[&str]) -> Result<MailcowResponse, Error> {
        self.post("delete/domain-admin", usernames).await
    }

    /// Issues a single sign-on token that logs `username` into the web UI.
    pub async fn issue_domain_admin_sso_token(
        &self,
        username: &str,
    ) -> Result<MailcowResponse, Error> {
        self.post("add/sso/domain-admin", &SsoTokenRequest { username })
            .await
    }
}
