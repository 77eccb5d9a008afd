use crate::Client;
use crate::serde_util::NumberOrString;
use crate::types::{Id, MailcowResponse};
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct OAuth2Client {
    #[serde_as(as = "NumberOrString")]
    pub id: u64,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub grant_types: Option<String>,
    pub scope: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Builder, Serialize)]
pub struct AddOAuth2Client<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    redirect_uri: &'a str,
}

impl AddOAuth2Client<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/oauth2-client", self).await
    }
}

impl Client {
    pub async fn get_oauth2_clients(&self, id: impl Into<Id>) -> Result<Vec<OAuth2Client>, Error> {
        self.get_many(&format!("get/oauth2-client/{}", id.into()))
            .await
    }

    pub fn add_oauth2_client(&self) -> AddOAuth2ClientBuilder<'_> {
        AddOAuth2Client::builder(self)
    }

    pub async fn delete_oauth2_clients(&self, ids: &[u64]) -> Result<MailcowResponse, Error> {
        self.post("delete/oauth2-client", ids).await
    }
}
