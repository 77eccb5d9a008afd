use crate::Client;
use crate::serde_util::{FlexibleBool, NumberOrString};
use crate::types::MailcowResponse;
use bon::Builder;
use mailcow_sdk_common::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Location,
    Group,
    Thing,
}

/// A bookable calendar resource (room, projector, car).
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Resource {
    /// The resource's address, `<local_part>@<domain>`.
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<ResourceKind>,
    pub domain: Option<String>,
    pub local_part: Option<String>,
    /// `0` rejects conflicting bookings, `-1` accepts all of them, any other value caps them.
    #[serde_as(as = "Option<NumberOrString>")]
    pub multiple_bookings: Option<i32>,
    #[serde_as(as = "FlexibleBool")]
    #[serde(default)]
    pub active: bool,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct AddResource<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    description: &'a str,
    domain: &'a str,
    kind: ResourceKind,
    multiple_bookings: Option<i32>,
    active: Option<bool>,
}

impl AddResource<'_> {
    pub async fn send(&self) -> Result<MailcowResponse, Error> {
        self.client.post("add/resource", self).await
    }
}

impl Client {
    pub async fn get_resources(&self) -> Result<Vec<Resource>, Error> {
        self.get("get/resource/all").await
    }

    pub fn add_resource(&self) -> AddResourceBuilder<'_> {
        AddResource::builder(self)
    }

    pub async fn delete_resources(&self, names: &[&str]) -> Result<MailcowResponse, Error> {
        self.post("delete/resource", names).await
    }
}
