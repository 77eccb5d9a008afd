use crate::Client;
use mailcow_sdk_common::Error;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone)]
pub struct ContainerStatus {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Docker container name.
    pub container: Option<String>,
    /// e.g. `running`.
    pub state: Option<String>,
    pub started_at: Option<String>,
    pub image: Option<String>,
}

impl ContainerStatus {
    pub fn is_running(&self) -> bool {
        self.state.as_deref() == Some("running")
    }
}

/// Disk usage of the mail storage volume.
#[derive(Deserialize, Debug, Clone)]
pub struct VmailStatus {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub disk: Option<String>,
    /// Human readable, e.g. `3.1G`.
    pub used: Option<String>,
    pub total: Option<String>,
    /// e.g. `12%`.
    pub used_percent: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VersionStatus {
    pub version: String,
}

impl Client {
    /// Keyed by container service name, e.g. `postfix-mailcow`.
    pub async fn container_status(&self) -> Result<HashMap<String, ContainerStatus>, Error> {
        self.get("get/status/containers").await
    }

    pub async fn vmail_status(&self) -> Result<VmailStatus, Error> {
        self.get("get/status/vmail").await
    }

    pub async fn version(&self) -> Result<VersionStatus, Error> {
        self.get("get/status/version").await
    }
}
