//! Log endpoints. Every call returns the newest `count` entries.

use crate::Client;
use crate::serde_util::NumberOrString;
use mailcow_sdk_common::Error;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_with::serde_as;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Acme,
    Api,
    Autodiscover,
    Dovecot,
    Netfilter,
    Postfix,
    Ratelimited,
    RspamdHistory,
    Sogo,
    Watchdog,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Acme => "acme",
            LogKind::Api => "api",
            LogKind::Autodiscover => "autodiscover",
            LogKind::Dovecot => "dovecot",
            LogKind::Netfilter => "netfilter",
            LogKind::Postfix => "postfix",
            LogKind::Ratelimited => "ratelimited",
            LogKind::RspamdHistory => "rspamd-history",
            LogKind::Sogo => "sogo",
            LogKind::Watchdog => "watchdog",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// region:    --- entries
/// Line of a syslog-style container log (acme, dovecot, netfilter, postfix, sogo, watchdog).
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct SyslogEntry {
    /// Unix timestamp.
    #[serde_as(as = "NumberOrString")]
    pub time: i64,
    pub priority: Option<String>,
    pub program: Option<String>,
    pub message: String,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct ApiLogEntry {
    #[serde_as(as = "NumberOrString")]
    pub time: i64,
    pub uri: String,
    pub method: String,
    pub remote: Option<String>,
    pub data: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct AutodiscoverLogEntry {
    #[serde_as(as = "NumberOrString")]
    pub time: i64,
    pub ua: Option<String>,
    pub user: Option<String>,
    pub ip: Option<String>,
    pub service: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct RatelimitedLogEntry {
    #[serde_as(as = "NumberOrString")]
    pub time: i64,
    pub rl_name: Option<String>,
    pub rl_info: Option<String>,
    pub rl_hash: Option<String>,
    pub message_id: Option<String>,
    pub header_subject: Option<String>,
    pub header_from: Option<String>,
    pub from: Option<String>,
    pub rcpt: Option<String>,
    pub user: Option<String>,
    pub ip: Option<String>,
    pub qid: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct RspamdHistoryEntry {
    #[serde_as(as = "Option<NumberOrString>")]
    pub unix_time: Option<i64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub score: Option<f64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub required_score: Option<f64>,
    pub action: Option<String>,
    pub subject: Option<String>,
    pub sender_mime: Option<String>,
    pub sender_smtp: Option<String>,
    #[serde(default)]
    pub rcpt_mime: Vec<String>,
    #[serde(default)]
    pub rcpt_smtp: Vec<String>,
    pub ip: Option<String>,
    #[serde(rename = "message-id")]
    pub message_id: Option<String>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub size: Option<u64>,
    /// Symbols and the rest of the scan result.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
// endregion: --- entries

impl Client {
    /// `GET get/logs/{kind}/{count}`, decoding each entry as `T`.
    pub async fn get_logs<T: DeserializeOwned>(
        &self,
        kind: LogKind,
        count: u32,
    ) -> Result<Vec<T>, Error> {
        self.get(&format!("get/logs/{}/{}", kind, count)).await
    }

    pub async fn acme_logs(&self, count: u32) -> Result<Vec<SyslogEntry>, Error> {
        self.get_logs(LogKind::Acme, count).await
    }

    pub async fn api_logs(&self, count: u32) -> Result<Vec<ApiLogEntry>, Error> {
        self.get_logs(LogKind::Api, count).await
    }

    pub async fn autodiscover_logs(&self, count: u32) -> Result<Vec<AutodiscoverLogEntry>, Error> {
        self.get_logs(LogKind::Autodiscover, count).await
    }

    pub async fn dovecot_logs(&self, count: u32) -> Result<Vec<SyslogEntry>, Error> {
        self.get_logs(LogKind::Dovecot, count).await
    }

    pub async fn netfilter_logs(&self, count: u32) -> Result<Vec<SyslogEntry>, Error> {
        self.get_logs(LogKind::Netfilter, count).await
    }

    pub async fn postfix_logs(&self, count: u32) -> Result<Vec<SyslogEntry>, Error> {
        self.get_logs(LogKind::Postfix, count).await
    }

    pub async fn ratelimited_logs(&self, count: u32) -> Result<Vec<RatelimitedLogEntry>, Error> {
        self.get_logs(LogKind::Ratelimited, count).await
    }

    pub async fn rspamd_history(&self, count: u32) -> Result<Vec<RspamdHistoryEntry>, Error> {
        self.get_logs(LogKind::RspamdHistory, count).await
    }

    pub async fn sogo_logs(&self, count: u32) -> Result<Vec<SyslogEntry>, Error> {
        self.get_logs(LogKind::Sogo, count).await
    }

    pub async fn watchdog_logs(&self, count: u32) -> Result<Vec<SyslogEntry>, Error> {
        self.get_logs(LogKind::Watchdog, count).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_renders_path_segment() {
        assert_eq!(LogKind::RspamdHistory.to_string(), "rspamd-history");
        assert_eq!(LogKind::Postfix.to_string(), "postfix");
    }

    #[test]
    fn syslog_time_accepts_string_or_number() {
        let entries: Vec<SyslogEntry> = serde_json::from_value(json!([
            { "time": "1700000000", "priority": "info", "program": "postfix/smtpd", "message": "connect" },
            { "time": 1700000001, "message": "disconnect" }
        ]))
        .unwrap();

        assert_eq!(entries[0].time, 1_700_000_000);
        assert_eq!(entries[1].time, 1_700_000_001);
        assert_eq!(entries[1].program, None);
    }
}
