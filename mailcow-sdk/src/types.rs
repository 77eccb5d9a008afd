//! Types shared by several endpoint groups.

use crate::serde_util::NumberOrString;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::fmt;

pub use mailcow_sdk_common::helper::Message;

/// Selects one record or the whole collection (`all`) in `get/<resource>/<id>` paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Id {
    #[default]
    All,
    One(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::All => f.write_str("all"),
            Id::One(id) => f.write_str(id),
        }
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        if value == "all" {
            Id::All
        } else {
            Id::One(value.to_owned())
        }
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        if value == "all" {
            Id::All
        } else {
            Id::One(value)
        }
    }
}

impl From<&String> for Id {
    fn from(value: &String) -> Self {
        Id::from(value.as_str())
    }
}

macro_rules! id_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Id {
            fn from(value: $t) -> Self {
                Id::One(value.to_string())
            }
        })*
    };
}

id_from_int!(u32, u64, i32, i64, usize);

/// Acknowledgement of every add/edit/delete call.
pub type MailcowResponse = Vec<BaseResponse>;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BaseResponse {
    #[serde(rename = "type")]
    pub r#type: ResponseType,
    pub msg: Message,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<Vec<serde_json::Value>>,
}

impl BaseResponse {
    pub fn is_success(&self) -> bool {
        self.r#type == ResponseType::Success
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Danger,
    Error,
    Warning,
    Info,
    #[serde(other)]
    Unknown,
}

/// Rate limit window.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitFrame {
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "m")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
}

/// `rl` attribute of domains and mailboxes: `false` when no limit is set.
#[serde_as]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RateLimitState {
    Limited {
        #[serde_as(as = "NumberOrString")]
        value: u64,
        frame: RateLimitFrame,
    },
    Unlimited(bool),
}

/// Generates `item`/`items` adders for edit builders that carry an `items` list.
macro_rules! items_setters {
    ($builder:ident, $state_mod:ident, $item:ty) => {
        impl<'a, S: $state_mod::State> $builder<'a, S> {
            pub fn item(mut self, item: $item) -> Self {
                self.items.push(item);
                self
            }

            pub fn items(mut self, items: impl IntoIterator<Item = $item>) -> Self {
                self.items.extend(items);
                self
            }
        }
    };
}

pub(crate) use items_setters;
