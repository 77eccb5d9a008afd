#![doc = include_str!("../README.md")]

mod client;
mod serde_util;
pub mod types;

pub mod address_rewriting;
pub mod alias;
pub mod app_password;
pub mod dkim;
pub mod domain;
pub mod domain_admin;
pub mod fail2ban;
pub mod forwarding;
pub mod logs;
pub mod mailbox;
pub mod oauth2;
pub mod quarantine;
pub mod queue;
pub mod ratelimit;
pub mod resource;
pub mod routing;
pub mod spam_policy;
pub mod status;
pub mod syncjob;
pub mod tls_policy;

pub use client::{API_KEY_HEADER, Client};
pub use mailcow_sdk_common::{Error, OneOrMany};
pub use types::{BaseResponse, Id, MailcowResponse, ResponseType};
