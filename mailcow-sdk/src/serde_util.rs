//! Lenient decoding for attributes whose wire type differs between mailcow versions.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_with::{DeserializeAs, DisplayFromStr, PickFirst, Same};

/// Numbers that are sometimes sent as strings, e.g. `"10240"`.
pub type NumberOrString = PickFirst<(Same, DisplayFromStr)>;

/// Accepts `true`, `1`, `"1"`, `"true"` and their negatives as a `bool`.
///
/// mailcow reports most flags as `0`/`1`, some as strings and a few as real booleans.
pub struct FlexibleBool;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBool {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> DeserializeAs<'de, bool> for FlexibleBool {
    fn deserialize_as<D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawBool::deserialize(deserializer)? {
            RawBool::Bool(b) => Ok(b),
            RawBool::Int(i) => Ok(i != 0),
            RawBool::Float(f) => Ok(f != 0.0),
            RawBool::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                other => Err(D::Error::custom(format!("invalid boolean flag: {}", other))),
            },
        }
    }
}
