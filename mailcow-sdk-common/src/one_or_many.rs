//! Normalization of "one object or an array of objects" responses.
//!
//! Some mailcow lookups answer with a bare object when queried by identifier and with an
//! array when queried with `all`. [`OneOrMany`] decodes either shape and always hands back
//! a `Vec`.

use serde::{Deserialize, Serialize};
use std::future::Future;

/// Either a single item or a collection of items of the same type.
///
/// Decoding tries the array form first, so a JSON array never ends up as `One`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Many(items) => items.len(),
            OneOrMany::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

/// Awaits a pending one-or-many result and surfaces it as a `Vec`.
///
/// Errors pass through untouched.
pub async fn into_vec_result<T, E, F>(pending: F) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<OneOrMany<T>, E>>,
{
    pending.await.map(OneOrMany::into_vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Domain {
        domain_name: String,
    }

    #[test]
    fn single_object_becomes_one_element_vec() {
        let body = json!({ "domain_name": "example.com", "active": 1 });
        let decoded: OneOrMany<Domain> = serde_json::from_value(body).unwrap();
        assert_eq!(
            decoded.into_vec(),
            vec![Domain {
                domain_name: "example.com".to_owned()
            }]
        );
    }

    #[test]
    fn array_passes_through_unchanged() {
        let body = json!([{ "domain_name": "a.com" }, { "domain_name": "b.com" }]);
        let decoded: OneOrMany<Domain> = serde_json::from_value(body).unwrap();
        let names: Vec<_> = decoded
            .into_vec()
            .into_iter()
            .map(|d| d.domain_name)
            .collect();
        assert_eq!(names, ["a.com", "b.com"]);
    }

    #[test]
    fn empty_array_stays_empty() {
        let decoded: OneOrMany<Domain> = serde_json::from_value(json!([])).unwrap();
        assert!(decoded.is_empty());
        assert!(Vec::from(decoded).is_empty());
    }

    #[test]
    fn array_of_values_is_never_wrapped_twice() {
        // a `Value` item would accept the whole array as `One`; `Many` has to win
        let decoded: OneOrMany<serde_json::Value> =
            serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(decoded.into_vec(), vec![json!(1), json!(2), json!(3)]);

        let decoded: OneOrMany<serde_json::Value> =
            serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(decoded.into_vec(), vec![json!({ "id": 1 })]);
    }

    #[test]
    fn mismatched_shape_is_an_error() {
        let res = serde_json::from_value::<OneOrMany<Domain>>(json!("example.com"));
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn pending_result_is_normalized() {
        let one = async { Ok::<_, String>(OneOrMany::One(7)) };
        assert_eq!(into_vec_result(one).await, Ok(vec![7]));

        let many = async { Ok::<_, String>(OneOrMany::Many(vec![1, 2])) };
        assert_eq!(into_vec_result(many).await, Ok(vec![1, 2]));

        let failed = async { Err::<OneOrMany<i32>, _>("boom".to_owned()) };
        assert_eq!(into_vec_result(failed).await, Err("boom".to_owned()));
    }
}
