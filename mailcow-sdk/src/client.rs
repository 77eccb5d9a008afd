use bon::bon;
use mailcow_sdk_common::helper::{normalize_base_url, parse_json_response};
use mailcow_sdk_common::{Error, OneOrMany, into_vec_result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for one mailcow instance.
///
/// Base url, api key and transport options are fixed at construction. Every endpoint
/// method borrows the client, so independent calls can run concurrently.
///
/// ```no_run
/// # async fn run() -> Result<(), mailcow_sdk::Error> {
/// let client = mailcow_sdk::Client::builder()
///     .base_url("https://mail.example.com/api/v1")
///     .api_key("390448-22B69F-FA37D9-19701B-6F033F")
///     .timeout(std::time::Duration::from_secs(10))
///     .build()?;
///
/// let domains = client.get_domains("all").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    /// `base_url` is the api root, e.g. `https://mail.example.com/api/v1`; a trailing `/`
    /// is added when missing.
    #[builder(on(String, into))]
    pub fn new(
        base_url: String,
        api_key: String,
        /// Total time allowed for one request. No timeout when unset.
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
        tcp_keepalive: Option<Duration>,
        pool_idle_timeout: Option<Duration>,
        /// Accept self-signed or otherwise invalid certificates.
        #[builder(default = false)]
        danger_accept_invalid_certs: bool,
        /// Proxy url for all requests, e.g. `http://127.0.0.1:3128`.
        proxy: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Self, Error> {
        let base_url = normalize_base_url(&base_url)?;

        let mut header_map = HeaderMap::new();
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key_val = HeaderValue::from_str(&api_key)
            .map_err(|e| Error::config(format!("api key: {}", e)))?;
        key_val.set_sensitive(true);
        header_map.insert(HeaderName::from_static(API_KEY_HEADER), key_val);

        let mut builder = reqwest::Client::builder()
            .default_headers(header_map)
            .danger_accept_invalid_certs(danger_accept_invalid_certs);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        if let Some(t) = connect_timeout {
            builder = builder.connect_timeout(t);
        }
        if let Some(t) = tcp_keepalive {
            builder = builder.tcp_keepalive(t);
        }
        if let Some(t) = pool_idle_timeout {
            builder = builder.pool_idle_timeout(t);
        }
        if let Some(p) = proxy {
            let proxy = reqwest::Proxy::all(&p).map_err(|e| Error::config(format!("proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }

        let http_client = builder.build().map_err(Error::config)?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Always ends with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}{path}`, decoding the body as `T`.
    ///
    /// `path` is appended as is, e.g. `get/domain/all`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "GET", path, "dispatching mailcow request");

        let req = self.http_client.get(url);
        self.dispatch(req, "GET", path).await
    }

    /// `POST {base_url}{path}` with `payload` as the json body, decoding the reply as `T`.
    pub async fn post<T, P>(&self, path: &str, payload: &P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)
            .map_err(|e| Error::new(format!("failed to encode request body: {}", e)))?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "POST", path, "dispatching mailcow request");

        let req = self.http_client.post(url).body(body);
        self.dispatch(req, "POST", path).await
    }

    /// Like [`Client::get`] for endpoints that answer with a bare object for one id
    /// and with an array for `all`. Always yields a `Vec`.
    ///
    /// An unknown id is answered with `{}`, which yields an empty `Vec`.
    pub async fn get_many<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let raw: serde_json::Value = self.get(path).await?;
        if raw.as_object().is_some_and(serde_json::Map::is_empty) {
            return Ok(Vec::new());
        }
        into_vec_result(async { serde_json::from_value::<OneOrMany<T>>(raw).map_err(Error::from) })
            .await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<T, Error> {
        let resp = req.send().await.map_err(|e| {
            let err = Error::from(e);
            tracing::debug!(method, path, error = %err, "mailcow request failed");
            err
        })?;

        parse_json_response(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_with_newline_is_a_config_error() {
        let err = Client::builder()
            .base_url("https://mail.example.com/api/v1")
            .api_key("bad\nkey")
            .build()
            .unwrap_err();

        assert!(
            err.message().starts_with("invalid client configuration"),
            "{}",
            err
        );
    }

    #[test]
    fn unparsable_proxy_is_a_config_error() {
        for proxy in ["::not a url::", "http://[::1"] {
            let err = Client::builder()
                .base_url("https://mail.example.com/api/v1")
                .api_key("key")
                .proxy(proxy)
                .build()
                .unwrap_err();

            assert!(
                err.message().starts_with("invalid client configuration"),
                "{}: {}",
                proxy,
                err
            );
        }
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = Client::builder()
            .base_url("https://mail.example.com/api/v1")
            .api_key("key")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://mail.example.com/api/v1/");
    }
}
