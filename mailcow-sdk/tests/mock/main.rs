use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use mailcow_sdk::Client;
use mailcow_sdk::alias::AliasAttributes;
use mailcow_sdk::fail2ban::Fail2BanAttributes;
use mailcow_sdk::ratelimit::RatelimitAttributes;
use mailcow_sdk::types::RateLimitFrame;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

const API_KEY: &str = "390448-22B69F-FA37D9-19701B-6F033F";

#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: String,
}

impl Seen {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Answers every request with the same canned reply and remembers what it received.
#[derive(Clone)]
struct MockServer {
    status: StatusCode,
    reply: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl MockServer {
    fn new(status: StatusCode, reply: impl Into<String>) -> Self {
        Self {
            status,
            reply: reply.into(),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn json(reply: Value) -> Self {
        Self::new(StatusCode::OK, reply.to_string())
    }

    /// Binds to a free port and returns the api base url.
    async fn start(&self) -> String {
        let app = Router::new().fallback(record).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/v1", addr)
    }

    fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    fn only_request(&self) -> Seen {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(mock): State<MockServer>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    mock.seen.lock().unwrap().push(Seen {
        method,
        path: uri.path().to_owned(),
        headers,
        body,
    });
    (
        mock.status,
        [(header::CONTENT_TYPE, "application/json")],
        mock.reply,
    )
}

fn client_for(base_url: &str) -> Client {
    Client::builder()
        .base_url(base_url)
        .api_key(API_KEY)
        .build()
        .unwrap()
}

fn success_reply(msg: Value) -> Value {
    json!([{ "type": "success", "log": [], "msg": msg }])
}

#[tokio::test]
async fn every_request_carries_api_key_and_json_content_type() {
    let mock = MockServer::json(json!([]));
    let client = client_for(&mock.start().await);

    client.get_domains("all").await.unwrap();
    client.delete_domains(&["example.com"]).await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    for req in requests {
        assert_eq!(req.headers["x-api-key"], API_KEY);
        assert_eq!(req.headers[header::CONTENT_TYPE], "application/json");
    }
}

#[tokio::test]
async fn single_domain_is_returned_as_one_element_vec() {
    let mock = MockServer::json(json!({
        "domain_name": "example.com",
        "active": "1",
        "mboxes_in_domain": 3,
        "rl": false
    }));
    let client = client_for(&mock.start().await);

    let domains = client.get_domains("example.com").await.unwrap();

    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].domain_name, "example.com");
    assert!(domains[0].active);
    assert_eq!(domains[0].mboxes_in_domain, Some(3));

    let req = mock.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/api/v1/get/domain/example.com");
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn all_domains_keep_server_order() {
    let mock = MockServer::json(json!([
        { "domain_name": "a.example", "active": 1 },
        { "domain_name": "b.example", "active": 0 }
    ]));
    let client = client_for(&mock.start().await);

    let domains = client.get_domains("all").await.unwrap();

    let names: Vec<_> = domains.iter().map(|d| d.domain_name.as_str()).collect();
    assert_eq!(names, ["a.example", "b.example"]);
    assert!(!domains[1].active);
    assert_eq!(mock.only_request().path, "/api/v1/get/domain/all");
}

#[tokio::test]
async fn get_returns_body_unchanged_and_is_repeatable() {
    let body = json!([{ "domain_name": "example.com", "custom": { "nested": [1, "2"] } }]);
    let mock = MockServer::json(body.clone());
    let client = client_for(&mock.start().await);

    let first: Value = client.get("get/domain/all").await.unwrap();
    let second: Value = client.get("get/domain/all").await.unwrap();

    assert_eq!(first, body);
    assert_eq!(first, second);
}

#[tokio::test]
async fn delete_aliases_posts_the_id_array() {
    let reply = success_reply(json!(["alias_removed", "1, 2, 3"]));
    let mock = MockServer::json(reply.clone());
    let client = client_for(&mock.start().await);

    let resp = client.delete_aliases(&[1, 2, 3]).await.unwrap();

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/v1/delete/alias");
    assert_eq!(req.json(), json!([1, 2, 3]));
    assert_eq!(serde_json::to_value(&resp).unwrap(), reply);
    assert!(resp[0].is_success());
}

#[tokio::test]
async fn unset_optional_fields_are_omitted() {
    let mock = MockServer::json(success_reply(json!(["domain_added", "example.com"])));
    let client = client_for(&mock.start().await);

    client
        .add_domain()
        .domain("example.com")
        .mailboxes(10)
        .build()
        .send()
        .await
        .unwrap();

    let req = mock.only_request();
    assert_eq!(req.path, "/api/v1/add/domain");
    assert_eq!(req.json(), json!({ "domain": "example.com", "mailboxes": 10 }));
}

#[tokio::test]
async fn edit_request_is_items_plus_attr() {
    let mock = MockServer::json(success_reply(json!("alias_modified")));
    let client = client_for(&mock.start().await);

    client
        .edit_alias()
        .item(4)
        .items([5, 6])
        .attr(AliasAttributes::builder().active(false).goto("b@example.com").build())
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(
        mock.only_request().json(),
        json!({ "items": [4, 5, 6], "attr": { "goto": "b@example.com", "active": false } })
    );
}

#[tokio::test]
async fn error_msg_becomes_error_message() {
    let mock = MockServer::new(
        StatusCode::BAD_REQUEST,
        json!({ "msg": "domain does not exist", "type": "error" }).to_string(),
    );
    let client = client_for(&mock.start().await);

    let err = client.delete_domains(&["nope.example"]).await.unwrap_err();

    assert_eq!(err.message(), "domain does not exist");
}

#[tokio::test]
async fn unknown_domain_yields_empty_vec() {
    let mock = MockServer::json(json!({}));
    let client = client_for(&mock.start().await);

    let domains = client.get_domains("nope.example").await.unwrap();

    assert!(domains.is_empty());
    assert_eq!(mock.only_request().path, "/api/v1/get/domain/nope.example");
}

#[tokio::test]
async fn unlimited_mailbox_does_not_break_listing() {
    let mock = MockServer::json(json!([
        { "username": "a@example.com", "active": 1, "quota": 0, "percent_in_use": "- " },
        { "username": "b@example.com", "active": "1", "quota": "1073741824", "percent_in_use": "12" }
    ]));
    let client = client_for(&mock.start().await);

    let mailboxes = client.get_mailboxes("all").await.unwrap();

    assert_eq!(mailboxes.len(), 2);
    assert_eq!(mailboxes[0].username, "a@example.com");
    assert_eq!(mailboxes[0].percent_in_use, None);
    assert_eq!(mailboxes[1].quota, Some(1_073_741_824));
    assert_eq!(mailboxes[1].percent_in_use, Some(12.0));
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status() {
    let mock = MockServer::new(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    let client = client_for(&mock.start().await);

    let err = client.get_domains("all").await.unwrap_err();

    assert!(err.message().contains("502"), "{}", err);
    assert!(err.message().contains("<html>bad gateway</html>"), "{}", err);
}

#[tokio::test]
async fn undecodable_success_body_is_an_error() {
    let mock = MockServer::json(json!({ "unexpected": true }));
    let client = client_for(&mock.start().await);

    let err = client.version().await.unwrap_err();

    assert!(err.message().starts_with("failed to decode response"), "{}", err);
}

#[tokio::test]
async fn connection_refused_is_an_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(&format!("http://{}/api/v1/", addr));

    let err = client.get_domains("all").await.unwrap_err();

    assert!(err.message().starts_with("request failed"), "{}", err);
}

#[tokio::test]
async fn base_url_with_or_without_slash_hits_same_path() {
    let mock = MockServer::json(json!([]));
    let base = mock.start().await;

    client_for(&base).get_mail_queue().await.unwrap();
    client_for(&format!("{}/", base))
        .get_mail_queue()
        .await
        .unwrap();

    let paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/api/v1/get/mailq/all", "/api/v1/get/mailq/all"]);
}

#[tokio::test]
async fn queue_actions_send_fixed_bodies() {
    let mock = MockServer::json(success_reply(json!("queue_command_success")));
    let client = client_for(&mock.start().await);

    client.flush_mail_queue().await.unwrap();
    client.delete_mail_queue().await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].path, "/api/v1/edit/mailq");
    assert_eq!(requests[0].json(), json!({ "action": "flush" }));
    assert_eq!(requests[1].path, "/api/v1/delete/mailq");
    assert_eq!(requests[1].json(), json!({ "action": "super_delete" }));
}

#[tokio::test]
async fn ratelimit_edit_keeps_trailing_slash() {
    let mock = MockServer::json(success_reply(json!(["rl_saved", "example.com"])));
    let client = client_for(&mock.start().await);

    client
        .edit_domain_ratelimit()
        .item("example.com")
        .attr(
            RatelimitAttributes::builder()
                .rl_value(10)
                .rl_frame(RateLimitFrame::Hour)
                .build(),
        )
        .build()
        .send()
        .await
        .unwrap();

    let req = mock.only_request();
    assert_eq!(req.path, "/api/v1/edit/rl-domain/");
    assert_eq!(
        req.json(),
        json!({ "items": ["example.com"], "attr": { "rl_value": 10, "rl_frame": "h" } })
    );
}

#[tokio::test]
async fn fail2ban_edit_targets_the_single_config() {
    let mock = MockServer::json(success_reply(json!("f2b_modified")));
    let client = client_for(&mock.start().await);

    client
        .edit_fail2ban()
        .attr(Fail2BanAttributes::builder().ban_time(600).max_attempts(5).build())
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(
        mock.only_request().json(),
        json!({ "items": ["none"], "attr": { "ban_time": 600, "max_attempts": 5 } })
    );
}

#[tokio::test]
async fn rspamd_history_uses_dashed_log_name() {
    let mock = MockServer::json(json!([
        { "unix_time": 1700000000, "score": 3.5, "action": "no action", "symbols": {} }
    ]));
    let client = client_for(&mock.start().await);

    let entries = client.rspamd_history(5).await.unwrap();

    assert_eq!(mock.only_request().path, "/api/v1/get/logs/rspamd-history/5");
    assert_eq!(entries[0].score, Some(3.5));
    assert!(entries[0].extra.contains_key("symbols"));
}

#[tokio::test]
async fn container_status_is_keyed_by_service() {
    let mock = MockServer::json(json!({
        "postfix-mailcow": { "type": "info", "container": "postfix-mailcow", "state": "running", "started_at": "2024-01-01T00:00:00Z", "image": "mailcow/postfix:1.74" },
        "sogo-mailcow": { "type": "info", "container": "sogo-mailcow", "state": "exited" }
    }));
    let client = client_for(&mock.start().await);

    let status = client.container_status().await.unwrap();

    assert!(status["postfix-mailcow"].is_running());
    assert!(!status["sogo-mailcow"].is_running());
}

#[tokio::test]
async fn add_alias_without_destination_is_rejected_locally() {
    let mock = MockServer::json(json!([]));
    let client = client_for(&mock.start().await);

    let err = client
        .add_alias()
        .address("info@example.com")
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(err.message().contains("goto"), "{}", err);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let mock = MockServer::json(json!([]));
    let client = client_for(&mock.start().await);

    let (a, b, c) = tokio::join!(
        client.get_aliases("all"),
        client.get_mailboxes("all"),
        client.get_resources()
    );
    assert!(a.unwrap().is_empty());
    assert!(b.unwrap().is_empty());
    assert!(c.unwrap().is_empty());

    let mut paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
    paths.sort();
    assert_eq!(
        paths,
        [
            "/api/v1/get/alias/all",
            "/api/v1/get/mailbox/all",
            "/api/v1/get/resource/all"
        ]
    );
}
