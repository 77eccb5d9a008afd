use mailcow_sdk::Client;
use mailcow_sdk::logs::SyslogEntry;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub domain: String,
}

fn get_config() -> Config {
    let file_str = std::fs::read_to_string("./tests/live/config.toml").unwrap();
    toml::from_str(&file_str).unwrap()
}

fn get_client() -> (Client, Config) {
    let conf = get_config();
    let client = Client::builder()
        .base_url(&conf.base_url)
        .api_key(&conf.api_key)
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap();
    (client, conf)
}

#[tokio::test]
#[ignore]
async fn version_test() {
    let (client, _) = get_client();
    let resp = client.version().await;
    match resp {
        Ok(version) => println!("Version: {}", version.version),
        Err(e) => println!("Error: {}", e),
    }
}

#[tokio::test]
#[ignore]
async fn get_domains_test() {
    let (client, conf) = get_client();
    let all = client.get_domains("all").await.unwrap();
    println!("{:#?}", all);

    let one = client.get_domains(conf.domain.as_str()).await.unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].domain_name, conf.domain);
}

#[tokio::test]
#[ignore]
async fn get_mailboxes_test() {
    let (client, _) = get_client();
    let resp = client.get_mailboxes("all").await;
    println!("{:#?}", resp);
}

#[tokio::test]
#[ignore]
async fn dkim_test() {
    let (client, conf) = get_client();
    let resp = client.get_dkim(&conf.domain).await;
    println!("{:#?}", resp);
}

#[tokio::test]
#[ignore]
async fn postfix_logs_test() {
    let (client, _) = get_client();
    let logs: Vec<SyslogEntry> = client.postfix_logs(10).await.unwrap();
    for entry in logs {
        println!("{} {:?}: {}", entry.time, entry.program, entry.message);
    }
}

#[tokio::test]
#[ignore]
async fn status_test() {
    let (client, _) = get_client();
    println!("{:#?}", client.container_status().await);
    println!("{:#?}", client.vmail_status().await);
}

#[tokio::test]
#[ignore]
async fn alias_lifecycle_test() {
    let (client, conf) = get_client();
    let address = format!("sdk-live-test@{}", conf.domain);
    let goto = format!("postmaster@{}", conf.domain);

    let added = client
        .add_alias()
        .address(&address)
        .goto(&goto)
        .active(false)
        .build()
        .send()
        .await
        .unwrap();
    println!("{:#?}", added);

    let aliases = client.get_aliases("all").await.unwrap();
    let ids: Vec<u64> = aliases
        .iter()
        .filter(|a| a.address == address)
        .map(|a| a.id)
        .collect();
    assert!(!ids.is_empty());

    let deleted = client.delete_aliases(&ids).await.unwrap();
    assert!(deleted.iter().all(|r| r.is_success()), "{:#?}", deleted);
}
