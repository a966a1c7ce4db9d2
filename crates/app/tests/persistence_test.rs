//! Integration tests for persisting client state to the data directory.
//!
//! These tests drive a `Workbench` over the file-backed store, then load a
//! fresh one from the same directory and check what survived.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use courier_application::ports::{
    HttpClient, HttpClientError, KeyValueStore, TransportRequest, TransportResponse,
};
use courier_application::{ExecuteRequest, Workbench};
use courier_domain::{HISTORY_LIMIT, HttpMethod, RequestSpec};
use courier_infrastructure::{FileKeyValueStore, SystemClock};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

/// Answers every request with its own URL, without touching the network.
struct StubClient;

impl HttpClient for StubClient {
    async fn send(
        &self,
        request: &TransportRequest,
        _timeout: Duration,
    ) -> Result<TransportResponse, HttpClientError> {
        Ok(TransportResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: BTreeMap::from([("content-type".to_string(), "application/json".to_string())]),
            body: json!({"url": request.url}),
        })
    }
}

type Bench = Workbench<StubClient, FileKeyValueStore, SystemClock>;

async fn open(dir: &Path) -> Bench {
    Workbench::load(
        ExecuteRequest::new(StubClient, Duration::from_secs(5)),
        FileKeyValueStore::new(dir),
        SystemClock::new(),
    )
    .await
}

#[tokio::test]
async fn test_fresh_directory_starts_with_seed_collection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let bench = open(temp_dir.path()).await;

    assert_eq!(bench.state().collections().len(), 1);
    assert_eq!(bench.state().collections()[0].name, "Test Collection");
    assert!(bench.state().environments().is_empty());
    assert!(bench.state().history().is_empty());
    // Nothing is written until something changes.
    assert!(!temp_dir.path().join("collections.json").exists());
}

#[tokio::test]
async fn test_state_survives_reload() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let (collection_id, env_id) = {
        let mut bench = open(temp_dir.path()).await;

        let collection_id = bench.add_collection("My API").await;
        bench
            .save_request_to_collection(
                &collection_id,
                &RequestSpec::get("List users", "https://api.example.com/users"),
            )
            .await
            .unwrap();

        let env_id = bench.add_environment("Staging").await;
        bench
            .update_environment_variable(&env_id, "host", "staging.example.com", true)
            .await
            .unwrap();

        bench
            .send_request(&RequestSpec::get("Health", "https://api.example.com/health"))
            .await;

        (collection_id, env_id)
    };

    assert!(temp_dir.path().join("collections.json").is_file());
    assert!(temp_dir.path().join("environments.json").is_file());
    assert!(temp_dir.path().join("requestHistory.json").is_file());

    let bench = open(temp_dir.path()).await;

    let collection = bench
        .state()
        .collections()
        .iter()
        .find(|c| c.id == collection_id)
        .expect("collection should be restored");
    assert_eq!(collection.requests[0].name, "List users");
    assert_eq!(collection.requests[0].method, HttpMethod::Get);

    let env = &bench.state().environments()[0];
    assert_eq!(env.id, env_id);
    assert_eq!(env.value_of("host"), Some("staging.example.com"));

    let history = bench.state().history();
    assert_eq!(history.len(), 1);
    let entry = &history.entries()[0];
    assert_eq!(entry.request.url, "https://api.example.com/health");
    assert_eq!(
        entry.response.as_ref().map(|r| r.body.clone()),
        Some(json!({"url": "https://api.example.com/health"}))
    );

    // The active environment is session state and is not restored.
    assert!(bench.state().active_environment().is_none());
}

#[tokio::test]
async fn test_only_stored_keys_replace_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = FileKeyValueStore::new(temp_dir.path());
    store
        .set("environments", r#"[{"id":"e1","name":"Prod","variables":[]}]"#)
        .await
        .unwrap();

    let bench = open(temp_dir.path()).await;

    assert_eq!(bench.state().environments()[0].name, "Prod");
    assert_eq!(bench.state().collections()[0].id, "httpbin-test-collection");
}

#[tokio::test]
async fn test_corrupt_file_falls_back_to_default() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("collections.json"), "{ not json").unwrap();

    let bench = open(temp_dir.path()).await;

    assert_eq!(bench.state().collections().len(), 1);
    assert_eq!(bench.state().collections()[0].name, "Test Collection");
}

#[tokio::test]
async fn test_persisted_history_is_capped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    {
        let mut bench = open(temp_dir.path()).await;
        for i in 0..HISTORY_LIMIT + 5 {
            bench
                .send_request(&RequestSpec::get("Page", format!("https://api.example.com/{i}")))
                .await;
        }
    }

    let raw = std::fs::read_to_string(temp_dir.path().join("requestHistory.json")).unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), HISTORY_LIMIT);

    let bench = open(temp_dir.path()).await;
    assert_eq!(
        bench.state().history().entries()[0].request.url,
        format!("https://api.example.com/{}", HISTORY_LIMIT + 4)
    );
}

#[tokio::test]
async fn test_legacy_null_auth_is_accepted() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = FileKeyValueStore::new(temp_dir.path());
    store
        .set(
            "collections",
            r#"[{"id":"c1","name":"Old","requests":[{"id":"r1","name":"Ping","method":"GET","url":"https://example.com","params":[],"headers":[],"body":{"type":"none"},"auth":null}],"folders":[]}]"#,
        )
        .await
        .unwrap();

    let bench = open(temp_dir.path()).await;

    let request = &bench.state().collections()[0].requests[0];
    assert_eq!(request.name, "Ping");
    assert!(!request.auth.is_configured());
}
