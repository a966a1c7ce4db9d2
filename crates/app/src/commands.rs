//! Runs parsed commands against a workbench and shapes their JSON output.

use courier_application::ports::{Clock, HttpClient, KeyValueStore};
use courier_application::{ApplicationError, Workbench};
use courier_domain::{
    BodyView, DomainError, HistoryEntry, ResponseSpec, render_body,
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::cli::{CollectionsCommand, Command, EnvCommand, SendArgs};

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Invalid input or unknown reference.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The workbench rejected the operation.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Executes one command and returns what should be printed.
///
/// # Errors
/// Returns an error when the command refers to a collection or environment
/// that does not exist, or when its arguments describe an invalid request.
pub async fn run<C, S, K>(
    command: Command,
    bench: &mut Workbench<C, S, K>,
) -> Result<Value, CommandError>
where
    C: HttpClient,
    S: KeyValueStore,
    K: Clock,
{
    match command {
        Command::Send(args) => send(&args, bench).await,
        Command::History { limit } => Ok(history(bench, limit)),
        Command::Collections(command) => collections(command, bench).await,
        Command::Env(command) => environments(command, bench).await,
    }
}

async fn send<C, S, K>(
    args: &SendArgs,
    bench: &mut Workbench<C, S, K>,
) -> Result<Value, CommandError>
where
    C: HttpClient,
    S: KeyValueStore,
    K: Clock,
{
    let request = args.to_request()?;
    if let Some(id) = &args.save_to {
        if !bench.state().collections().iter().any(|c| &c.id == id) {
            return Err(DomainError::CollectionNotFound(id.clone()).into());
        }
    }

    let response = bench.send_request(&request).await;

    if let Some(id) = &args.save_to {
        bench.save_request_to_collection(id, &request).await?;
    }

    Ok(json!({
        "summary": summary(&response),
        "rendered": render_body(&response.body),
        "response": response,
    }))
}

fn summary(response: &ResponseSpec) -> Value {
    json!({
        "status": response.status,
        "statusText": response.status_text,
        "category": response.category().label(),
        "time": response.time_display(),
        "size": response.size_display(),
        "view": BodyView::classify(&response.body).label(),
    })
}

fn history<C, S, K>(bench: &Workbench<C, S, K>, limit: usize) -> Value
where
    C: HttpClient,
    S: KeyValueStore,
    K: Clock,
{
    let now = bench.now();
    let entries: Vec<Value> = bench
        .state()
        .history()
        .entries()
        .iter()
        .take(limit)
        .map(|entry: &HistoryEntry| {
            json!({
                "id": entry.id,
                "when": entry.time_ago(now),
                "method": entry.request.method,
                "url": entry.request.url,
                "status": entry.response.as_ref().map(|r| r.status),
            })
        })
        .collect();
    Value::Array(entries)
}

async fn collections<C, S, K>(
    command: CollectionsCommand,
    bench: &mut Workbench<C, S, K>,
) -> Result<Value, CommandError>
where
    C: HttpClient,
    S: KeyValueStore,
    K: Clock,
{
    match command {
        CollectionsCommand::List => Ok(bench
            .state()
            .collections()
            .iter()
            .map(|c| json!({"id": c.id, "name": c.name, "requests": c.request_count()}))
            .collect()),
        CollectionsCommand::Add { name } => {
            let id = bench.add_collection(&name).await;
            Ok(json!({"id": id, "name": name}))
        }
        CollectionsCommand::Show { id } => bench
            .state()
            .collections()
            .iter()
            .find(|c| c.id == id)
            .map(|c| json!(c))
            .ok_or_else(|| DomainError::CollectionNotFound(id).into()),
    }
}

async fn environments<C, S, K>(
    command: EnvCommand,
    bench: &mut Workbench<C, S, K>,
) -> Result<Value, CommandError>
where
    C: HttpClient,
    S: KeyValueStore,
    K: Clock,
{
    match command {
        EnvCommand::List => Ok(json!(bench.state().environments())),
        EnvCommand::Add { name } => {
            let id = bench.add_environment(&name).await;
            Ok(json!({"id": id, "name": name}))
        }
        EnvCommand::Set {
            id,
            key,
            value,
            disabled,
        } => {
            bench
                .update_environment_variable(&id, &key, &value, !disabled)
                .await?;
            Ok(environment(bench, &id))
        }
        EnvCommand::Use { id } => {
            bench.set_active_environment(Some(&id))?;
            Ok(json!(bench.state().active_environment()))
        }
    }
}

fn environment<C, S, K>(bench: &Workbench<C, S, K>, id: &str) -> Value
where
    C: HttpClient,
    S: KeyValueStore,
    K: Clock,
{
    json!(bench.state().environments().iter().find(|e| e.id == id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::time::Duration;

    use clap::Parser;
    use courier_application::ExecuteRequest;
    use courier_application::ports::{HttpClientError, TransportRequest, TransportResponse};
    use courier_infrastructure::{MemoryKeyValueStore, SystemClock};
    use pretty_assertions::assert_eq;

    use crate::cli::Cli;

    struct EchoClient;

    impl HttpClient for EchoClient {
        async fn send(
            &self,
            request: &TransportRequest,
            _timeout: Duration,
        ) -> Result<TransportResponse, HttpClientError> {
            Ok(TransportResponse {
                status: 200,
                status_text: "OK".to_string(),
                headers: BTreeMap::new(),
                body: json!({"url": request.url}),
            })
        }
    }

    type Bench = Workbench<EchoClient, MemoryKeyValueStore, SystemClock>;

    fn bench() -> Bench {
        Workbench::new(
            ExecuteRequest::new(EchoClient, Duration::from_secs(5)),
            MemoryKeyValueStore::new(),
            SystemClock::new(),
        )
    }

    async fn exec(bench: &mut Bench, args: &[&str]) -> Result<Value, CommandError> {
        let cli = Cli::try_parse_from(std::iter::once(&"courier").chain(args)).unwrap();
        run(cli.command, bench).await
    }

    #[tokio::test]
    async fn test_send_prints_summary_and_records_history() {
        let mut bench = bench();

        let output = exec(&mut bench, &["send", "GET", "https://example.com", "-q", "a=1"])
            .await
            .unwrap();

        assert_eq!(output["summary"]["status"], 200);
        assert_eq!(output["summary"]["category"], "success");
        assert_eq!(output["summary"]["view"], "JSON");
        assert_eq!(output["response"]["body"]["url"], "https://example.com?a=1");
        assert_eq!(
            output["rendered"],
            "{\n  \"url\": \"https://example.com?a=1\"\n}"
        );

        let history = exec(&mut bench, &["history"]).await.unwrap();
        assert_eq!(history.as_array().unwrap().len(), 1);
        assert_eq!(history[0]["method"], "GET");
        assert_eq!(history[0]["when"], "just now");
    }

    #[tokio::test]
    async fn test_send_can_save_into_collection() {
        let mut bench = bench();
        let added = exec(&mut bench, &["collections", "add", "Mine"]).await.unwrap();
        let id = added["id"].as_str().unwrap().to_string();

        exec(
            &mut bench,
            &["send", "POST", "https://example.com", "--name", "create", "--save-to", &id],
        )
        .await
        .unwrap();

        let shown = exec(&mut bench, &["collections", "show", &id]).await.unwrap();
        assert_eq!(shown["requests"][0]["name"], "create");
        assert_eq!(shown["requests"][0]["method"], "POST");
    }

    #[tokio::test]
    async fn test_send_to_unknown_collection_sends_nothing() {
        let mut bench = bench();

        let result = exec(
            &mut bench,
            &["send", "GET", "https://example.com", "--save-to", "missing"],
        )
        .await;

        assert!(matches!(
            result,
            Err(CommandError::Domain(DomainError::CollectionNotFound(_)))
        ));
        assert!(bench.state().history().is_empty());
    }

    #[tokio::test]
    async fn test_collections_list_includes_seed() {
        let mut bench = bench();
        let listed = exec(&mut bench, &["collections", "list"]).await.unwrap();
        assert_eq!(listed[0]["name"], "Test Collection");
        assert_eq!(listed[0]["requests"], 5);
    }

    #[tokio::test]
    async fn test_env_commands() {
        let mut bench = bench();
        let added = exec(&mut bench, &["env", "add", "Local"]).await.unwrap();
        let id = added["id"].as_str().unwrap().to_string();

        let env = exec(&mut bench, &["env", "set", &id, "host", "localhost"])
            .await
            .unwrap();
        assert_eq!(env["variables"][0]["key"], "host");
        assert_eq!(env["variables"][0]["enabled"], true);

        let active = exec(&mut bench, &["env", "use", &id]).await.unwrap();
        assert_eq!(active["name"], "Local");

        let missing = exec(&mut bench, &["env", "use", "nope"]).await;
        assert!(missing.is_err());
        assert_eq!(
            bench.state().active_environment().map(|e| e.id.clone()),
            Some(id)
        );
    }
}
