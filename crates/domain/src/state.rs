//! Application state.
//!
//! Everything the client keeps in memory between operations: the request
//! being edited, saved collections and environments, history, and the last
//! response. Mutations here are pure; persisting them is the caller's job.

use serde::{Deserialize, Serialize};

use crate::auth::AuthConfig;
use crate::collection::Collection;
use crate::environment::Environment;
use crate::history::{HistoryEntry, RequestHistory};
use crate::request::{HttpMethod, KeyValueList, RequestBody, RequestSpec};
use crate::response::ResponseSpec;

/// A partial update of the active request. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPatch {
    /// New identifier
    pub id: Option<String>,
    /// New name
    pub name: Option<String>,
    /// New method
    pub method: Option<HttpMethod>,
    /// New URL
    pub url: Option<String>,
    /// New query parameters
    pub params: Option<KeyValueList>,
    /// New headers
    pub headers: Option<KeyValueList>,
    /// New body
    pub body: Option<RequestBody>,
    /// New authentication
    pub auth: Option<AuthConfig>,
}

/// In-memory state of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    active_request: RequestSpec,
    collections: Vec<Collection>,
    environments: Vec<Environment>,
    active_environment: Option<String>,
    history: RequestHistory,
    current_response: Option<ResponseSpec>,
    is_loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_request: RequestSpec::default(),
            collections: vec![seed_collection()],
            environments: Vec::new(),
            active_environment: None,
            history: RequestHistory::new(),
            current_response: None,
            is_loading: false,
        }
    }
}

impl AppState {
    /// Creates a state from stored data, keeping the defaults for any part
    /// that was not stored.
    #[must_use]
    pub fn restore(
        collections: Option<Vec<Collection>>,
        environments: Option<Vec<Environment>>,
        history: Option<Vec<HistoryEntry>>,
    ) -> Self {
        let mut state = Self::default();
        if let Some(collections) = collections {
            state.collections = collections;
        }
        if let Some(environments) = environments {
            state.environments = environments;
        }
        if let Some(history) = history {
            state.history = RequestHistory::from_entries(history);
        }
        state
    }

    /// Returns the request being edited.
    #[must_use]
    pub const fn active_request(&self) -> &RequestSpec {
        &self.active_request
    }

    /// Returns the saved collections.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Returns the saved environments.
    #[must_use]
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    /// Returns the selected environment, if any.
    #[must_use]
    pub fn active_environment(&self) -> Option<&Environment> {
        let id = self.active_environment.as_deref()?;
        self.environments.iter().find(|env| env.id == id)
    }

    /// Returns the request history, newest first.
    #[must_use]
    pub const fn history(&self) -> &RequestHistory {
        &self.history
    }

    /// Returns the response of the last completed send.
    #[must_use]
    pub const fn current_response(&self) -> Option<&ResponseSpec> {
        self.current_response.as_ref()
    }

    /// Returns true while a send is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Merges the provided fields into the active request.
    pub fn update_active_request(&mut self, patch: RequestPatch) {
        let request = &mut self.active_request;
        if let Some(id) = patch.id {
            request.id = id;
        }
        if let Some(name) = patch.name {
            request.name = name;
        }
        if let Some(method) = patch.method {
            request.method = method;
        }
        if let Some(url) = patch.url {
            request.url = url;
        }
        if let Some(params) = patch.params {
            request.params = params;
        }
        if let Some(headers) = patch.headers {
            request.headers = headers;
        }
        if let Some(body) = patch.body {
            request.body = body;
        }
        if let Some(auth) = patch.auth {
            request.auth = auth;
        }
    }

    /// Replaces the active request with a fresh default one and clears the
    /// current response.
    pub fn create_new_request(&mut self) {
        self.active_request = RequestSpec::default();
        self.current_response = None;
    }

    /// Marks a send as started.
    pub const fn begin_send(&mut self) {
        self.is_loading = true;
    }

    /// Records a finished send: the response becomes current and the entry is
    /// prepended to history.
    pub fn finish_send(&mut self, entry: HistoryEntry) {
        self.current_response.clone_from(&entry.response);
        self.history.add(entry);
        self.is_loading = false;
    }

    /// Saves a copy of the request into a collection, replacing a request with
    /// the same id. Returns false if the collection does not exist.
    pub fn save_request_to_collection(&mut self, collection_id: &str, request: &RequestSpec) -> bool {
        match self.collections.iter_mut().find(|c| c.id == collection_id) {
            Some(collection) => {
                collection.upsert_request(request);
                true
            }
            None => false,
        }
    }

    /// Appends a new empty collection and returns its id.
    pub fn add_collection(&mut self, name: impl Into<String>) -> String {
        let collection = Collection::new(name);
        let id = collection.id.clone();
        self.collections.push(collection);
        id
    }

    /// Appends a new empty environment and returns its id.
    pub fn add_environment(&mut self, name: impl Into<String>) -> String {
        let environment = Environment::new(name);
        let id = environment.id.clone();
        self.environments.push(environment);
        id
    }

    /// Selects an environment, or clears the selection with `None`.
    ///
    /// An unknown id leaves the selection unchanged and returns false.
    pub fn set_active_environment(&mut self, environment_id: Option<&str>) -> bool {
        match environment_id {
            None => {
                self.active_environment = None;
                true
            }
            Some(id) if self.environments.iter().any(|env| env.id == id) => {
                self.active_environment = Some(id.to_string());
                true
            }
            Some(_) => false,
        }
    }

    /// Sets a variable on an environment, replacing one with the same key.
    /// Returns false if the environment does not exist.
    pub fn update_environment_variable(
        &mut self,
        environment_id: &str,
        key: &str,
        value: &str,
        enabled: bool,
    ) -> bool {
        match self.environments.iter_mut().find(|env| env.id == environment_id) {
            Some(environment) => {
                environment.set_variable(key, value, enabled);
                true
            }
            None => false,
        }
    }
}

/// The collection a fresh client starts with: a handful of httpbin.org
/// requests that exercise params, raw bodies, auth and headers.
#[must_use]
pub fn seed_collection() -> Collection {
    let requests = vec![
        RequestSpec::get("GET Request Test", "https://httpbin.org/get")
            .with_id("get-test")
            .with_param("test", "value"),
        RequestSpec::new("POST Request Test")
            .with_id("post-test")
            .with_url(HttpMethod::Post, "https://httpbin.org/post")
            .with_header("Content-Type", "application/json")
            .with_body(RequestBody::json("{\n  \"message\": \"Hello World\"\n}")),
        RequestSpec::get("Basic Auth Test", "https://httpbin.org/basic-auth/user/pass")
            .with_id("auth-test")
            .with_auth(AuthConfig::basic("user", "pass")),
        RequestSpec::get("Headers Test", "https://httpbin.org/headers")
            .with_id("headers-test")
            .with_header("X-Custom-Header", "Test Value"),
        RequestSpec::get("Delayed Response", "https://httpbin.org/delay/2").with_id("delay-test"),
    ];

    Collection {
        id: "httpbin-test-collection".to_string(),
        name: "Test Collection".to_string(),
        requests,
        folders: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_state_has_seed_collection() {
        let state = AppState::default();
        assert_eq!(state.collections().len(), 1);
        assert_eq!(state.collections()[0].requests.len(), 5);
        assert_eq!(state.active_request().name, "New Request");
        assert!(state.history().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_restore_replaces_only_stored_parts() {
        let state = AppState::restore(None, Some(vec![Environment::new("Prod")]), None);
        assert_eq!(state.collections()[0].id, "httpbin-test-collection");
        assert_eq!(state.environments().len(), 1);

        let state = AppState::restore(Some(Vec::new()), None, None);
        assert!(state.collections().is_empty());
    }

    #[test]
    fn test_update_active_request_merges() {
        let mut state = AppState::default();
        let id = state.active_request().id.clone();
        state.update_active_request(RequestPatch {
            url: Some("https://example.com".to_string()),
            method: Some(HttpMethod::Post),
            ..RequestPatch::default()
        });

        assert_eq!(state.active_request().id, id);
        assert_eq!(state.active_request().url, "https://example.com");
        assert_eq!(state.active_request().method, HttpMethod::Post);
        assert_eq!(state.active_request().name, "New Request");
    }

    #[test]
    fn test_create_new_request_clears_response() {
        let mut state = AppState::default();
        let old_id = state.active_request().id.clone();
        let response = ResponseSpec::no_response("boom", 1);
        state.begin_send();
        state.finish_send(HistoryEntry::new(
            Utc::now(),
            state.active_request().clone(),
            Some(response),
        ));
        assert!(state.current_response().is_some());

        state.create_new_request();
        assert!(state.current_response().is_none());
        assert_ne!(state.active_request().id, old_id);
    }

    #[test]
    fn test_finish_send_records_history() {
        let mut state = AppState::default();
        state.begin_send();
        assert!(state.is_loading());

        let request = RequestSpec::get("One", "https://example.com/1");
        state.finish_send(HistoryEntry::new(Utc::now(), request.clone(), None));

        assert!(!state.is_loading());
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().entries()[0].request, request);
    }

    #[test]
    fn test_save_request_to_collection() {
        let mut state = AppState::default();
        let collection_id = state.add_collection("Mine");
        let request = RequestSpec::get("Users", "https://example.com/users");

        assert!(state.save_request_to_collection(&collection_id, &request));
        assert!(state.save_request_to_collection(&collection_id, &request));
        assert!(!state.save_request_to_collection("missing", &request));

        let collection = state
            .collections()
            .iter()
            .find(|c| c.id == collection_id)
            .cloned()
            .unwrap_or_else(|| Collection::new("unreachable"));
        assert_eq!(collection.requests.len(), 1);
    }

    #[test]
    fn test_active_environment_selection() {
        let mut state = AppState::default();
        let env_id = state.add_environment("Staging");

        assert!(state.set_active_environment(Some(&env_id)));
        assert_eq!(state.active_environment().map(|e| e.name.as_str()), Some("Staging"));

        assert!(!state.set_active_environment(Some("missing")));
        assert_eq!(state.active_environment().map(|e| e.id.as_str()), Some(env_id.as_str()));

        assert!(state.set_active_environment(None));
        assert!(state.active_environment().is_none());
    }

    #[test]
    fn test_update_environment_variable() {
        let mut state = AppState::default();
        let env_id = state.add_environment("Local");

        assert!(state.update_environment_variable(&env_id, "host", "localhost", true));
        assert!(state.update_environment_variable(&env_id, "host", "127.0.0.1", false));
        assert!(!state.update_environment_variable("missing", "host", "x", true));

        let env = &state.environments()[0];
        assert_eq!(env.variables.len(), 1);
        assert_eq!(env.variables.all()[0].value, "127.0.0.1");
        assert!(!env.variables.all()[0].enabled);
    }
}
