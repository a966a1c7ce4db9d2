//! Workbench: the client's state plus the ports it persists and sends through.

use chrono::{DateTime, Utc};
use courier_domain::{
    AppState, Collection, DomainError, Environment, HistoryEntry, RequestPatch, RequestSpec,
    ResponseSpec,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApplicationResult;
use crate::ports::{
    COLLECTIONS_KEY, Clock, ENVIRONMENTS_KEY, HISTORY_KEY, HttpClient, KeyValueStore,
};
use crate::use_cases::ExecuteRequest;

/// Owns the in-memory [`AppState`] and keeps the store in step with it.
///
/// Memory is authoritative. A failed write is logged and the in-memory
/// change stands; the next successful write of that key catches up.
pub struct Workbench<C, S, K> {
    state: AppState,
    executor: ExecuteRequest<C>,
    store: S,
    clock: K,
}

impl<C: HttpClient, S: KeyValueStore, K: Clock> Workbench<C, S, K> {
    /// Creates a workbench with default state, ignoring anything stored.
    #[must_use]
    pub fn new(executor: ExecuteRequest<C>, store: S, clock: K) -> Self {
        Self {
            state: AppState::default(),
            executor,
            store,
            clock,
        }
    }

    /// Creates a workbench from whatever the store holds.
    ///
    /// Each key is restored independently. Missing keys keep their defaults,
    /// and so do keys that cannot be read or decoded.
    pub async fn load(executor: ExecuteRequest<C>, store: S, clock: K) -> Self {
        let collections = read_or_warn::<Vec<Collection>>(&store, COLLECTIONS_KEY).await;
        let environments = read_or_warn::<Vec<Environment>>(&store, ENVIRONMENTS_KEY).await;
        let history = read_or_warn::<Vec<HistoryEntry>>(&store, HISTORY_KEY).await;

        tracing::debug!(
            collections = collections.as_ref().map(Vec::len),
            environments = environments.as_ref().map(Vec::len),
            history = history.as_ref().map(Vec::len),
            "restored stored state"
        );

        Self {
            state: AppState::restore(collections, environments, history),
            executor,
            store,
            clock,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the current time according to the workbench clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Merges a partial update into the request being edited.
    pub fn update_active_request(&mut self, patch: RequestPatch) {
        self.state.update_active_request(patch);
    }

    /// Replaces the request being edited with a fresh one.
    pub fn create_new_request(&mut self) {
        self.state.create_new_request();
    }

    /// Sends `request`, records a copy of it in history and persists history.
    pub async fn send_request(&mut self, request: &RequestSpec) -> ResponseSpec {
        self.state.begin_send();

        let response = self.executor.execute(request).await;
        let entry = HistoryEntry::new(self.clock.now(), request.clone(), Some(response.clone()));
        self.state.finish_send(entry);

        self.persist(HISTORY_KEY, &self.state.history().to_vec())
            .await;
        response
    }

    /// Saves a copy of `request` into a collection, replacing one with the
    /// same id.
    ///
    /// # Errors
    /// Returns an error if the collection does not exist. State is unchanged
    /// in that case.
    pub async fn save_request_to_collection(
        &mut self,
        collection_id: &str,
        request: &RequestSpec,
    ) -> ApplicationResult<()> {
        if !self.state.save_request_to_collection(collection_id, request) {
            return Err(DomainError::CollectionNotFound(collection_id.to_string()).into());
        }
        self.persist(COLLECTIONS_KEY, self.state.collections()).await;
        Ok(())
    }

    /// Creates an empty collection and returns its id.
    pub async fn add_collection(&mut self, name: &str) -> String {
        let id = self.state.add_collection(name);
        self.persist(COLLECTIONS_KEY, self.state.collections()).await;
        id
    }

    /// Creates an empty environment and returns its id.
    pub async fn add_environment(&mut self, name: &str) -> String {
        let id = self.state.add_environment(name);
        self.persist(ENVIRONMENTS_KEY, self.state.environments())
            .await;
        id
    }

    /// Selects an environment, or clears the selection with `None`.
    ///
    /// The selection lives in memory only.
    ///
    /// # Errors
    /// Returns an error if the environment does not exist. The previous
    /// selection is kept in that case.
    pub fn set_active_environment(&mut self, environment_id: Option<&str>) -> ApplicationResult<()> {
        if self.state.set_active_environment(environment_id) {
            Ok(())
        } else {
            let id = environment_id.unwrap_or_default().to_string();
            Err(DomainError::EnvironmentNotFound(id).into())
        }
    }

    /// Sets a variable on an environment, replacing one with the same key.
    ///
    /// # Errors
    /// Returns an error if the environment does not exist.
    pub async fn update_environment_variable(
        &mut self,
        environment_id: &str,
        key: &str,
        value: &str,
        enabled: bool,
    ) -> ApplicationResult<()> {
        if !self
            .state
            .update_environment_variable(environment_id, key, value, enabled)
        {
            return Err(DomainError::EnvironmentNotFound(environment_id.to_string()).into());
        }
        self.persist(ENVIRONMENTS_KEY, self.state.environments())
            .await;
        Ok(())
    }

    async fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(error) = write(&self.store, key, value).await {
            tracing::warn!(key, %error, "failed to persist state");
        }
    }
}

async fn write<S, T>(store: &S, key: &str, value: &T) -> ApplicationResult<()>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json).await?;
    Ok(())
}

async fn read<S, T>(store: &S, key: &str) -> ApplicationResult<Option<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

async fn read_or_warn<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    match read(store, key).await {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "ignoring unreadable stored value");
            None
        }
    }
}
