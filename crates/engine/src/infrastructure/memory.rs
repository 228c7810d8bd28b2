//! In-memory actor documents for development and testing.
//!
//! Behaves like the host's document store: updates are atomic per call, and
//! registered pre-update interceptors see (and may rewrite) every pending
//! update before it lands. Nothing is persisted.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use onepiece_domain::common::{get_path, set_path};
use onepiece_domain::ActorId;
use serde_json::Value;

use crate::infrastructure::ports::{
    flag_path, ActorDocumentPort, FieldUpdates, PortError, PreUpdateInterceptor,
};

/// In-memory actor document store.
#[derive(Default)]
pub struct InMemoryActorDocuments {
    actors: DashMap<ActorId, Value>,
    interceptors: Vec<Arc<dyn PreUpdateInterceptor>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryActorDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `interceptor` before every update.
    pub fn add_interceptor(&mut self, interceptor: Arc<dyn PreUpdateInterceptor>) {
        tracing::debug!(interceptor = interceptor.name(), "Pre-update interceptor installed");
        self.interceptors.push(interceptor);
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn PreUpdateInterceptor>) -> Self {
        self.add_interceptor(interceptor);
        self
    }

    pub fn insert(&self, actor_id: ActorId, record: Value) {
        self.actors.insert(actor_id, record);
    }

    /// Copy of the stored record.
    pub fn snapshot(&self, actor_id: ActorId) -> Option<Value> {
        self.actors.get(&actor_id).map(|record| record.clone())
    }

    /// Number of update calls that were persisted.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every following update fail, as if the host rejected it.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn read<T>(&self, actor_id: ActorId, f: impl FnOnce(&Value) -> T) -> Result<T, PortError> {
        self.actors
            .get(&actor_id)
            .map(|record| f(record.value()))
            .ok_or_else(|| PortError::not_found(actor_id))
    }
}

#[async_trait]
impl ActorDocumentPort for InMemoryActorDocuments {
    async fn get_record(&self, actor_id: ActorId) -> Result<Value, PortError> {
        self.read(actor_id, Value::clone)
    }

    async fn get_field(&self, actor_id: ActorId, path: &str) -> Result<Option<Value>, PortError> {
        self.read(actor_id, |record| get_path(record, path).cloned())
    }

    async fn set_fields(
        &self,
        actor_id: ActorId,
        mut updates: FieldUpdates,
    ) -> Result<(), PortError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PortError::rejected("set_fields", "writes are disabled"));
        }

        let mut record = self
            .actors
            .get_mut(&actor_id)
            .ok_or_else(|| PortError::not_found(actor_id))?;

        for interceptor in &self.interceptors {
            interceptor.before_update(record.value(), &mut updates);
        }

        // Apply to a copy so the stored record only ever changes as a whole.
        let mut next = record.value().clone();
        for (path, value) in &updates {
            set_path(&mut next, path, value.clone());
        }
        *record = next;

        self.writes.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            actor_id = %actor_id,
            fields = updates.len(),
            "Actor document updated"
        );
        Ok(())
    }

    async fn get_flag(
        &self,
        actor_id: ActorId,
        namespace: &str,
        key: &str,
    ) -> Result<Option<Value>, PortError> {
        self.get_field(actor_id, &flag_path(namespace, key)).await
    }

    async fn set_flag(
        &self,
        actor_id: ActorId,
        namespace: &str,
        key: &str,
        value: Value,
    ) -> Result<(), PortError> {
        let mut updates = FieldUpdates::new();
        updates.insert(flag_path(namespace, key), value);
        self.set_fields(actor_id, updates).await
    }
}
