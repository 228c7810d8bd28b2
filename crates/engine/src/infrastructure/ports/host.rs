//! Ports onto the host's actor documents.

use std::collections::BTreeMap;

use async_trait::async_trait;
use onepiece_domain::ActorId;
use serde_json::Value;

use super::PortError;

/// Dotted field paths mapped to their new values, persisted in one update.
pub type FieldUpdates = BTreeMap<String, Value>;

/// Record path of a module flag.
///
/// Flags live inside the actor record so they can be batched with ordinary
/// fields in a single `set_fields` call.
pub fn flag_path(namespace: &str, key: &str) -> String {
    format!("flags.{}.{}", namespace, key)
}

/// Host actor document access.
///
/// `set_fields` must be atomic: either every path in the map is persisted or
/// none is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorDocumentPort: Send + Sync {
    /// Full snapshot of the actor record.
    async fn get_record(&self, actor_id: ActorId) -> Result<Value, PortError>;

    async fn get_field(&self, actor_id: ActorId, path: &str) -> Result<Option<Value>, PortError>;

    async fn set_fields(&self, actor_id: ActorId, updates: FieldUpdates) -> Result<(), PortError>;

    async fn get_flag(
        &self,
        actor_id: ActorId,
        namespace: &str,
        key: &str,
    ) -> Result<Option<Value>, PortError>;

    async fn set_flag(
        &self,
        actor_id: ActorId,
        namespace: &str,
        key: &str,
        value: Value,
    ) -> Result<(), PortError>;
}

/// Hook run by the host before an actor update is persisted.
///
/// Implementations may rewrite or extend the pending update. They never
/// fail; anything they can't make sense of is left untouched.
pub trait PreUpdateInterceptor: Send + Sync {
    fn name(&self) -> &'static str;

    fn before_update(&self, record: &Value, pending: &mut FieldUpdates);
}
