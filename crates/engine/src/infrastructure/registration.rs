//! One-time capability registration.
//!
//! Host hooks and update interceptors must be installed
//! exactly once per process even when several sheets initialise the module.
//! Each capability is keyed by a stable identifier.

use std::sync::LazyLock;

use dashmap::DashSet;

/// Pre-update interceptor keeping the resource slot in step with Hybrid Points.
pub const HYBRID_POINTS_MIRROR: &str = "hybrid-points-mirror";

static GLOBAL: LazyLock<CapabilityRegistry> = LazyLock::new(CapabilityRegistry::new);

/// Set of capabilities already installed.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    installed: DashSet<String>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static CapabilityRegistry {
        &GLOBAL
    }

    /// Run `install` only if `key` has not been registered yet.
    ///
    /// Returns whether `install` ran.
    pub fn register_once(&self, key: &str, install: impl FnOnce()) -> bool {
        if !self.installed.insert(key.to_string()) {
            tracing::debug!(capability = key, "Capability already registered, skipping");
            return false;
        }

        install();
        tracing::info!(capability = key, "Capability registered");
        true
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.installed.contains(key)
    }
}
