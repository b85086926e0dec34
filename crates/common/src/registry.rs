//! Static service registry: logical service name -> base URL.
//!
//! Entries come from the `[registry.services]` config table; a
//! `<NAME>_URL` environment variable (dashes mapped to underscores)
//! overrides the configured address per service.

use std::collections::HashMap;

use tracing::debug;

use crate::CoreError;

#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: HashMap<String, String>,
}

fn env_key(name: &str) -> String {
    let mut key: String = name
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect();
    key.push_str("_URL");
    key
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, base_url: impl Into<String>) {
        self.services.insert(name.into(), base_url.into());
    }

    /// Build from configured entries, applying per-service env overrides.
    pub fn from_entries(entries: &HashMap<String, String>) -> Self {
        let mut registry = Self::new();
        for (name, url) in entries {
            let url = std::env::var(env_key(name)).unwrap_or_else(|_| url.clone());
            debug!(service = %name, base_url = %url, "registered service");
            registry.register(name.clone(), url);
        }
        registry
    }

    pub fn resolve(&self, name: &str) -> Result<&str, CoreError> {
        self.services
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CoreError::Unregistered(name.to_string()))
    }
}
