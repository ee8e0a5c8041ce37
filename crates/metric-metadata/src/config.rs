// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Enablement configuration for metadata collection.
//!
//! Factories take a [`Config`] explicitly; the process-wide default exists
//! as convenience wiring for composition roots that do not thread one
//! through. Either way the flag is consulted when a store is constructed,
//! never afterwards.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable controlling whether metadata is collected.
///
/// Any value other than `"false"` (case-insensitive) enables collection;
/// unset also enables it.
pub const METRICS_ENABLED_ENV_VAR: &str = "DD_METRICS_ENABLED";

/// Decides whether factories hand out standard stores or no-op stand-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether metadata collection is active.
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Reads the enablement flag from [`METRICS_ENABLED_ENV_VAR`].
    #[must_use]
    pub fn from_env() -> Self {
        let enabled = env::var(METRICS_ENABLED_ENV_VAR)
            .map(|val| val.to_lowercase() != "false")
            .unwrap_or(true);
        Self { enabled }
    }
}

static GLOBAL_ENABLED: AtomicBool = AtomicBool::new(true);

/// Sets the process-wide default returned by [`global_config`].
///
/// Stores constructed before the change keep their variant.
pub fn set_global_enabled(enabled: bool) {
    GLOBAL_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns the process-wide default configuration. Enabled until
/// [`set_global_enabled`] says otherwise.
#[must_use]
pub fn global_config() -> Config {
    Config {
        enabled: GLOBAL_ENABLED.load(Ordering::Relaxed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        env::remove_var(METRICS_ENABLED_ENV_VAR);
        assert!(Config::from_env().enabled);

        env::set_var(METRICS_ENABLED_ENV_VAR, "false");
        assert!(!Config::from_env().enabled);

        env::set_var(METRICS_ENABLED_ENV_VAR, "FALSE");
        assert!(!Config::from_env().enabled);

        env::set_var(METRICS_ENABLED_ENV_VAR, "true");
        assert!(Config::from_env().enabled);

        env::set_var(METRICS_ENABLED_ENV_VAR, "1");
        assert!(Config::from_env().enabled);

        env::remove_var(METRICS_ENABLED_ENV_VAR);
    }

    #[test]
    fn test_global_toggle() {
        assert!(global_config().enabled);

        set_global_enabled(false);
        assert!(!global_config().enabled);

        set_global_enabled(true);
        assert!(global_config().enabled);
    }
}
