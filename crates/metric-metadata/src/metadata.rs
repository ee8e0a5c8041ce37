// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Tag metadata attached to a single metric instrument.

use std::collections::HashMap;

use crate::config::Config;

/// Tag storage for one metric instrument.
///
/// All three variants answer the same capability set, so callers never
/// branch on whether collection is enabled. Iteration order of the stored
/// pairs carries no meaning; keys are unique within a store.
///
/// The store performs no locking. When an instance is shared between
/// threads (see [`crate::registry::SharedMetadata`]), the owner serializes
/// access by holding its lock across each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    /// Active store backing a live instrument, mutated in place.
    Standard {
        /// Current tag pairs.
        tags: HashMap<String, String>,
    },
    /// Read-only copy taken at snapshot time. Mutating it panics.
    Snapshot {
        /// Tag pairs frozen at snapshot time.
        tags: HashMap<String, String>,
    },
    /// No-op stand-in handed out when metrics collection is disabled.
    Disabled,
}

impl Metadata {
    /// Constructs a new store, honoring the enablement flag in `config`.
    ///
    /// Returns a standard store when collection is enabled and a disabled
    /// store otherwise. The flag is read here, once; toggling it later never
    /// changes a store that already exists.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        if config.enabled {
            Self::Standard {
                tags: HashMap::new(),
            }
        } else {
            Self::Disabled
        }
    }

    /// Constructs a standard store regardless of the enablement flag.
    ///
    /// A forced store that gets registered stays alive until the caller
    /// unregisters it; nothing else reclaims it. Unregister it once it is of
    /// no use.
    #[must_use]
    pub fn new_forced() -> Self {
        Self::Standard {
            tags: HashMap::new(),
        }
    }

    /// Discards all tags; the store becomes empty.
    ///
    /// # Panics
    ///
    /// Panics when called on a snapshot.
    pub fn clear(&mut self) {
        match self {
            Self::Standard { tags } => tags.clear(),
            Self::Snapshot { .. } => panic!("clear called on a metadata snapshot"),
            Self::Disabled => {}
        }
    }

    /// Inserts the tag if the key is absent, otherwise overwrites its value.
    ///
    /// Keys and values are stored as given; empty strings are permitted.
    ///
    /// # Panics
    ///
    /// Panics when called on a snapshot.
    pub fn add_or_update(&mut self, key: &str, value: &str) {
        match self {
            Self::Standard { tags } => {
                tags.insert(key.to_string(), value.to_string());
            }
            Self::Snapshot { .. } => panic!("add_or_update called on a metadata snapshot"),
            Self::Disabled => {}
        }
    }

    /// Removes the tag under `key`. Removing an absent key is a no-op, not
    /// an error.
    ///
    /// # Panics
    ///
    /// Panics when called on a snapshot.
    pub fn remove(&mut self, key: &str) {
        match self {
            Self::Standard { tags } => {
                tags.remove(key);
            }
            Self::Snapshot { .. } => panic!("remove called on a metadata snapshot"),
            Self::Disabled => {}
        }
    }

    /// Returns a copy of the current tag pairs.
    ///
    /// The map is freshly allocated on every call; mutating it never shows
    /// through to the store or to later calls. A disabled store always reads
    /// empty.
    #[must_use]
    pub fn get_all(&self) -> HashMap<String, String> {
        match self {
            Self::Standard { tags } | Self::Snapshot { tags } => tags.clone(),
            Self::Disabled => HashMap::new(),
        }
    }

    /// Returns a read-only copy of the store as of this call.
    ///
    /// Mutating the source afterwards never shows through the snapshot. A
    /// snapshot of a snapshot is an equal snapshot; a snapshot of a disabled
    /// store is another disabled store.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        match self {
            Self::Standard { tags } | Self::Snapshot { tags } => Self::Snapshot {
                tags: tags.clone(),
            },
            Self::Disabled => Self::Disabled,
        }
    }
}
