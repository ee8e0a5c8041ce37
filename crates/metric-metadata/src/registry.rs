// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Named-instrument registry seam and metadata registration helpers.
//!
//! The registry that holds named instruments is an external collaborator.
//! This module defines the operations this crate consumes from it
//! ([`Registry`]), a minimal in-memory implementation for composition roots
//! and tests ([`LocalRegistry`]), and the helpers that resolve shared
//! metadata stores by name.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use crate::config::Config;
use crate::errors::Registration;
use crate::metadata::Metadata;

/// A type-erased, shared metric instrument as held by a registry.
pub type SharedInstrument = Arc<dyn Any + Send + Sync>;

/// A metadata store as handed out by a registry.
///
/// The mutex is the caller's serialization point: the store itself performs
/// no locking, and the owner holds this lock across each operation when the
/// instrument is touched from more than one thread.
pub type SharedMetadata = Arc<Mutex<Metadata>>;

/// Named-instrument registry, as consumed by this crate.
///
/// Storage, locking discipline, and iteration over registered instruments
/// are the implementation's business; concurrent `get_or_register` calls
/// are governed by the registry's own locking.
pub trait Registry {
    /// Returns the instrument under `name`, constructing and registering one
    /// with `build` if the name is free.
    fn get_or_register(&self, name: &str, build: &dyn Fn() -> SharedInstrument)
        -> SharedInstrument;

    /// Registers `instrument` under `name`, replacing any prior entry.
    fn register(&self, name: &str, instrument: SharedInstrument);

    /// Drops the entry under `name`, if any.
    fn unregister(&self, name: &str);
}

/// In-memory [`Registry`] keyed by instrument name.
#[derive(Default)]
pub struct LocalRegistry {
    instruments: RwLock<HashMap<String, SharedInstrument>>,
}

impl LocalRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Registry for LocalRegistry {
    fn get_or_register(
        &self,
        name: &str,
        build: &dyn Fn() -> SharedInstrument,
    ) -> SharedInstrument {
        let mut instruments = self
            .instruments
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(instruments.entry(name.to_string()).or_insert_with(build))
    }

    fn register(&self, name: &str, instrument: SharedInstrument) {
        let mut instruments = self
            .instruments
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        instruments.insert(name.to_string(), instrument);
    }

    fn unregister(&self, name: &str) {
        let mut instruments = self
            .instruments
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if instruments.remove(name).is_some() {
            debug!("unregistered instrument '{}'", name);
        }
    }
}

impl fmt::Debug for LocalRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalRegistry")
    }
}

fn downcast_metadata(
    name: &str,
    instrument: SharedInstrument,
) -> Result<SharedMetadata, Registration> {
    instrument
        .downcast::<Mutex<Metadata>>()
        .map_err(|_| Registration::KindMismatch(name.to_string()))
}

/// Returns the metadata store under `name`, constructing and registering a
/// new one (honoring `config`) if absent.
///
/// # Errors
///
/// [`Registration::KindMismatch`] when `name` is already taken by an
/// instrument that is not a metadata store.
pub fn get_or_register_metadata(
    name: &str,
    registry: &dyn Registry,
    config: &Config,
) -> Result<SharedMetadata, Registration> {
    let instrument = registry.get_or_register(name, &|| {
        Arc::new(Mutex::new(Metadata::new(config))) as SharedInstrument
    });
    downcast_metadata(name, instrument)
}

/// Like [`get_or_register_metadata`], but a newly constructed store is
/// always a standard one, bypassing the enablement flag.
///
/// The registry retains the store until it is explicitly unregistered;
/// unregister it once it is of no use.
///
/// # Errors
///
/// [`Registration::KindMismatch`] when `name` is already taken by an
/// instrument that is not a metadata store.
pub fn get_or_register_metadata_forced(
    name: &str,
    registry: &dyn Registry,
) -> Result<SharedMetadata, Registration> {
    let instrument = registry.get_or_register(name, &|| {
        Arc::new(Mutex::new(Metadata::new_forced())) as SharedInstrument
    });
    downcast_metadata(name, instrument)
}

/// Constructs a store honoring `config` and registers it under `name`,
/// replacing any prior entry.
pub fn new_registered_metadata(
    name: &str,
    registry: &dyn Registry,
    config: &Config,
) -> SharedMetadata {
    let store: SharedMetadata = Arc::new(Mutex::new(Metadata::new(config)));
    registry.register(name, Arc::clone(&store) as SharedInstrument);
    debug!("registered metadata store under '{}'", name);
    store
}

/// Constructs a standard store regardless of the enablement flag and
/// registers it under `name`, replacing any prior entry.
///
/// The registry retains the store until it is explicitly unregistered;
/// unregister it once it is of no use.
pub fn new_registered_metadata_forced(name: &str, registry: &dyn Registry) -> SharedMetadata {
    let store: SharedMetadata = Arc::new(Mutex::new(Metadata::new_forced()));
    registry.register(name, Arc::clone(&store) as SharedInstrument);
    debug!("registered forced metadata store under '{}'", name);
    store
}
