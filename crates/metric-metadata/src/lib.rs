// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # Metric Metadata
//!
//! Tag storage for metric instruments: a mutable string key/value tag map
//! attached to an instrument, a read-only snapshot of it, and a no-op
//! stand-in used when metrics collection is disabled.
//!
//! ## Overview
//!
//! [`metadata::Metadata`] is one type with three variants sharing a single
//! capability set (clear, add or update, remove, copy out, snapshot), so call
//! sites stay agnostic to whether collection is on:
//! - a standard store backs a live instrument and is mutated in place;
//! - a snapshot is an independent point-in-time copy; mutating it is a
//!   programming error and panics;
//! - a disabled store ignores mutations and always reads empty, so a call
//!   site behind a disabled flag costs a no-op call instead of a branch and
//!   an allocation.
//!
//! Whether a factory hands out a standard or a disabled store is decided by
//! [`config::Config`] at construction time; the `*_forced` constructors
//! always build a standard store. Stores can be registered under a name and
//! resolved later through the [`registry::Registry`] seam; the registry
//! itself (storage, locking, reporting) is an external collaborator.
//!
//! ## Example
//!
//! ```
//! use metric_metadata::config::Config;
//! use metric_metadata::metadata::Metadata;
//!
//! let mut metadata = Metadata::new(&Config::default());
//! metadata.add_or_update("env", "prod");
//!
//! let frozen = metadata.snapshot();
//! metadata.remove("env");
//!
//! assert!(metadata.get_all().is_empty());
//! assert_eq!(frozen.get_all().get("env").map(String::as_str), Some("prod"));
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

/// Enablement configuration, read at store construction time
pub mod config;

/// Error types for named-instrument registration
pub mod errors;

/// The metadata store and its constructors
pub mod metadata;

/// Registry seam and named registration helpers
pub mod registry;
