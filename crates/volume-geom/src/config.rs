// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tunable limits and the storage port they are loaded through.
//!
//! The crate does no I/O itself. Hosts hand in a [`ConfigStore`] that yields
//! raw JSON blobs; [`ConfigService`] decodes them. [`MemoryConfigStore`] keeps
//! blobs in memory for tests and embedding.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::axis::MAX_AXIAL_LENGTH;
use crate::probe::{MagnitudeRequest, MAGNITUDE_FLOOR};

/// Storage key under which [`GeomConfig`] is kept.
pub const GEOM_CONFIG_KEY: &str = "volume-geom";

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A value decoded but is out of range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Thin service that serializes config values and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

/// In-memory `ConfigStore`.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| ConfigError::Other("config store lock poisoned".into()))?;
        blobs.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| ConfigError::Other("config store lock poisoned".into()))?;
        blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

/// Limits used by the probe and the volume transform.
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomConfig {
    /// Longest span growth may produce along any axis.
    pub max_axial_length: f32,
    /// Lower bound of the random magnitude range.
    pub magnitude_floor: f32,
    /// Ray–plane tolerance; `0.0` means exact comparisons.
    pub plane_tolerance: f32,
}

impl Default for GeomConfig {
    fn default() -> Self {
        Self {
            max_axial_length: MAX_AXIAL_LENGTH,
            magnitude_floor: MAGNITUDE_FLOOR,
            plane_tolerance: 0.0,
        }
    }
}

impl GeomConfig {
    /// Loads the config stored under [`GEOM_CONFIG_KEY`], or the defaults
    /// when nothing is stored. The result is validated.
    pub fn load<S: ConfigStore>(service: &ConfigService<S>) -> Result<Self, ConfigError> {
        let config = service.load::<Self>(GEOM_CONFIG_KEY)?.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Validates and stores the config under [`GEOM_CONFIG_KEY`].
    pub fn save<S: ConfigStore>(&self, service: &ConfigService<S>) -> Result<(), ConfigError> {
        self.validate()?;
        service.save(GEOM_CONFIG_KEY, self)
    }

    /// Rejects non-finite values, a non-positive axial length and a negative
    /// tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_axial_length.is_finite() && self.max_axial_length > 0.0) {
            return Err(invalid("max_axial_length", self.max_axial_length, "must be finite and > 0"));
        }
        if !self.magnitude_floor.is_finite() {
            return Err(invalid("magnitude_floor", self.magnitude_floor, "must be finite"));
        }
        if !(self.plane_tolerance.is_finite() && self.plane_tolerance >= 0.0) {
            return Err(invalid("plane_tolerance", self.plane_tolerance, "must be finite and >= 0"));
        }
        Ok(())
    }

    /// A magnitude request for `base` using this config's floor.
    pub fn magnitude(&self, base: f32) -> MagnitudeRequest {
        MagnitudeRequest::new(base).floor(self.magnitude_floor)
    }
}

fn invalid(field: &'static str, value: f32, rule: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: format!("{value} {rule}"),
    }
}
