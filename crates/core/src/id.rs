//! Identity value objects.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Capability required of an entity identity: comparable by value.
///
/// Implemented for every type that fits, so `String`, `u64` or [`EntityId`]
/// can all identify an entity.
pub trait Identity: Clone + Eq + core::hash::Hash + core::fmt::Debug + 'static {}

impl<T> Identity for T where T: Clone + Eq + core::hash::Hash + core::fmt::Debug + 'static {}

/// Default entity identifier: a time-ordered UUIDv7.
///
/// Prefer passing ids explicitly in tests for determinism.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| DomainError::invalid(format!("EntityId: {e}")))?;
        Ok(Self(uuid))
    }
}
