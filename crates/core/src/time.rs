//! Timestamp value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{DomainObject, ObjectKind};
use crate::value_object::ValueObject;

/// Immutable UTC instant used for `created_at` / `updated_at`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Capture the current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl ValueObject for Timestamp {}

impl DomainObject for Timestamp {
    fn kind(&self) -> ObjectKind {
        ObjectKind::ValueObject
    }
}
