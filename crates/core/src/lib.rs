//! `keystone-core` — entity foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the entity base with identity equality and props validation, the value
//! objects it relies on, and the error taxonomy raised during construction.

pub mod entity;
pub mod error;
pub mod guard;
pub mod id;
pub mod time;
pub mod value_object;

pub use entity::{
    CreateEntityProps, DomainObject, Entity, EntityBase, MAX_PROPS, ObjectKind, is_entity,
    validate_props,
};
pub use error::{DomainError, DomainResult, ErrorReport, ExceptionCode};
pub use guard::Guard;
pub use id::{EntityId, Identity};
pub use time::Timestamp;
pub use value_object::ValueObject;
