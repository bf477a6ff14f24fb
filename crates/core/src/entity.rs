//! Entity base: identity, timestamps, props validation and identity equality.
//!
//! A concrete entity owns an [`EntityBase`] and implements [`Entity`] on top of
//! it. All construction goes through [`Entity::create`], which validates the
//! props shape, fills in timestamps, and finally runs the entity's own
//! [`Entity::validate`] hook. No entity value exists unless every step passed.
//!
//! ```ignore
//! #[derive(Debug, Clone, Serialize)]
//! struct CustomerProps {
//!     name: String,
//! }
//!
//! struct Customer {
//!     base: EntityBase<CustomerProps>,
//! }
//!
//! impl Entity for Customer {
//!     type Props = CustomerProps;
//!     type Id = EntityId;
//!
//!     fn from_base(base: EntityBase<CustomerProps>) -> Self {
//!         Self { base }
//!     }
//!
//!     fn base(&self) -> &EntityBase<CustomerProps> {
//!         &self.base
//!     }
//!
//!     fn validate(&self) -> DomainResult<()> {
//!         if self.base.props().name.is_empty() {
//!             return Err(DomainError::invariant("customer name is required"));
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use core::any::Any;

use serde::Serialize;
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::guard::Guard;
use crate::id::{EntityId, Identity};
use crate::time::Timestamp;

/// Upper bound on the number of top-level props an entity may carry.
pub const MAX_PROPS: usize = 50;

/// Discriminant telling entities apart from value objects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Entity,
    ValueObject,
}

/// Capability shared by everything in the domain layer.
///
/// Entities get this through a blanket impl. Value objects implement it with
/// [`ObjectKind::ValueObject`] and no identity.
pub trait DomainObject {
    fn kind(&self) -> ObjectKind;

    /// Type-erased identity; `None` for value objects.
    fn identity(&self) -> Option<&dyn Any> {
        None
    }
}

/// Whether `value` is an entity.
pub fn is_entity<O: DomainObject + ?Sized>(value: &O) -> bool {
    value.kind() == ObjectKind::Entity
}

/// Input to entity construction.
#[derive(Debug, Clone)]
pub struct CreateEntityProps<P, I = EntityId> {
    pub id: I,
    pub props: P,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl<P, I> CreateEntityProps<P, I> {
    /// Identity and props, with both timestamps left to default.
    pub fn new(id: I, props: P) -> Self {
        Self {
            id,
            props,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_created_at(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn with_updated_at(mut self, at: Timestamp) -> Self {
        self.updated_at = Some(at);
        self
    }
}

/// State every entity carries: identity, timestamps and its props.
///
/// Concrete entities keep this as a private field. Mutation (`props_mut`,
/// `mark_updated`) therefore stays with the entity's own behavior methods.
#[derive(Debug, Clone)]
pub struct EntityBase<P, I = EntityId> {
    id: I,
    props: P,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl<P: Serialize, I: Identity> EntityBase<P, I> {
    /// Validate `input.props` and assemble the base state.
    ///
    /// When a timestamp is omitted it falls back to a single `now` captured for
    /// this call; each field falls back independently.
    pub fn new(input: CreateEntityProps<P, I>) -> DomainResult<Self> {
        let CreateEntityProps {
            id,
            props,
            created_at,
            updated_at,
        } = input;

        if let Err(err) = validate_props(&props) {
            tracing::debug!(entity_id = ?id, code = %err.code(), "entity props rejected");
            return Err(err);
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            props,
            created_at: created_at.unwrap_or(now),
            updated_at: updated_at.unwrap_or(now),
        })
    }
}

impl<P, I> EntityBase<P, I> {
    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn mark_updated(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    /// Shorthand for `mark_updated(Timestamp::now())`.
    pub fn touch(&mut self) {
        self.mark_updated(Timestamp::now());
    }
}

/// Check the generic shape rules every entity's props must satisfy.
///
/// - empty or absent → `ArgumentNotProvided`
/// - not a structure (object or sequence) → `ArgumentInvalid`
/// - more than [`MAX_PROPS`] top-level entries → `ArgumentOutOfRange`
pub fn validate_props<P: Serialize + ?Sized>(props: &P) -> DomainResult<()> {
    let value = serde_json::to_value(props)
        .map_err(|e| DomainError::invalid(format!("Entity props should be an object: {e}")))?;

    if Guard::is_empty(&value) {
        return Err(DomainError::not_provided("Entity props should not be empty."));
    }

    let len = match &value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => return Err(DomainError::invalid("Entity props should be an object.")),
    };

    if len > MAX_PROPS {
        return Err(DomainError::out_of_range(format!(
            "Entity props should not have more than {MAX_PROPS} properties."
        )));
    }

    Ok(())
}

/// Entity: a domain object whose identity alone decides equality.
pub trait Entity: Sized {
    /// Attribute bag validated at construction.
    type Props: Serialize;

    /// Strongly-typed entity identifier.
    type Id: Identity;

    /// Wrap an already-validated base. Called only by [`Entity::create`].
    fn from_base(base: EntityBase<Self::Props, Self::Id>) -> Self;

    fn base(&self) -> &EntityBase<Self::Props, Self::Id>;

    /// Domain-specific invariants. Runs once the props are in place.
    fn validate(&self) -> DomainResult<()>;

    /// The single construction path.
    fn create(input: CreateEntityProps<Self::Props, Self::Id>) -> DomainResult<Self> {
        let entity = Self::from_base(EntityBase::new(input)?);

        if let Err(err) = entity.validate() {
            tracing::debug!(entity_id = ?entity.id(), code = %err.code(), "entity validation failed");
            return Err(err);
        }

        tracing::debug!(entity_id = ?entity.id(), "entity constructed");
        Ok(entity)
    }

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id {
        self.base().id()
    }

    fn created_at(&self) -> Timestamp {
        self.base().created_at()
    }

    fn updated_at(&self) -> Timestamp {
        self.base().updated_at()
    }

    /// Identity comparison against any domain object.
    ///
    /// `None` and non-entities are never equal. The same instance is always
    /// equal without comparing identities: its identity lives at the same
    /// address. An entity whose identity has a different type is never equal.
    fn equals<O: DomainObject + ?Sized>(&self, other: Option<&O>) -> bool {
        let Some(other) = other else {
            return false;
        };

        if !is_entity(other) {
            return false;
        }

        let Some(id) = other.identity().and_then(|id| id.downcast_ref::<Self::Id>()) else {
            return false;
        };

        core::ptr::eq(id, self.id()) || self.id() == id
    }
}

impl<E: Entity> DomainObject for E {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Entity
    }

    fn identity(&self) -> Option<&dyn Any> {
        Some(self.id() as &dyn Any)
    }
}
