//! Aggregate trait: mutable root entity with a factory contract.
//!
//! An aggregate is an [`Entity`] whose payload may be mutated field by field
//! after construction. Construction itself stays gated behind a concrete
//! `create` factory returning a [`DomainResult`]; the default body is a
//! sentinel that reports the missing override as an ordinary failure, so the
//! contract violation stays observable instead of crashing.

use crate::entity::Entity;
use crate::error::DomainError;
use crate::field::Field;
use crate::id::EntityId;
use crate::result::DomainResult;

/// Canonical display token for an aggregate instance: `[<TypeName>@]:<id>`.
///
/// Used for identity comparison in logs and diagnostics, not a cryptographic
/// digest or a `std::hash::Hash` replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashCode(String);

impl HashCode {
    pub fn new(type_name: &str, id: &EntityId) -> Self {
        Self(format!("[{type_name}@]:{id}"))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for HashCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mutable root entity.
///
/// Concrete types implement [`Entity`]'s state accessors, pick a
/// `TYPE_NAME`, and override `create`. Everything else - identity token,
/// fluent mutation, update chaining - is provided.
///
/// Equality between aggregates is identity equality: same concrete type and
/// same identifier, regardless of payload. Concrete `PartialEq` impls
/// delegate to [`Entity::same_identity`].
pub trait Aggregate: Entity {
    /// Display name used in the identity token and the factory sentinel.
    const TYPE_NAME: &'static str;

    /// Validated factory; concrete types must supply their own.
    ///
    /// This default is a sentinel, not an implementation: reaching it means
    /// the concrete type forgot its override, and the mistake is reported as
    /// a normal failure so callers and tests can observe it.
    fn create(_props: Self::Props, _id: Option<EntityId>) -> DomainResult<Self> {
        DomainResult::fail(DomainError::unimplemented_factory(Self::TYPE_NAME))
    }

    /// Identity token, stable across payload mutations.
    fn hash_code(&self) -> HashCode {
        HashCode::new(Self::TYPE_NAME, self.id())
    }

    /// Begin a fluent assignment to one field:
    /// `agg.set(Props::AGE).to_value(21)`.
    ///
    /// For value-object fields the assignment takes an already-validated
    /// instance, never raw props.
    fn set<T>(&mut self, field: Field<Self::Props, T>) -> Setter<'_, Self, T> {
        Setter {
            aggregate: self,
            field,
        }
    }

    /// One-call shorthand for `set(field).to_value(value)`; returns the same
    /// instance so updates chain.
    fn update_to<T>(&mut self, field: Field<Self::Props, T>, value: T) -> &mut Self {
        self.set(field).to_value(value)
    }
}

/// Pending assignment produced by [`Aggregate::set`], bound to one field.
#[derive(Debug)]
pub struct Setter<'a, A: Entity, T> {
    aggregate: &'a mut A,
    field: Field<A::Props, T>,
}

impl<'a, A: Aggregate, T> Setter<'a, A, T> {
    /// Perform the assignment and hand the aggregate back for chaining.
    pub fn to_value(self, value: T) -> &'a mut A {
        tracing::trace!(
            aggregate = A::TYPE_NAME,
            field = self.field.name(),
            "aggregate field updated"
        );
        self.field.set(self.aggregate.state_mut().props_mut(), value);
        self.aggregate
    }
}
