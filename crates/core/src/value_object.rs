//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are
//! defined entirely by their attribute values. Two value objects with the
//! same values are considered equal.

use crate::field::Field;
use crate::result::DomainResult;

/// An immutable domain value compared by content.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Construction contract
///
/// `create` is the sole construction path. Implementations validate the props
/// and return [`DomainResult::fail`] without ever materializing an invalid
/// instance; keeping the concrete type's fields private makes the module
/// system enforce the hidden-constructor rule. "Changing" a value object
/// means building a new one through `create`.
///
/// ## Equality
///
/// Structural and recursive: the `PartialEq` bound on `Props` compares every
/// field, and nested value objects compare by content in turn. No hash-code
/// or identity concept applies.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Sized {
    type Props: Clone + PartialEq + core::fmt::Debug;

    /// Validated factory; the only way to obtain an instance.
    fn create(props: Self::Props) -> DomainResult<Self>;

    /// Borrow the wrapped payload.
    fn props(&self) -> &Self::Props;

    /// Read one field through its typed key. Chains into nested value
    /// objects: `vo.get(Props::INNER).get(InnerProps::VALUE)`.
    fn get<T>(&self, field: Field<Self::Props, T>) -> &T {
        field.get(self.props())
    }
}
