//! Entity trait: identity + continuity across state changes.

use crate::field::Field;
use crate::id::EntityId;

/// Identity-bearing state embedded by every concrete entity.
///
/// The identifier is assigned exactly once, here, and has no mutator:
/// whether minted fresh or adopted from the caller, it never changes for the
/// lifetime of the instance. `is_new` records which of the two happened.
#[derive(Debug, Clone)]
pub struct EntityState<P> {
    id: EntityId,
    is_new: bool,
    props: P,
}

impl<P> EntityState<P> {
    /// Adopt a caller-supplied id (rehydrating a known entity) or mint a
    /// fresh one (creating the entity for the first time).
    pub fn new(props: P, id: Option<EntityId>) -> Self {
        match id {
            Some(id) => Self {
                id,
                is_new: false,
                props,
            },
            None => Self {
                id: EntityId::generate(),
                is_new: true,
                props,
            },
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }
}

/// Entity interface: a concrete type embeds an [`EntityState`] and exposes it
/// through the two accessors; everything else is provided.
pub trait Entity: Sized {
    type Props;

    fn state(&self) -> &EntityState<Self::Props>;

    fn state_mut(&mut self) -> &mut EntityState<Self::Props>;

    fn id(&self) -> &EntityId {
        self.state().id()
    }

    /// Whether the identifier was minted at construction (as opposed to
    /// supplied by the caller). Fixed for the instance's lifetime.
    fn is_new(&self) -> bool {
        self.state().is_new()
    }

    fn props(&self) -> &Self::Props {
        self.state().props()
    }

    /// Read one field through its typed key; chains into nested value
    /// objects exactly as on a value object.
    fn get<T>(&self, field: Field<Self::Props, T>) -> &T {
        field.get(self.props())
    }

    /// Identity comparison: same concrete type (statically enforced by the
    /// signature) and same identifier. Payload contents are irrelevant.
    /// Concrete `PartialEq` impls delegate here.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Counter {
        state: EntityState<u32>,
    }

    impl Entity for Counter {
        type Props = u32;

        fn state(&self) -> &EntityState<u32> {
            &self.state
        }

        fn state_mut(&mut self) -> &mut EntityState<u32> {
            &mut self.state
        }
    }

    #[test]
    fn minted_id_marks_the_entity_as_new() {
        let counter = Counter {
            state: EntityState::new(0, None),
        };
        assert!(counter.is_new());
        assert!(!counter.id().as_str().is_empty());
    }

    #[test]
    fn supplied_id_marks_the_entity_as_rehydrated() {
        let counter = Counter {
            state: EntityState::new(0, Some(EntityId::from("fixed-id"))),
        };
        assert!(!counter.is_new());
        assert_eq!(counter.id().as_str(), "fixed-id");
    }

    #[test]
    fn same_identity_ignores_props() {
        let a = Counter {
            state: EntityState::new(1, Some(EntityId::from("shared"))),
        };
        let b = Counter {
            state: EntityState::new(99, Some(EntityId::from("shared"))),
        };
        let c = Counter {
            state: EntityState::new(1, Some(EntityId::from("other"))),
        };

        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
    }

    #[test]
    fn two_minted_entities_have_distinct_identities() {
        let a = Counter {
            state: EntityState::new(0, None),
        };
        let b = Counter {
            state: EntityState::new(0, None),
        };
        assert!(!a.same_identity(&b));
    }
}
