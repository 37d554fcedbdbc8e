use serde::{Deserialize, Serialize};

use domainforge_core::{
    Aggregate, DomainResult, Entity, EntityId, EntityState, Validator, ValueObject, fields,
};

// ─────────────────────────────────────────────────────────────────────────────
// Person name
// ─────────────────────────────────────────────────────────────────────────────

/// Transport shape of a person name; validation happens in [`PersonName`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameProps {
    pub value: String,
}

fields!(NameProps { VALUE: value => String });

/// A person's display name: non-empty, at most 120 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    props: NameProps,
}

impl PersonName {
    pub fn is_valid_value(value: &str) -> bool {
        Validator::string(value).is_not_empty()
            && Validator::string(value).has_length_between(1, 120)
    }

    pub fn as_str(&self) -> &str {
        &self.props.value
    }
}

impl ValueObject for PersonName {
    type Props = NameProps;

    fn create(props: NameProps) -> DomainResult<Self> {
        if !Self::is_valid_value(&props.value) {
            return DomainResult::fail("person name must be 1 to 120 characters");
        }
        DomainResult::success(Self { props })
    }

    fn props(&self) -> &NameProps {
        &self.props
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Age
// ─────────────────────────────────────────────────────────────────────────────

/// Transport shape of an age; validation happens in [`Age`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeProps {
    pub value: i32,
}

fields!(AgeProps { VALUE: value => i32 });

/// A person's age in whole years, 0 to 130 inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Age {
    props: AgeProps,
}

impl Age {
    pub fn is_valid_value(value: i32) -> bool {
        Validator::number(value).is_between(0, 130)
    }

    pub fn value(&self) -> i32 {
        self.props.value
    }
}

impl ValueObject for Age {
    type Props = AgeProps;

    fn create(props: AgeProps) -> DomainResult<Self> {
        if !Self::is_valid_value(props.value) {
            return DomainResult::fail("age must be between 0 and 130");
        }
        DomainResult::success(Self { props })
    }

    fn props(&self) -> &AgeProps {
        &self.props
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Person aggregate
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of the [`Person`] aggregate. Every typed attribute is an
/// already-validated value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonProps {
    pub name: PersonName,
    pub age: Age,
}

fields!(PersonProps {
    NAME: name => PersonName,
    AGE: age => Age,
});

/// Aggregate root: a person known to the system.
#[derive(Debug, Clone)]
pub struct Person {
    state: EntityState<PersonProps>,
}

impl Person {
    pub fn name(&self) -> &PersonName {
        self.get(PersonProps::NAME)
    }

    pub fn age(&self) -> &Age {
        self.get(PersonProps::AGE)
    }

    /// Replace the display name; takes a validated [`PersonName`].
    pub fn rename(&mut self, name: PersonName) -> &mut Self {
        self.update_to(PersonProps::NAME, name)
    }

    /// Replace the age; takes a validated [`Age`].
    pub fn set_age(&mut self, age: Age) -> &mut Self {
        self.update_to(PersonProps::AGE, age)
    }

    /// Invariant helper: whether this person may sign for themselves.
    pub fn is_adult(&self) -> bool {
        self.age().value() >= 18
    }
}

impl Entity for Person {
    type Props = PersonProps;

    fn state(&self) -> &EntityState<PersonProps> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState<PersonProps> {
        &mut self.state
    }
}

impl Aggregate for Person {
    const TYPE_NAME: &'static str = "Person";

    fn create(props: PersonProps, id: Option<EntityId>) -> DomainResult<Self> {
        DomainResult::success(Self {
            state: EntityState::new(props, id),
        })
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Person {}
