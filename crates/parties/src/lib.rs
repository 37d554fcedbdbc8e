//! Parties domain module (people).
//!
//! This crate shows how domain crates build on `domainforge-core`:
//! validated value objects for every typed attribute, an aggregate with a
//! concrete `create` factory, and behavior methods layered over the fluent
//! field updaters. Pure deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod person;

pub use person::{Age, AgeProps, NameProps, Person, PersonName, PersonProps};
