//! Error handling for the Tysiac engine.

pub mod domain;

pub use domain::{DomainError, NotFoundKind, RuleViolationKind};
