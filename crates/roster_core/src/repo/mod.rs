//! Repository layer owning the roster collection.
//!
//! # Responsibility
//! - Mediate every mutation of the collection and its persistence.
//! - Return semantic errors (`NotFound`, `Validation`) next to store
//!   failures.
//!
//! # Invariants
//! - No other component mutates the collection.

pub mod roster_repo;
