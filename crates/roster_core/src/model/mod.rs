//! Roster domain model.
//!
//! # Responsibility
//! - Define the employee record, its pay variants and user drafts.
//!
//! # Invariants
//! - Pay is always derived from rate and hours through `annual_pay`.
//! - Drafts are validated before they can touch a record.

pub mod draft;
pub mod employee;
