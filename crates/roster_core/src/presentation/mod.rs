//! Presentation surface contract.
//!
//! # Responsibility
//! - Define what the core calls into after loads, mutations and rejected
//!   drafts.
//! - Provide a plain-text table surface for terminal front ends.
//!
//! # Invariants
//! - `render` receives the full ordered collection, never a diff.
//! - Surfaces must not fail the core; output errors stay inside them.

mod table;

use crate::model::employee::Employee;

pub use table::TextTableSurface;

/// Collaborator that shows the roster and user-facing rejections.
pub trait PresentationSurface {
    /// Redraws the whole table, one row per employee.
    fn render(&mut self, employees: &[Employee]);

    /// Shows a rejection message for an invalid draft.
    fn show_validation_error(&mut self, message: &str);
}
