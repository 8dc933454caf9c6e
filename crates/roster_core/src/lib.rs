//! Core domain logic for the employee roster.
//! This crate is the single source of truth for roster invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod presentation;
pub mod repo;
pub mod service;
pub mod store;

pub use config::RosterConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::draft::{DraftError, EmployeeDraft, ValidDraft, DRAFT_REJECTED_MESSAGE};
pub use model::employee::{annual_pay, round2, Employee, EmployeeId, EmployeeKind};
pub use normalize::{normalize, normalize_all, seed_records, RawEmployee};
pub use presentation::{PresentationSurface, TextTableSurface};
pub use repo::roster_repo::{
    reassign_ids, LoadSource, RosterError, RosterRepository, RosterResult, DEFAULT_STORAGE_KEY,
};
pub use service::form_service::{EmployeeForm, FormResponse, FormService};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
