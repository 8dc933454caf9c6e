//! Roster repository: the owner of the employee collection.
//!
//! # Responsibility
//! - Load the collection from the persisted store, seeding when needed.
//! - Apply add/update/delete, keep ids dense and persist every change.
//! - Notify the presentation surface after loads and successful mutations.
//!
//! # Invariants
//! - Ids are exactly `1..=len` in display order after every mutation.
//! - A mutation is persisted before it becomes visible; a failed write
//!   leaves memory and surface untouched.
//! - Rejected drafts cause no mutation, no write and no render.

use crate::model::draft::{DraftError, EmployeeDraft, ValidDraft};
use crate::model::employee::{Employee, EmployeeId};
use crate::normalize::{normalize_all, seed_records};
use crate::presentation::PresentationSurface;
use crate::store::codec::{decode_employees, encode_employees};
use crate::store::{KeyValueStore, StoreError, StoreResult};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "employeeArray";

pub type RosterResult<T> = Result<T, RosterError>;

/// Error returned by roster operations.
#[derive(Debug)]
pub enum RosterError {
    Validation(DraftError),
    NotFound(EmployeeId),
    Storage(StoreError),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid employee input: {err}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<DraftError> for RosterError {
    fn from(value: DraftError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RosterError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

/// Where `load()` took the collection from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the persisted store.
    Stored,
    /// Built from the seed set because storage was empty or unusable.
    Seeded,
}

/// Sets `id = position + 1` for every record, in order.
pub fn reassign_ids(employees: &mut [Employee]) {
    for (position, employee) in employees.iter_mut().enumerate() {
        employee.assign_id(EmployeeId::try_from(position + 1).unwrap_or(EmployeeId::MAX));
    }
}

/// Context object owning the collection, its store and its surface.
pub struct RosterRepository<S: KeyValueStore, P: PresentationSurface> {
    store: S,
    surface: P,
    storage_key: String,
    employees: Vec<Employee>,
}

impl<S: KeyValueStore, P: PresentationSurface> RosterRepository<S, P> {
    /// Creates an empty repository using `DEFAULT_STORAGE_KEY`.
    ///
    /// Call `load()` before use.
    pub fn new(store: S, surface: P) -> Self {
        Self::with_storage_key(store, surface, DEFAULT_STORAGE_KEY)
    }

    pub fn with_storage_key(store: S, surface: P, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            surface,
            storage_key: storage_key.into(),
            employees: Vec::new(),
        }
    }

    /// Loads the collection, falling back to the seed set.
    ///
    /// Unreadable or corrupt storage is logged and treated like empty
    /// storage; the seed set is then written back. This never fails.
    pub fn load(&mut self) -> LoadSource {
        let (mut employees, source) = match self.read_stored() {
            Ok(Some(employees)) => (employees, LoadSource::Stored),
            Ok(None) => (normalize_all(&seed_records()), LoadSource::Seeded),
            Err(err) => {
                warn!(
                    "event=roster_load module=repo status=fallback key={} error={}",
                    self.storage_key, err
                );
                (normalize_all(&seed_records()), LoadSource::Seeded)
            }
        };
        reassign_ids(&mut employees);
        self.employees = employees;

        if source == LoadSource::Seeded {
            if let Err(err) = self.persist() {
                warn!(
                    "event=roster_seed_persist module=repo status=error key={} error={}",
                    self.storage_key, err
                );
            }
        }

        info!(
            "event=roster_load module=repo status=ok source={:?} count={}",
            source,
            self.employees.len()
        );
        self.surface.render(&self.employees);
        source
    }

    /// Appends a new part-time employee built from `draft`.
    ///
    /// Returns the id assigned to the new record.
    ///
    /// # Errors
    /// - `Validation` when the draft is rejected (the surface is told).
    /// - `Storage` when the write fails; nothing changes.
    pub fn add(&mut self, draft: &EmployeeDraft) -> RosterResult<EmployeeId> {
        let valid = self.validate(draft)?;

        let mut next = self.employees.clone();
        next.push(Employee::part_time(
            valid.name,
            valid.age,
            valid.hours,
            valid.pay_rate,
        ));
        reassign_ids(&mut next);
        let id = next.last().map_or(0, Employee::id);
        self.commit(next)?;

        info!(
            "event=employee_add module=repo status=ok id={} count={}",
            id,
            self.employees.len()
        );
        Ok(id)
    }

    /// Overwrites name, age, hours and pay rate of employee `id`.
    ///
    /// The record keeps its variant and position; pay is recomputed with
    /// its own formula.
    ///
    /// # Errors
    /// - `Validation` when the draft is rejected (the surface is told).
    /// - `NotFound` when no record has `id`.
    /// - `Storage` when the write fails; nothing changes.
    pub fn update(&mut self, id: EmployeeId, draft: &EmployeeDraft) -> RosterResult<()> {
        let valid = self.validate(draft)?;
        let Some(index) = self.position(id) else {
            warn!("event=employee_update module=repo status=not_found id={id}");
            return Err(RosterError::NotFound(id));
        };

        let mut next = self.employees.clone();
        next[index].apply_edit(valid.name, valid.age, valid.hours, valid.pay_rate);
        self.commit(next)?;

        info!("event=employee_update module=repo status=ok id={id}");
        Ok(())
    }

    /// Removes employee `id` and closes the id gap.
    ///
    /// Returns `false` (and does nothing) when no record has `id`.
    ///
    /// # Errors
    /// - `Storage` when the write fails; nothing changes.
    pub fn delete(&mut self, id: EmployeeId) -> RosterResult<bool> {
        let Some(index) = self.position(id) else {
            debug!("event=employee_delete module=repo status=noop id={id}");
            return Ok(false);
        };

        let mut next = self.employees.clone();
        next.remove(index);
        reassign_ids(&mut next);
        self.commit(next)?;

        info!(
            "event=employee_delete module=repo status=ok id={} count={}",
            id,
            self.employees.len()
        );
        Ok(true)
    }

    /// Renumbers the in-memory collection from 1. Idempotent.
    pub fn reassign_ids(&mut self) {
        reassign_ids(&mut self.employees);
    }

    /// Writes the whole collection under the storage key.
    pub fn persist(&self) -> RosterResult<()> {
        self.write_collection(&self.employees)?;
        Ok(())
    }

    /// Current collection in display order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id() == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    fn validate(&mut self, draft: &EmployeeDraft) -> RosterResult<ValidDraft> {
        draft.validate().map_err(|err| {
            warn!("event=draft_rejected module=repo status=invalid reason={err}");
            self.surface.show_validation_error(err.user_message());
            RosterError::from(err)
        })
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id() == id)
    }

    fn commit(&mut self, next: Vec<Employee>) -> RosterResult<()> {
        self.write_collection(&next)?;
        self.employees = next;
        self.surface.render(&self.employees);
        Ok(())
    }

    fn write_collection(&self, employees: &[Employee]) -> StoreResult<()> {
        let blob = encode_employees(employees)?;
        self.store.set_item(&self.storage_key, &blob)?;
        debug!(
            "event=roster_persist module=repo status=ok key={} count={} bytes={}",
            self.storage_key,
            employees.len(),
            blob.len()
        );
        Ok(())
    }

    fn read_stored(&self) -> StoreResult<Option<Vec<Employee>>> {
        let Some(blob) = self.store.get_item(&self.storage_key)? else {
            return Ok(None);
        };
        if blob.is_empty() {
            return Ok(None);
        }
        let raws = decode_employees(&blob)?;
        Ok(Some(normalize_all(&raws)))
    }
}
