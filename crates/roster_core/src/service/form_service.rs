//! Form request service.
//!
//! # Responsibility
//! - Turn raw form text into drafts using browser-style number parsing.
//! - Route add/edit/delete requests into the repository.
//! - Return a uniform, panic-free response envelope to front ends.
//!
//! # Invariants
//! - Integer fields read the leading signed digits only (`"40h"` -> 40).
//! - Decimal fields read the leading decimal literal (`"15.5/h"` -> 15.5).
//! - Text with no leading number yields a missing value, never zero.

use crate::model::draft::EmployeeDraft;
use crate::model::employee::{Employee, EmployeeId};
use crate::presentation::PresentationSurface;
use crate::repo::roster_repo::{RosterError, RosterRepository, RosterResult};
use crate::store::KeyValueStore;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer regex"));
static LEADING_DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid decimal regex")
});

/// Raw text fields as typed into an add or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub age: String,
    pub hours: String,
    pub pay_rate: String,
}

impl EmployeeForm {
    /// Parses the numeric fields into a draft. Never fails.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            age: parse_leading_int(&self.age),
            hours: parse_leading_int(&self.hours),
            pay_rate: parse_leading_decimal(&self.pay_rate),
        }
    }

    /// Prefills an edit form from an existing record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            age: employee.age().to_string(),
            hours: employee.hours().to_string(),
            pay_rate: employee.pay_rate().to_string(),
        }
    }
}

/// Outcome of a form request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    /// Whether the request was applied.
    pub ok: bool,
    /// Affected employee id, when one exists after the request.
    pub id: Option<EmployeeId>,
    /// Human-readable outcome for the front end.
    pub message: String,
}

impl FormResponse {
    fn success(message: impl Into<String>, id: Option<EmployeeId>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(err: &RosterError) -> Self {
        let message = match err {
            RosterError::Validation(draft_err) => draft_err.user_message().to_string(),
            other => other.to_string(),
        };
        Self {
            ok: false,
            id: None,
            message,
        }
    }
}

/// Front-end entry points over a roster repository.
pub struct FormService<S: KeyValueStore, P: PresentationSurface> {
    repo: RosterRepository<S, P>,
}

impl<S: KeyValueStore, P: PresentationSurface> FormService<S, P> {
    /// Wraps an already loaded repository.
    pub fn new(repo: RosterRepository<S, P>) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &RosterRepository<S, P> {
        &self.repo
    }

    pub fn into_repo(self) -> RosterRepository<S, P> {
        self.repo
    }

    /// Submits the add form.
    pub fn request_add(&mut self, form: &EmployeeForm) -> FormResponse {
        match self.repo.add(&form.to_draft()) {
            Ok(id) => FormResponse::success("Employee added.", Some(id)),
            Err(err) => FormResponse::failure(&err),
        }
    }

    /// Submits the edit form for employee `id`.
    pub fn request_edit(&mut self, id: EmployeeId, form: &EmployeeForm) -> FormResponse {
        match self.repo.update(id, &form.to_draft()) {
            Ok(()) => FormResponse::success("Employee updated.", Some(id)),
            Err(err) => FormResponse::failure(&err),
        }
    }

    /// Deletes employee `id`. Unknown ids succeed without changes.
    pub fn request_delete(&mut self, id: EmployeeId) -> FormResponse {
        match self.repo.delete(id) {
            Ok(true) => FormResponse::success("Employee deleted.", None),
            Ok(false) => FormResponse::success("No employee with that id.", None),
            Err(err) => FormResponse::failure(&err),
        }
    }

    /// Returns the prefilled edit form for employee `id`.
    ///
    /// # Errors
    /// - `NotFound` when no record has `id`.
    pub fn edit_form(&self, id: EmployeeId) -> RosterResult<EmployeeForm> {
        self.repo
            .find(id)
            .map(EmployeeForm::from_employee)
            .ok_or(RosterError::NotFound(id))
    }
}

/// Reads the leading integer of `text`, like a browser `parseInt`.
pub fn parse_leading_int(text: &str) -> Option<i32> {
    LEADING_INT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i32>().ok())
}

/// Reads the leading decimal literal of `text`, like a browser `parseFloat`.
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    LEADING_DECIMAL_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|literal| literal.as_str().parse::<f64>().ok())
}
