//! Unvalidated employee input.
//!
//! # Responsibility
//! - Carry user-submitted fields for add/edit requests.
//! - Decide whether a submission is complete and well-formed.
//!
//! # Invariants
//! - `validate()` performs no mutation; a rejected draft leaves no trace.
//! - A missing number (`None`) models a field that did not parse.

use crate::model::employee::{annual_pay, round2, EmployeeKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown to the user for every rejected draft.
pub const DRAFT_REJECTED_MESSAGE: &str = "Please fill in all fields with valid inputs.";

/// User-submitted field set for creating or editing an employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub age: Option<i32>,
    pub hours: Option<i32>,
    pub pay_rate: Option<f64>,
}

/// Draft that passed validation; every field is usable as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub age: i32,
    pub hours: i32,
    pub pay_rate: f64,
}

/// Validation failure for a draft. Reports the first failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    EmptyName,
    InvalidAge,
    InvalidHours,
    InvalidPayRate,
    PayOutOfRange,
}

impl DraftError {
    /// Text handed to the presentation surface.
    pub fn user_message(&self) -> &'static str {
        DRAFT_REJECTED_MESSAGE
    }
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::InvalidAge => write!(f, "age must be a number"),
            Self::InvalidHours => write!(f, "hours must be a number"),
            Self::InvalidPayRate => write!(f, "pay rate must be a finite number"),
            Self::PayOutOfRange => write!(f, "annual pay is too large to store"),
        }
    }
}

impl Error for DraftError {}

impl EmployeeDraft {
    pub fn new(name: impl Into<String>, age: i32, hours: i32, pay_rate: f64) -> Self {
        Self {
            name: name.into(),
            age: Some(age),
            hours: Some(hours),
            pay_rate: Some(pay_rate),
        }
    }

    /// Checks the draft without consuming it.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty.
    /// - `InvalidAge`/`InvalidHours` when the number is missing.
    /// - `InvalidPayRate` when the rate is missing, NaN or infinite.
    /// - `PayOutOfRange` when the rounded rate or the annual pay it
    ///   produces is not finite.
    pub fn validate(&self) -> Result<ValidDraft, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        let age = self.age.ok_or(DraftError::InvalidAge)?;
        let hours = self.hours.ok_or(DraftError::InvalidHours)?;
        let pay_rate = match self.pay_rate {
            Some(value) if value.is_finite() => value,
            _ => return Err(DraftError::InvalidPayRate),
        };
        let rounded = round2(pay_rate);
        if !rounded.is_finite() || !annual_pay(EmployeeKind::PartTime, rounded, hours).is_finite()
        {
            return Err(DraftError::PayOutOfRange);
        }

        Ok(ValidDraft {
            name: self.name.clone(),
            age,
            hours,
            pay_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftError, EmployeeDraft};

    #[test]
    fn validate_accepts_complete_draft() {
        let valid = EmployeeDraft::new("Amy", 22, 20, 15.0).validate().unwrap();
        assert_eq!(valid.name, "Amy");
        assert_eq!(valid.pay_rate, 15.0);
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let draft = EmployeeDraft {
            name: String::new(),
            age: None,
            hours: None,
            pay_rate: None,
        };
        assert_eq!(draft.validate().unwrap_err(), DraftError::EmptyName);

        let draft = EmployeeDraft {
            hours: None,
            ..EmployeeDraft::new("Amy", 22, 20, 15.0)
        };
        assert_eq!(draft.validate().unwrap_err(), DraftError::InvalidHours);
    }

    #[test]
    fn validate_rejects_nan_and_infinite_pay_rate() {
        let nan = EmployeeDraft::new("Amy", 22, 20, f64::NAN);
        assert_eq!(nan.validate().unwrap_err(), DraftError::InvalidPayRate);

        let inf = EmployeeDraft::new("Amy", 22, 20, f64::INFINITY);
        assert_eq!(inf.validate().unwrap_err(), DraftError::InvalidPayRate);
    }

    #[test]
    fn validate_rejects_pay_that_overflows() {
        let huge = EmployeeDraft::new("Big", 30, 40, 1e307);
        assert_eq!(huge.validate().unwrap_err(), DraftError::PayOutOfRange);

        let zero_hours = EmployeeDraft::new("Idle", 30, 0, 1e307);
        assert!(zero_hours.validate().is_ok());
    }

    #[test]
    fn whitespace_name_is_accepted() {
        assert!(EmployeeDraft::new(" ", 22, 20, 15.0).validate().is_ok());
    }
}
