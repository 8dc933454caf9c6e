//! Employee domain model.
//!
//! # Responsibility
//! - Define the employee record and its two pay variants.
//! - Own the pay formulas and cent rounding used everywhere else.
//!
//! # Invariants
//! - `salary` is derived from `pay_rate` and `hours`; it has no setter.
//! - `pay_rate` and `salary` are always rounded to whole cents.
//! - `id` is assigned by the repository, never by callers.

use serde::Serialize;

/// Positional identifier, dense from 1 in display order.
pub type EmployeeId = u32;

/// Weeks per pay year used by both formulas.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Flat annual deduction applied to manager pay.
pub const MANAGER_DEDUCTION: f64 = 1000.0;

/// Pay variant of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmployeeKind {
    /// Hourly pay with no deduction.
    #[serde(rename = "Part-time")]
    PartTime,
    /// Hourly pay minus a fixed annual deduction.
    #[serde(rename = "Manager")]
    Manager,
}

impl EmployeeKind {
    /// Returns the stored/display label (`Part-time|Manager`).
    pub fn label(self) -> &'static str {
        match self {
            Self::PartTime => "Part-time",
            Self::Manager => "Manager",
        }
    }

    /// Maps a stored `type` label to a variant.
    ///
    /// Only the exact label `Manager` selects the manager variant; anything
    /// else, including a missing label, is part-time.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Manager") => Self::Manager,
            _ => Self::PartTime,
        }
    }
}

/// Rounds to the nearest cent, ties away from zero.
///
/// Values too large to scale by 100 are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() {
        return value;
    }
    cents.round() / 100.0
}

/// Annual pay for a variant, rounded to cents.
pub fn annual_pay(kind: EmployeeKind, pay_rate: f64, hours: i32) -> f64 {
    let gross = pay_rate * f64::from(hours) * WEEKS_PER_YEAR;
    match kind {
        EmployeeKind::PartTime => round2(gross),
        EmployeeKind::Manager => round2(gross - MANAGER_DEDUCTION),
    }
}

/// One roster entry.
///
/// Serialized with the persisted wire names
/// (`id, name, age, hours, type, payRate, salary`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    age: i32,
    hours: i32,
    #[serde(rename = "type")]
    kind: EmployeeKind,
    pay_rate: f64,
    salary: f64,
}

impl Employee {
    /// Creates an employee, rounding `pay_rate` and computing `salary`.
    ///
    /// The id starts at 0 until the repository assigns positions.
    pub fn new(
        kind: EmployeeKind,
        name: impl Into<String>,
        age: i32,
        hours: i32,
        pay_rate: f64,
    ) -> Self {
        let pay_rate = round2(pay_rate);
        Self {
            id: 0,
            name: name.into(),
            age,
            hours,
            kind,
            pay_rate,
            salary: annual_pay(kind, pay_rate, hours),
        }
    }

    /// Shorthand for `Employee::new(EmployeeKind::PartTime, ..)`.
    pub fn part_time(name: impl Into<String>, age: i32, hours: i32, pay_rate: f64) -> Self {
        Self::new(EmployeeKind::PartTime, name, age, hours, pay_rate)
    }

    /// Shorthand for `Employee::new(EmployeeKind::Manager, ..)`.
    pub fn manager(name: impl Into<String>, age: i32, hours: i32, pay_rate: f64) -> Self {
        Self::new(EmployeeKind::Manager, name, age, hours, pay_rate)
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn kind(&self) -> EmployeeKind {
        self.kind
    }

    pub fn pay_rate(&self) -> f64 {
        self.pay_rate
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Recomputes annual pay with this record's own formula.
    pub fn calculate_pay(&self) -> f64 {
        annual_pay(self.kind, self.pay_rate, self.hours)
    }

    /// Overwrites the editable fields and recomputes pay.
    ///
    /// The variant is kept; edits never promote or demote.
    pub fn apply_edit(&mut self, name: impl Into<String>, age: i32, hours: i32, pay_rate: f64) {
        self.name = name.into();
        self.age = age;
        self.hours = hours;
        self.pay_rate = round2(pay_rate);
        self.salary = self.calculate_pay();
    }

    pub(crate) fn assign_id(&mut self, id: EmployeeId) {
        self.id = id;
    }
}
