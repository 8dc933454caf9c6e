//! Normalization of loosely typed employee records.
//!
//! # Responsibility
//! - Turn stored or seed records into valid `Employee` values.
//! - Recover a missing pay rate from a known salary.
//!
//! # Invariants
//! - Normalization never fails; unusable fields fall back to zero/empty.
//! - The produced salary is always recomputed, never copied from input.
//!
//! # See also
//! - `crate::model::employee::annual_pay` for the forward formulas.

mod seed;

use crate::model::employee::{Employee, EmployeeKind, MANAGER_DEDUCTION, WEEKS_PER_YEAR};
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use seed::seed_records;

/// Untyped employee record as found in storage or the seed set.
///
/// Numeric fields accept JSON numbers and numeric strings; anything else
/// reads as absent. Stored ids are ignored by normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmployee {
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub hours: Option<f64>,
    #[serde(default, rename = "type", deserialize_with = "loose_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub pay_rate: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub salary: Option<f64>,
}

/// Converts one raw record into an `Employee`.
pub fn normalize(raw: &RawEmployee) -> Employee {
    let kind = EmployeeKind::from_label(raw.kind.as_deref());
    let hours = to_whole(raw.hours);
    let pay_rate = match raw.pay_rate {
        Some(rate) if rate.is_finite() && rate != 0.0 => rate,
        _ => {
            let derived = derive_pay_rate(kind, raw.salary, hours);
            debug!(
                "event=pay_rate_derived module=normalize status=ok kind={} has_salary={}",
                kind.label(),
                raw.salary.is_some()
            );
            derived
        }
    };

    Employee::new(
        kind,
        raw.name.clone().unwrap_or_default(),
        to_whole(raw.age),
        hours,
        pay_rate,
    )
}

/// Normalizes a sequence of raw records, preserving order.
pub fn normalize_all(raws: &[RawEmployee]) -> Vec<Employee> {
    raws.iter().map(normalize).collect()
}

/// Inverts the variant's pay formula to recover an hourly rate.
///
/// Returns 0 when there is no salary to invert or the hours make the
/// inversion undefined.
pub fn derive_pay_rate(kind: EmployeeKind, salary: Option<f64>, hours: i32) -> f64 {
    let Some(salary) = salary.filter(|value| value.is_finite()) else {
        return 0.0;
    };
    let weekly_hours_per_year = f64::from(hours) * WEEKS_PER_YEAR;
    let rate = match kind {
        EmployeeKind::PartTime => salary / weekly_hours_per_year,
        EmployeeKind::Manager => (salary + MANAGER_DEDUCTION) / weekly_hours_per_year,
    };
    if rate.is_finite() {
        rate
    } else {
        0.0
    }
}

fn to_whole(value: Option<f64>) -> i32 {
    match value {
        // `as` saturates at the i32 bounds.
        Some(number) if number.is_finite() => number.trunc() as i32,
        _ => 0,
    }
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
