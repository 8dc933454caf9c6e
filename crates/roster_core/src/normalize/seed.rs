//! Built-in roster used when storage holds nothing usable.

use super::RawEmployee;

/// Returns the three built-in records in display order.
pub fn seed_records() -> Vec<RawEmployee> {
    vec![
        seed("John", 30, 40, 25.0, "Part-time"),
        seed("Jane", 28, 35, 30.0, "Manager"),
        seed("Dave", 46, 32, 22.75, "Part-time"),
    ]
}

fn seed(name: &str, age: i32, hours: i32, pay_rate: f64, kind: &str) -> RawEmployee {
    RawEmployee {
        name: Some(name.to_string()),
        age: Some(f64::from(age)),
        hours: Some(f64::from(hours)),
        kind: Some(kind.to_string()),
        pay_rate: Some(pay_rate),
        salary: None,
    }
}
