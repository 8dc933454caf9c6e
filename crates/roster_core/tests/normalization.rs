use roster_core::{normalize, normalize_all, seed_records, EmployeeKind, RawEmployee};

fn raw(value: serde_json::Value) -> RawEmployee {
    serde_json::from_value(value).unwrap()
}

#[test]
fn seed_set_normalizes_to_three_known_records() {
    let employees = normalize_all(&seed_records());

    assert_eq!(employees.len(), 3);

    assert_eq!(employees[0].name(), "John");
    assert_eq!(employees[0].kind(), EmployeeKind::PartTime);
    assert_eq!(employees[0].pay_rate(), 25.0);
    assert_eq!(employees[0].hours(), 40);
    assert_eq!(employees[0].salary(), 52_000.0);

    assert_eq!(employees[1].name(), "Jane");
    assert_eq!(employees[1].kind(), EmployeeKind::Manager);
    assert_eq!(employees[1].pay_rate(), 30.0);
    assert_eq!(employees[1].hours(), 35);
    assert_eq!(employees[1].salary(), 53_600.0);

    assert_eq!(employees[2].name(), "Dave");
    assert_eq!(employees[2].kind(), EmployeeKind::PartTime);
    assert_eq!(employees[2].pay_rate(), 22.75);
    assert_eq!(employees[2].hours(), 32);
    assert_eq!(employees[2].salary(), 37_856.0);
}

#[test]
fn type_selects_variant_and_defaults_to_part_time() {
    let manager = normalize(&raw(serde_json::json!({
        "name": "M", "age": 40, "hours": 10, "type": "Manager", "payRate": 10
    })));
    let unknown = normalize(&raw(serde_json::json!({
        "name": "U", "age": 40, "hours": 10, "type": "Contractor", "payRate": 10
    })));
    let missing = normalize(&raw(serde_json::json!({
        "name": "N", "age": 40, "hours": 10, "payRate": 10
    })));

    assert_eq!(manager.kind(), EmployeeKind::Manager);
    assert_eq!(unknown.kind(), EmployeeKind::PartTime);
    assert_eq!(missing.kind(), EmployeeKind::PartTime);
}

#[test]
fn stored_salary_is_recomputed_not_copied() {
    let employee = normalize(&raw(serde_json::json!({
        "id": 9, "name": "John", "age": 30, "hours": 40,
        "type": "Part-time", "payRate": 25, "salary": 1
    })));

    assert_eq!(employee.salary(), 52_000.0);
    assert_eq!(employee.id(), 0);
}

#[test]
fn missing_pay_rate_is_derived_from_part_time_salary() {
    let employee = normalize(&raw(serde_json::json!({
        "name": "John", "age": 30, "hours": 40, "type": "Part-time", "salary": 52000
    })));

    assert_eq!(employee.pay_rate(), 25.0);
    assert_eq!(employee.salary(), 52_000.0);
}

#[test]
fn missing_pay_rate_is_derived_from_manager_salary_with_exact_inverse() {
    let employee = normalize(&raw(serde_json::json!({
        "name": "Jane", "age": 28, "hours": 35, "type": "Manager", "salary": 53600
    })));

    assert_eq!(employee.pay_rate(), 30.0);
    assert_eq!(employee.salary(), 53_600.0);
}

#[test]
fn zero_pay_rate_counts_as_missing() {
    let employee = normalize(&raw(serde_json::json!({
        "name": "John", "age": 30, "hours": 40, "payRate": 0, "salary": 52000
    })));

    assert_eq!(employee.pay_rate(), 25.0);
}

#[test]
fn underivable_pay_rate_falls_back_to_zero() {
    let zero_hours = normalize(&raw(serde_json::json!({
        "name": "Idle", "age": 30, "hours": 0, "salary": 52000
    })));
    let no_salary = normalize(&raw(serde_json::json!({
        "name": "Blank", "age": 30, "hours": 40, "type": "Manager"
    })));

    assert_eq!(zero_hours.pay_rate(), 0.0);
    assert_eq!(zero_hours.salary(), 0.0);
    assert_eq!(no_salary.pay_rate(), 0.0);
    assert_eq!(no_salary.salary(), -1000.0);
}

#[test]
fn loose_fields_are_coerced() {
    let employee = normalize(&raw(serde_json::json!({
        "name": 42, "age": "31", "hours": 20.7, "payRate": "12.5"
    })));

    assert_eq!(employee.name(), "42");
    assert_eq!(employee.age(), 31);
    assert_eq!(employee.hours(), 20);
    assert_eq!(employee.pay_rate(), 12.5);
}

#[test]
fn empty_object_normalizes_to_blank_part_timer() {
    let employee = normalize(&raw(serde_json::json!({})));

    assert_eq!(employee.name(), "");
    assert_eq!(employee.age(), 0);
    assert_eq!(employee.kind(), EmployeeKind::PartTime);
    assert_eq!(employee.salary(), 0.0);
}
