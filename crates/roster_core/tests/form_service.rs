mod support;

use roster_core::{
    EmployeeForm, FormService, MemoryStore, RosterError, RosterRepository, DRAFT_REJECTED_MESSAGE,
};
use support::{names, RecordingSurface};

fn service(store: &MemoryStore) -> FormService<&MemoryStore, RecordingSurface> {
    let mut repo = RosterRepository::new(store, RecordingSurface::default());
    repo.load();
    FormService::new(repo)
}

fn form(name: &str, age: &str, hours: &str, pay_rate: &str) -> EmployeeForm {
    EmployeeForm {
        name: name.to_string(),
        age: age.to_string(),
        hours: hours.to_string(),
        pay_rate: pay_rate.to_string(),
    }
}

#[test]
fn request_add_parses_form_text() {
    let store = MemoryStore::new();
    let mut service = service(&store);

    let response = service.request_add(&form("Amy", "22", " 20 hrs", "15.00"));

    assert!(response.ok, "{}", response.message);
    assert_eq!(response.id, Some(4));
    let amy = service.repo().find(4).unwrap();
    assert_eq!(amy.hours(), 20);
    assert_eq!(amy.salary(), 15_600.0);
}

#[test]
fn request_add_rejects_blank_numbers_with_user_message() {
    let store = MemoryStore::new();
    let mut service = service(&store);

    let response = service.request_add(&form("Amy", "", "20", "15"));

    assert!(!response.ok);
    assert_eq!(response.id, None);
    assert_eq!(response.message, DRAFT_REJECTED_MESSAGE);
    assert_eq!(service.repo().len(), 3);
    assert_eq!(service.repo().surface().errors.len(), 1);
}

#[test]
fn request_add_rejects_rate_whose_pay_overflows() {
    let store = MemoryStore::new();
    let mut service = service(&store);

    let response = service.request_add(&form("Big", "30", "40", "1e307"));

    assert!(!response.ok);
    assert_eq!(response.message, DRAFT_REJECTED_MESSAGE);
    assert_eq!(names(service.repo().employees()), ["John", "Jane", "Dave"]);
    assert_eq!(service.repo().surface().errors, [DRAFT_REJECTED_MESSAGE]);
}

#[test]
fn request_edit_updates_existing_record() {
    let store = MemoryStore::new();
    let mut service = service(&store);

    let mut edit = service.edit_form(1).unwrap();
    assert_eq!(edit, form("John", "30", "40", "25"));
    edit.hours = "45".to_string();

    let response = service.request_edit(1, &edit);

    assert!(response.ok, "{}", response.message);
    assert_eq!(service.repo().find(1).unwrap().salary(), 58_500.0);
}

#[test]
fn request_edit_unknown_id_reports_not_found() {
    let store = MemoryStore::new();
    let mut service = service(&store);

    let response = service.request_edit(12, &form("Ghost", "1", "1", "1"));

    assert!(!response.ok);
    assert!(response.message.contains("not found"));
    assert!(service.repo().surface().errors.is_empty());
}

#[test]
fn edit_form_for_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let service = service(&store);

    assert!(matches!(
        service.edit_form(0).unwrap_err(),
        RosterError::NotFound(0)
    ));
}

#[test]
fn request_delete_reports_noop_for_unknown_id() {
    let store = MemoryStore::new();
    let mut service = service(&store);

    let removed = service.request_delete(2);
    let missing = service.request_delete(9);

    assert!(removed.ok);
    assert!(missing.ok);
    assert_eq!(missing.message, "No employee with that id.");
    let repo = service.into_repo();
    assert_eq!(names(repo.employees()), ["John", "Dave"]);
}
