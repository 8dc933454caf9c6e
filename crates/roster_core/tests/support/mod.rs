#![allow(dead_code)]

use roster_core::{Employee, KeyValueStore, PresentationSurface, StoreError, StoreResult};
use std::cell::Cell;

/// Surface that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub renders: Vec<Vec<Employee>>,
    pub errors: Vec<String>,
}

impl RecordingSurface {
    pub fn last_render(&self) -> &[Employee] {
        self.renders.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl PresentationSurface for RecordingSurface {
    fn render(&mut self, employees: &[Employee]) {
        self.renders.push(employees.to_vec());
    }

    fn show_validation_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Store whose reads succeed with a fixed value and whose writes can be
/// switched to fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub value: Option<String>,
    pub fail_writes: Cell<bool>,
    pub writes: Cell<usize>,
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::from(rusqlite::Error::InvalidQuery));
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

pub fn ids(employees: &[Employee]) -> Vec<u32> {
    employees.iter().map(Employee::id).collect()
}

pub fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(Employee::name).collect()
}
