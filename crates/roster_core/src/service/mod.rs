//! Front-end facing services.
//!
//! # Responsibility
//! - Translate surface requests (raw form text, ids) into repository calls.
//! - Keep front ends decoupled from parsing and storage details.

pub mod form_service;
