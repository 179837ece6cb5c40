//! clinic-assistant-core: Shared assistant types
//!
//! This crate provides the request/result types exchanged between the
//! clinic front-end and the assistant relay, plus the relay error taxonomy.

pub mod action;
pub mod error;
pub mod outcome;
pub mod request;
pub mod result;

pub use action::Action;
pub use error::AssistantError;
pub use outcome::ErrorBody;
pub use request::AssistantRequest;
pub use result::{AssistantResult, PatientUpdates, UPDATABLE_FIELDS};
