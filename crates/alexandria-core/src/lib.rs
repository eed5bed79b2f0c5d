//! alexandria-core
//!
//! Pure domain types: the symptom catalog, the extraction record, and the
//! conversation transcript. No extraction logic lives here; this is the
//! shared vocabulary of the Alexandria system.

pub mod error;
pub mod models;
