//! Versioned record store
//!
//! This module defines the provenance record, its fixed wire format, the
//! EEPROM-backed store, compiled-in defaults, and the report formatter.

pub mod defaults;
pub mod error;
pub mod layout;
pub mod report;
pub mod store;

pub use error::StoreError;
pub use layout::{
    VersionRecord, DATE_CAPACITY, EXISTS_MAGIC, NAME_CAPACITY, RESERVED_BYTES, SCHEMA_VERSION,
    SOFTWARE_CAPACITY, VENDOR_CAPACITY,
};
pub use report::RecordReport;
pub use store::VersionStore;
