//! eeprom_provenance - Build provenance records in microcontroller EEPROM
//!
//! This crate stores a small fixed-layout record (project identity, version
//! numbers, vendor, release date) at a reserved region at the tail of a
//! byte-addressable EEPROM, so that flashed firmware can self-report its
//! build provenance without any host tooling.
//!
//! # Design Principles
//!
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: The EEPROM device is injected via
//!   [`platform::traits::EepromInterface`], so the store is testable on host
//!   with [`platform::mock::MockEeprom`]
//! - **Explicit wire format**: The persisted layout is a fixed little-endian
//!   encoding, never the host struct layout
//!
//! # Modules
//!
//! - [`platform`]: EEPROM trait abstraction, error types, and in-memory mock
//! - [`record`]: The versioned record type, its encoding, and the store
//!
//! # Example
//!
//! ```
//! use eeprom_provenance::platform::mock::MockEeprom;
//! use eeprom_provenance::record::{VersionRecord, VersionStore};
//!
//! let mut store = VersionStore::new(MockEeprom::new()).unwrap();
//! assert!(!store.record_exists().unwrap());
//!
//! let mut record = VersionRecord::new();
//! record.set_project_version(2);
//! store.write(&record, false).unwrap();
//!
//! let stored = store.read().unwrap().unwrap();
//! assert_eq!(stored.project_version(), 2);
//! ```

#![no_std]

pub mod platform;
pub mod record;

pub use platform::mock::MockEeprom;
pub use platform::traits::EepromInterface;
pub use record::{RecordReport, StoreError, VersionRecord, VersionStore};
