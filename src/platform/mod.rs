//! Platform abstraction layer
//!
//! This module defines the EEPROM device interface consumed by the record
//! store, the error types device implementations report, and an in-memory
//! mock device for host testing.

pub mod error;
pub mod mock;
pub mod traits;

pub use error::{EepromError, Result};
