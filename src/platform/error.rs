//! Platform error types
//!
//! This module defines error types for EEPROM device operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, EepromError>;

/// EEPROM device errors
///
/// Device implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError {
    /// Access outside the device address space
    OutOfBounds,
    /// Read operation failed
    ReadFailed,
    /// Write operation failed
    WriteFailed,
}

impl fmt::Display for EepromError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EepromError::OutOfBounds => write!(f, "EEPROM access out of bounds"),
            EepromError::ReadFailed => write!(f, "EEPROM read failed"),
            EepromError::WriteFailed => write!(f, "EEPROM write failed"),
        }
    }
}
