//! Record store error types

use core::fmt;

use crate::platform::EepromError;

/// Errors from record store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Underlying EEPROM operation failed
    Eeprom(EepromError),
    /// Device is smaller than the reserved record region
    EepromTooSmall,
    /// Exists flag was set but a text field did not decode as UTF-8
    /// (torn write or foreign data at the record offset)
    InvalidText,
}

impl From<EepromError> for StoreError {
    fn from(err: EepromError) -> Self {
        StoreError::Eeprom(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Eeprom(e) => write!(f, "EEPROM error: {}", e),
            StoreError::EepromTooSmall => {
                write!(f, "EEPROM smaller than the reserved record region")
            }
            StoreError::InvalidText => write!(f, "stored record text is not valid UTF-8"),
        }
    }
}
