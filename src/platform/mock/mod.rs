//! Mock platform implementations for testing

pub mod eeprom;

pub use eeprom::{MockEeprom, MOCK_EEPROM_SIZE};
