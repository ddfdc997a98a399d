//! Platform trait abstractions

pub mod eeprom;

pub use eeprom::EepromInterface;
