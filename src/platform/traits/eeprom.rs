//! EEPROM interface trait
//!
//! This module defines the byte-addressable persistent storage interface that
//! platform implementations must provide. The record store uses it for
//! provenance persistence at the tail of the address space.

use crate::platform::Result;

/// EEPROM interface trait
///
/// Platform implementations provide this interface for byte-addressable
/// read/write operations over a fixed-size address space.
///
/// # EEPROM Characteristics
///
/// - Byte-addressable: no erase step, any byte can be rewritten in place
/// - Erased/factory state reads as 0xFF
/// - Wear-sensitive: write endurance is limited (typically ~100k cycles),
///   callers must avoid gratuitous rewrites
/// - Operations are blocking and complete before returning
///
/// # Safety Invariants
///
/// - Only one owner per device instance (no concurrent access)
/// - Interrupt-context use is out of scope without external guarding
///
/// # Memory Layout (ATmega328P reference configuration)
///
/// ```text
/// [Application data]   0x000 - 0x3C4  (grows from the start)
/// [Provenance record]  0x3C4 - 0x400  (60 reserved bytes at the tail)
/// ```
pub trait EepromInterface {
    /// Read data from the EEPROM
    ///
    /// Reads `buf.len()` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`EepromError::OutOfBounds`](crate::platform::EepromError) if
    /// the range exceeds the device capacity, or `ReadFailed` if the device
    /// read fails.
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<()>;

    /// Write data to the EEPROM
    ///
    /// Writes `data` starting at `offset`. Unlike Flash, no prior erase is
    /// required. A power loss mid-write can leave a torn range; this
    /// interface provides no recovery for that case.
    ///
    /// # Errors
    ///
    /// Returns [`EepromError::OutOfBounds`](crate::platform::EepromError) if
    /// the range exceeds the device capacity, or `WriteFailed` if the device
    /// write fails.
    fn write(&mut self, offset: u32, data: &[u8]) -> Result<()>;

    /// Get total EEPROM size
    ///
    /// Returns the device capacity in bytes (1024 on the ATmega328P).
    fn capacity(&self) -> u32;
}
