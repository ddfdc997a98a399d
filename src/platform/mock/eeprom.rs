//! Mock EEPROM implementation for testing
//!
//! Provides in-memory EEPROM simulation for unit tests.

use crate::platform::{error::EepromError, traits::EepromInterface, Result};

/// Default mock capacity (1 KB, same as the ATmega328P)
pub const MOCK_EEPROM_SIZE: usize = 1024;

/// Mock EEPROM implementation
///
/// Simulates byte-addressable EEPROM in memory for testing. Supports:
/// - Read/write operations with bounds checking
/// - Operation and traffic counters for wear validation
/// - Corruption injection for testing decode error handling
///
/// The backing array starts at 0xFF, matching the erased/factory state of
/// real EEPROM hardware.
///
/// # Example
///
/// ```
/// use eeprom_provenance::platform::mock::MockEeprom;
/// use eeprom_provenance::platform::traits::EepromInterface;
///
/// let mut eeprom = MockEeprom::new();
///
/// // Write data
/// eeprom.write(0x3C4, &[42, 0]).unwrap();
///
/// // Read back
/// let mut buf = [0u8; 2];
/// eeprom.read(0x3C4, &mut buf).unwrap();
/// assert_eq!(buf, [42, 0]);
///
/// // Check traffic counters
/// assert_eq!(eeprom.write_ops(), 1);
/// assert_eq!(eeprom.bytes_written(), 2);
/// ```
#[derive(Debug)]
pub struct MockEeprom<const N: usize = MOCK_EEPROM_SIZE> {
    /// EEPROM contents (initialized to 0xFF - erased state)
    storage: [u8; N],
    /// Number of read operations performed
    read_ops: u32,
    /// Number of write operations performed
    write_ops: u32,
    /// Total bytes read across all operations
    bytes_read: u32,
    /// Total bytes written across all operations (wear tracking)
    bytes_written: u32,
}

impl MockEeprom {
    /// Create a mock with the default ATmega328P capacity
    pub fn new() -> Self {
        Self::with_size()
    }
}

impl<const N: usize> MockEeprom<N> {
    /// Create a new mock EEPROM of `N` bytes in the erased state
    ///
    /// Used by tests that need a device smaller than the reserved region.
    pub fn with_size() -> Self {
        Self {
            storage: [0xFF; N],
            read_ops: 0,
            write_ops: 0,
            bytes_read: 0,
            bytes_written: 0,
        }
    }

    /// Get EEPROM contents (for test verification)
    pub fn contents(&self, offset: u32, len: usize) -> &[u8] {
        &self.storage[offset as usize..offset as usize + len]
    }

    /// Inject corruption at offset (for testing decode error handling)
    ///
    /// Overwrites the range with a fixed non-UTF-8 pattern without going
    /// through the write path or counters.
    pub fn inject_corruption(&mut self, offset: u32, len: usize) {
        for byte in &mut self.storage[offset as usize..offset as usize + len] {
            *byte = 0xFE;
        }
    }

    /// Number of read operations performed
    pub fn read_ops(&self) -> u32 {
        self.read_ops
    }

    /// Number of write operations performed
    pub fn write_ops(&self) -> u32 {
        self.write_ops
    }

    /// Total bytes read across all operations
    pub fn bytes_read(&self) -> u32 {
        self.bytes_read
    }

    /// Total bytes written across all operations
    ///
    /// EEPROM is wear-sensitive, so tests use this to assert that skipped
    /// writes touch zero cells.
    pub fn bytes_written(&self) -> u32 {
        self.bytes_written
    }

    fn in_bounds(&self, offset: u32, len: usize) -> bool {
        (offset as usize)
            .checked_add(len)
            .is_some_and(|end| end <= N)
    }
}

impl<const N: usize> Default for MockEeprom<N> {
    fn default() -> Self {
        Self::with_size()
    }
}

impl<const N: usize> EepromInterface for MockEeprom<N> {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<()> {
        if !self.in_bounds(offset, buf.len()) {
            return Err(EepromError::OutOfBounds);
        }

        buf.copy_from_slice(&self.storage[offset as usize..offset as usize + buf.len()]);
        self.read_ops += 1;
        self.bytes_read += buf.len() as u32;

        Ok(())
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        if !self.in_bounds(offset, data.len()) {
            return Err(EepromError::OutOfBounds);
        }

        self.storage[offset as usize..offset as usize + data.len()].copy_from_slice(data);
        self.write_ops += 1;
        self.bytes_written += data.len() as u32;

        Ok(())
    }

    fn capacity(&self) -> u32 {
        N as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_eeprom_starts_erased() {
        let mut eeprom = MockEeprom::new();

        let mut buf = [0u8; 16];
        eeprom.read(0, &mut buf).unwrap();
        assert!(buf.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_mock_eeprom_read_write() {
        let mut eeprom = MockEeprom::new();

        let data = [0x2A, 0x00, 0x01];
        eeprom.write(0x3C4, &data).unwrap();

        let mut buf = [0u8; 3];
        eeprom.read(0x3C4, &mut buf).unwrap();
        assert_eq!(buf, data);
    }

    #[test]
    fn test_mock_eeprom_rewrites_in_place() {
        // EEPROM needs no erase between writes, unlike Flash
        let mut eeprom = MockEeprom::new();

        eeprom.write(0, &[0x00]).unwrap();
        eeprom.write(0, &[0xFF]).unwrap();

        let mut buf = [0u8; 1];
        eeprom.read(0, &mut buf).unwrap();
        assert_eq!(buf[0], 0xFF);
    }

    #[test]
    fn test_mock_eeprom_out_of_bounds() {
        let mut eeprom = MockEeprom::new();

        let mut buf = [0u8; 4];
        assert_eq!(
            eeprom.read(MOCK_EEPROM_SIZE as u32, &mut buf),
            Err(EepromError::OutOfBounds)
        );

        // Range straddling the end of the device
        assert_eq!(
            eeprom.write(MOCK_EEPROM_SIZE as u32 - 2, &[0u8; 4]),
            Err(EepromError::OutOfBounds)
        );
    }

    #[test]
    fn test_mock_eeprom_counters() {
        let mut eeprom = MockEeprom::new();

        let mut buf = [0u8; 2];
        eeprom.read(0, &mut buf).unwrap();
        eeprom.write(0, &[1, 2, 3]).unwrap();

        assert_eq!(eeprom.read_ops(), 1);
        assert_eq!(eeprom.bytes_read(), 2);
        assert_eq!(eeprom.write_ops(), 1);
        assert_eq!(eeprom.bytes_written(), 3);

        // Failed operations do not count
        assert!(eeprom.write(MOCK_EEPROM_SIZE as u32, &[0]).is_err());
        assert_eq!(eeprom.write_ops(), 1);
    }

    #[test]
    fn test_mock_eeprom_small_capacity() {
        let eeprom = MockEeprom::<64>::with_size();
        assert_eq!(eeprom.capacity(), 64);
    }
}
