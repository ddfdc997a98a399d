//! EEPROM-backed Version Record Store
//!
//! Provides persistent storage of a single [`VersionRecord`] in the reserved
//! region at the tail of the EEPROM address space. The record lives at the
//! tail rather than the start so that application data growing from the
//! start does not collide with it, as long as the reserved size holds.
//!
//! # Example
//!
//! ```
//! use eeprom_provenance::platform::mock::MockEeprom;
//! use eeprom_provenance::record::{VersionRecord, VersionStore};
//!
//! let mut store = VersionStore::new(MockEeprom::new()).unwrap();
//!
//! // Commit the compiled-in defaults
//! store.write(&VersionRecord::new(), false).unwrap();
//!
//! // A second plain write is a no-op; pass overwrite = true to replace
//! let mut updated = VersionRecord::new();
//! updated.set_project_version(2);
//! store.write(&updated, true).unwrap();
//!
//! assert_eq!(store.read().unwrap().unwrap().project_version(), 2);
//! ```

use super::error::StoreError;
use super::layout::{VersionRecord, RESERVED_BYTES};
use crate::platform::traits::EepromInterface;

/// Handle for the provenance record slot of one EEPROM device
///
/// Owns the device and the record's base offset, computed once at
/// construction as `capacity - RESERVED_BYTES`. All record operations go
/// through this handle; there is no module-level state.
pub struct VersionStore<E: EepromInterface> {
    eeprom: E,
    base: u32,
}

impl<E: EepromInterface> VersionStore<E> {
    /// Create a store over the given EEPROM device
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EepromTooSmall`] if the device cannot hold the
    /// reserved region.
    pub fn new(eeprom: E) -> Result<Self, StoreError> {
        let capacity = eeprom.capacity();
        if capacity < RESERVED_BYTES {
            return Err(StoreError::EepromTooSmall);
        }

        Ok(Self {
            eeprom,
            base: capacity - RESERVED_BYTES,
        })
    }

    /// Base offset of the reserved record region
    pub fn base_offset(&self) -> u32 {
        self.base
    }

    /// Check whether a record was previously committed
    ///
    /// Reads only the two exists-flag bytes, never the full record, so the
    /// check is cheap and side-effect-free. Erased EEPROM reads as 0xFFFF,
    /// which does not match the magic.
    pub fn record_exists(&mut self) -> Result<bool, StoreError> {
        let mut flag = [0u8; 2];
        self.eeprom.read(self.base, &mut flag)?;
        Ok(VersionRecord::flag_is_set(flag))
    }

    /// Write a record to the reserved region
    ///
    /// If no record exists the write happens unconditionally. If one exists
    /// it is replaced only when `overwrite` is true; otherwise the call is a
    /// silent no-op, so accidental re-flashing cannot clobber a previously
    /// recorded provenance record.
    ///
    /// A power loss mid-write can leave a torn record; no recovery is
    /// provided for that case.
    pub fn write(&mut self, record: &VersionRecord, overwrite: bool) -> Result<(), StoreError> {
        if self.record_exists()? && !overwrite {
            #[cfg(feature = "defmt")]
            defmt::debug!("version record present, write skipped");
            return Ok(());
        }

        self.eeprom.write(self.base, &record.to_bytes())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("version record written at {=u32:#x}", self.base);

        Ok(())
    }

    /// Read the committed record, if any
    ///
    /// Returns `Ok(None)` when the exists flag is unset; absence is a normal
    /// outcome, not an error. Idempotent and side-effect-free.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidText`] when the flag is set but the
    /// record body does not decode (torn write or foreign data).
    pub fn read(&mut self) -> Result<Option<VersionRecord>, StoreError> {
        if !self.record_exists()? {
            return Ok(None);
        }

        let mut buf = [0u8; VersionRecord::ENCODED_SIZE];
        self.eeprom.read(self.base, &mut buf)?;

        match VersionRecord::from_bytes(&buf) {
            Some(record) => Ok(Some(record)),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("exists flag set but record body failed to decode");
                Err(StoreError::InvalidText)
            }
        }
    }

    /// Give back the underlying device
    pub fn release(self) -> E {
        self.eeprom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockEeprom;
    use crate::record::layout::EXISTS_MAGIC;

    #[test]
    fn test_base_offset_at_tail() {
        let store = VersionStore::new(MockEeprom::new()).unwrap();
        assert_eq!(store.base_offset(), 1024 - RESERVED_BYTES);
    }

    #[test]
    fn test_rejects_too_small_device() {
        let eeprom = MockEeprom::<32>::with_size();
        assert!(matches!(
            VersionStore::new(eeprom),
            Err(StoreError::EepromTooSmall)
        ));
    }

    #[test]
    fn test_erased_device_has_no_record() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();
        assert!(!store.record_exists().unwrap());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_existence_check_is_partial_read() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();
        store.record_exists().unwrap();

        let eeprom = store.release();
        assert_eq!(eeprom.read_ops(), 1);
        assert_eq!(eeprom.bytes_read(), 2);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();

        let record = VersionRecord::new();
        store.write(&record, false).unwrap();

        assert!(store.record_exists().unwrap());
        assert_eq!(store.read().unwrap(), Some(record));
    }

    #[test]
    fn test_plain_write_does_not_clobber() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();

        let first = VersionRecord::new();
        store.write(&first, false).unwrap();

        let mut second = VersionRecord::new();
        second.set_project_version(9);
        store.write(&second, false).unwrap();

        assert_eq!(store.read().unwrap(), Some(first));
    }

    #[test]
    fn test_skipped_write_touches_no_cells() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();
        store.write(&VersionRecord::new(), false).unwrap();

        let writes_after_commit = {
            let eeprom = store.release();
            let count = eeprom.write_ops();
            store = VersionStore::new(eeprom).unwrap();
            count
        };

        store.write(&VersionRecord::new(), false).unwrap();

        let eeprom = store.release();
        assert_eq!(eeprom.write_ops(), writes_after_commit);
    }

    #[test]
    fn test_overwrite_replaces_record() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();

        store.write(&VersionRecord::new(), false).unwrap();

        let mut replacement = VersionRecord::new();
        replacement.set_vendor("N");
        store.write(&replacement, true).unwrap();

        assert_eq!(store.read().unwrap(), Some(replacement));
    }

    #[test]
    fn test_read_is_idempotent() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();
        store.write(&VersionRecord::new(), false).unwrap();

        let first = store.read().unwrap();
        let second = store.read().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_record_lands_in_reserved_region() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();
        let record = VersionRecord::new();
        store.write(&record, false).unwrap();

        let base = store.base_offset();
        let eeprom = store.release();

        // Exists flag at the base offset, little-endian
        assert_eq!(
            eeprom.contents(base, 2),
            EXISTS_MAGIC.to_le_bytes().as_slice()
        );
        // Bytes below the reserved region stay erased
        assert!(eeprom.contents(0, base as usize).iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_corrupted_body_reports_invalid_text() {
        let mut store = VersionStore::new(MockEeprom::new()).unwrap();
        store.write(&VersionRecord::new(), false).unwrap();

        let base = store.base_offset();
        let mut eeprom = store.release();
        // Corrupt the name field but leave the exists flag intact
        eeprom.inject_corruption(base + 3, 4);
        store = VersionStore::new(eeprom).unwrap();

        assert!(store.record_exists().unwrap());
        assert_eq!(store.read(), Err(StoreError::InvalidText));
    }
}
