//! Basic usage walkthrough, run on the host against the mock device
//!
//! Shows the full lifecycle: inspect the compiled-in defaults, adjust the
//! release fields through the setters, commit with overwrite, and read the
//! record back. On target hardware the only change is swapping `MockEeprom`
//! for the board's `EepromInterface` implementation.
//!
//! Run with: `cargo run --example basic_usage`

use eeprom_provenance::platform::mock::MockEeprom;
use eeprom_provenance::record::{RecordReport, VersionRecord, VersionStore};

fn main() {
    let mut store = VersionStore::new(MockEeprom::new()).expect("mock device is large enough");

    // First, examine the default data that would be written:
    let mut record = VersionRecord::new();
    println!("First, let's see what data will be written to EEPROM:");
    println!("{}\n", RecordReport::new(Some(&record)));

    // The setters safely change fields before committing. Over-length input
    // is truncated to fit; defaults that do not fit fail the build instead.
    record.set_project_version(2);
    record.set_release_date("April 3, 2025");
    record.set_software_version("3.1.1");
    record.set_vendor("N");

    // Commit for long-term storage. The second argument forces an overwrite
    // of any previously recorded data.
    store.write(&record, true).expect("write to mock device");

    // Finally, retrieve the previously written data:
    println!("Now retrieve the data from EEPROM:");
    let stored = store.read().expect("read from mock device");
    println!("{}", RecordReport::new(stored.as_ref()));
}
