//! Record region dumper
//!
//! Prints the committed record (or the "no data" line) followed by a hex dump
//! of the reserved region, useful when diagnosing a torn or foreign record.
//!
//! Run with: `cargo run --example eeprom_dump`

use eeprom_provenance::platform::mock::MockEeprom;
use eeprom_provenance::record::{RecordReport, VersionRecord, VersionStore, RESERVED_BYTES};

fn main() {
    let mut store = VersionStore::new(MockEeprom::new()).expect("mock device is large enough");

    // Seed the mock so the dump has something to show; on hardware this
    // program would only read.
    store
        .write(&VersionRecord::new(), false)
        .expect("write to mock device");

    let stored = store.read().expect("read from mock device");
    println!("{}\n", RecordReport::new(stored.as_ref()));

    let base = store.base_offset();
    let eeprom = store.release();
    let region = eeprom.contents(base, RESERVED_BYTES as usize);

    println!("Reserved region at {:#06x}:", base);
    for (row, chunk) in region.chunks(16).enumerate() {
        print!("{:#06x}:", base as usize + row * 16);
        for byte in chunk {
            print!(" {:02x}", byte);
        }
        println!();
    }
}
