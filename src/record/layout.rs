//! Record layout and wire format
//!
//! This module defines the binary format for the provenance record stored in
//! EEPROM. The encoding is an explicit fixed-width little-endian layout so
//! that persisted bytes are reproducible across recompilation; the in-memory
//! working copy is never written as-is.
//!
//! # Record Format (54 bytes)
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Exists flag: u16 LE = 42 when committed      │  Offset: 0
//! ├──────────────────────────────────────────────┤
//! │ Schema version: u8 = 1                       │  Offset: 2
//! ├──────────────────────────────────────────────┤
//! │ Project name: [u8; 21] (null-terminated)     │  Offset: 3
//! ├──────────────────────────────────────────────┤
//! │ Vendor: [u8; 2] (null-terminated)            │  Offset: 24
//! ├──────────────────────────────────────────────┤
//! │ Project version: u8                          │  Offset: 26
//! ├──────────────────────────────────────────────┤
//! │ Software version: [u8; 8] (null-terminated)  │  Offset: 27
//! ├──────────────────────────────────────────────┤
//! │ Release date: [u8; 19] (null-terminated)     │  Offset: 35
//! └──────────────────────────────────────────────┘
//! ```

use heapless::String;

use super::defaults;

/// Existence flag magic value (anything else means "no record")
pub const EXISTS_MAGIC: u16 = 42;

/// Record layout version written alongside every record
pub const SCHEMA_VERSION: u8 = 1;

/// Bytes reserved for the record at the tail of the EEPROM
pub const RESERVED_BYTES: u32 = 60;

/// Maximum project name length (data characters, terminator excluded)
pub const NAME_CAPACITY: usize = 20;

/// Maximum vendor code length
pub const VENDOR_CAPACITY: usize = 1;

/// Maximum software version length
pub const SOFTWARE_CAPACITY: usize = 7;

/// Maximum release date length
pub const DATE_CAPACITY: usize = 18;

// Field windows in the encoded record (data + terminator)
const NAME_FIELD: core::ops::Range<usize> = 3..3 + NAME_CAPACITY + 1;
const VENDOR_FIELD: core::ops::Range<usize> = 24..24 + VENDOR_CAPACITY + 1;
const SOFTWARE_FIELD: core::ops::Range<usize> = 27..27 + SOFTWARE_CAPACITY + 1;
const DATE_FIELD: core::ops::Range<usize> = 35..35 + DATE_CAPACITY + 1;

/// Provenance record working copy
///
/// Holds the project identity and release information assembled in RAM before
/// being committed to EEPROM. Constructed from the compiled-in defaults in
/// [`defaults`](super::defaults); the setters exist for callers who prefer
/// runtime configuration over editing the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Layout version that produced this record (compatibility detection)
    schema_version: u8,
    /// Official project name, not the SKU
    project_name: String<NAME_CAPACITY>,
    /// Single-letter vendor code
    vendor: String<VENDOR_CAPACITY>,
    /// Project revision, meaningful values start at 1
    project_version: u8,
    /// Software version string, any scheme that fits
    software_version: String<SOFTWARE_CAPACITY>,
    /// Date the compiled software was released, month spelled out
    release_date: String<DATE_CAPACITY>,
}

// Layout must fit the reserved tail region.
const _: () = assert!(
    VersionRecord::ENCODED_SIZE <= RESERVED_BYTES as usize,
    "encoded record exceeds the reserved EEPROM region"
);

impl VersionRecord {
    /// Size of the encoded record in bytes
    pub const ENCODED_SIZE: usize = DATE_FIELD.end;

    /// Create a record populated with the compiled-in defaults
    ///
    /// Default literals are compile-time checked against the field
    /// capacities, so no truncation occurs here.
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            project_name: truncate_to(defaults::PROJECT_NAME),
            vendor: truncate_to(defaults::VENDOR),
            project_version: defaults::PROJECT_VERSION,
            software_version: truncate_to(defaults::SOFTWARE_VERSION),
            release_date: truncate_to(defaults::RELEASE_DATE),
        }
    }

    /// Layout version that produced this record
    pub fn schema_version(&self) -> u8 {
        self.schema_version
    }

    /// Check whether this record uses the current layout
    ///
    /// Detection only; no migration between layouts is provided.
    pub fn is_current_schema(&self) -> bool {
        self.schema_version == SCHEMA_VERSION
    }

    /// Project name
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Vendor code
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Project version
    pub fn project_version(&self) -> u8 {
        self.project_version
    }

    /// Software version
    pub fn software_version(&self) -> &str {
        &self.software_version
    }

    /// Release date
    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    /// Set the project name (max 20 characters)
    ///
    /// Over-length input is silently truncated to fit; the stored value is
    /// always terminated. Lossy by design, not an error.
    pub fn set_project_name(&mut self, name: &str) {
        self.project_name = truncate_to(name);
    }

    /// Set the vendor code (max 1 character)
    ///
    /// Over-length input is silently truncated to fit.
    pub fn set_vendor(&mut self, vendor: &str) {
        self.vendor = truncate_to(vendor);
    }

    /// Set the project version
    ///
    /// Plain assignment; no validation beyond the field's native width.
    pub fn set_project_version(&mut self, version: u8) {
        self.project_version = version;
    }

    /// Set the software version (max 7 characters)
    ///
    /// Over-length input is silently truncated to fit.
    pub fn set_software_version(&mut self, version: &str) {
        self.software_version = truncate_to(version);
    }

    /// Set the release date (max 18 characters)
    ///
    /// Over-length input is silently truncated to fit.
    pub fn set_release_date(&mut self, date: &str) {
        self.release_date = truncate_to(date);
    }

    /// Serialize the record to its wire format (little-endian)
    ///
    /// The exists flag is always encoded as [`EXISTS_MAGIC`]; unused bytes of
    /// each text window are zero, so every field carries its terminator.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_SIZE] {
        let mut buf = [0u8; Self::ENCODED_SIZE];

        buf[0..2].copy_from_slice(&EXISTS_MAGIC.to_le_bytes());
        buf[2] = self.schema_version;
        encode_text(&mut buf[NAME_FIELD], &self.project_name);
        encode_text(&mut buf[VENDOR_FIELD], &self.vendor);
        buf[26] = self.project_version;
        encode_text(&mut buf[SOFTWARE_FIELD], &self.software_version);
        encode_text(&mut buf[DATE_FIELD], &self.release_date);

        buf
    }

    /// Deserialize a record from its wire format
    ///
    /// Returns `None` if the buffer is too short, the exists flag does not
    /// match the magic, or a text field does not decode as UTF-8.
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::ENCODED_SIZE {
            return None;
        }

        let flag = u16::from_le_bytes([buf[0], buf[1]]);
        if flag != EXISTS_MAGIC {
            return None;
        }

        Some(Self {
            schema_version: buf[2],
            project_name: decode_text(&buf[NAME_FIELD])?,
            vendor: decode_text(&buf[VENDOR_FIELD])?,
            project_version: buf[26],
            software_version: decode_text(&buf[SOFTWARE_FIELD])?,
            release_date: decode_text(&buf[DATE_FIELD])?,
        })
    }

    /// Check whether the first two bytes of a record carry the exists flag
    ///
    /// Used for the cheap partial-read existence check; two bytes are enough.
    pub fn flag_is_set(flag_bytes: [u8; 2]) -> bool {
        u16::from_le_bytes(flag_bytes) == EXISTS_MAGIC
    }
}

impl Default for VersionRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy a string into a fixed-capacity field, truncating on a character
/// boundary if it does not fit
fn truncate_to<const CAP: usize>(src: &str) -> String<CAP> {
    let mut end = src.len().min(CAP);
    while !src.is_char_boundary(end) {
        end -= 1;
    }

    let mut out = String::new();
    out.push_str(&src[..end]).ok();
    out
}

/// Write a field value into its window, zero-padding the remainder
///
/// The window is one byte wider than the field capacity, so the terminator
/// always fits.
fn encode_text(window: &mut [u8], value: &str) {
    window.fill(0);
    window[..value.len()].copy_from_slice(value.as_bytes());
}

/// Read a null-terminated field value out of its window
///
/// Foreign data may lack a terminator; the value is clamped to the field
/// capacity in that case. Returns `None` for non-UTF-8 bytes.
fn decode_text<const CAP: usize>(window: &[u8]) -> Option<String<CAP>> {
    let len = window
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(CAP)
        .min(CAP);
    let text = core::str::from_utf8(&window[..len]).ok()?;

    let mut out = String::new();
    out.push_str(text).ok();
    Some(out)
}
