//! Compiled-in record defaults
//!
//! Edit these values for your project; [`VersionRecord::new`] picks them up.
//! Keeping the data here instead of calling the setters at runtime saves a
//! few bytes of RAM on small targets.
//!
//! Each literal is checked against its field capacity at compile time, so an
//! over-length value fails the build instead of being silently truncated.
//!
//! [`VersionRecord::new`]: super::VersionRecord::new

use super::layout::{DATE_CAPACITY, NAME_CAPACITY, SOFTWARE_CAPACITY, VENDOR_CAPACITY};

/// Official project name, not the SKU
pub const PROJECT_NAME: &str = "Sand Garden";

/// Single-letter vendor code
pub const VENDOR: &str = "M";

/// Project revision (1 for v1, 2 for v2, 3 for reorder)
pub const PROJECT_VERSION: u8 = 1;

/// Software version shipped to the vendor
pub const SOFTWARE_VERSION: &str = "1.0.0.0";

/// Date the compiled software was supplied, month spelled out
pub const RELEASE_DATE: &str = "January 15, 2025";

const _: () = assert!(
    PROJECT_NAME.len() <= NAME_CAPACITY,
    "PROJECT_NAME exceeds maximum length of 20 characters"
);
const _: () = assert!(
    VENDOR.len() <= VENDOR_CAPACITY,
    "VENDOR exceeds maximum length of 1 character"
);
const _: () = assert!(
    SOFTWARE_VERSION.len() <= SOFTWARE_CAPACITY,
    "SOFTWARE_VERSION exceeds maximum length of 7 characters"
);
const _: () = assert!(
    RELEASE_DATE.len() <= DATE_CAPACITY,
    "RELEASE_DATE exceeds maximum length of 18 characters"
);
