//! Wire-level facts of the MAVLink protocol that every layout and checksum
//! computation depends on: the closed table of primitive field types and
//! the X.25 CRC digest used for CRC_EXTRA.
//!
//! ```
//! use mavlink_mappings_schema::*;
//!
//! let spec = TypeSpec::parse("char[16]").unwrap();
//! assert_eq!(spec.element, PrimitiveType::Char);
//! assert_eq!(spec.total_size(), 16);
//! assert_eq!(size_of("uint16_t[4]").unwrap(), 2);
//!
//! assert_eq!(X25Crc::calculate(b"123456789"), 0x6F91);
//! ```

pub mod crc;
pub mod wire;

pub use crc::*;
pub use wire::*;

/// Largest array length expressible in a message definition. CRC_EXTRA
/// encodes the length as a single raw byte.
pub const MAX_ARRAY_LENGTH: usize = 255;
