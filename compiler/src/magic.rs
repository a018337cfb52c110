use mavlink_mappings_schema::{fold_to_byte, X25Crc};

use crate::{layout::base_fields_by_size, types::FieldDef};

/// The byte sequence CRC_EXTRA is computed over.
///
/// `NAME ` followed by `type name ` for each base field in payload order,
/// with a raw length byte after array fields. Extension fields are left out.
pub fn crc_extra_input(source_name: &str, fields: &[FieldDef]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(source_name.len() + 1 + fields.len() * 24);
    buf.extend_from_slice(source_name.as_bytes());
    buf.push(b' ');

    for field in base_fields_by_size(fields) {
        buf.extend_from_slice(field.element_type.crc_name().as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(field.source_name.as_bytes());
        buf.push(b' ');
        if let Some(len) = field.array_length {
            // lengths are bounded by MAX_ARRAY_LENGTH when parsed
            buf.push(len as u8);
        }
    }
    buf
}

/// CRC_EXTRA of a message: the X.25 digest of [`crc_extra_input`] folded to one byte.
pub fn crc_extra(source_name: &str, fields: &[FieldDef]) -> u8 {
    fold_to_byte(X25Crc::calculate(&crc_extra_input(source_name, fields)))
}
