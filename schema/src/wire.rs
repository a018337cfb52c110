use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::MAX_ARRAY_LENGTH;

lazy_static! {
    static ref ARRAY_TYPE: Regex = Regex::new(r"^(.*)\[(\d+)\]$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown type \"{0}\"")]
pub struct UnknownTypeError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeSpecError {
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    #[error("Invalid array length {length} in type \"{type_name}\"")]
    InvalidArrayLength { type_name: String, length: String },
}

/// Primitive field types allowed by the MAVLink message definition format.
///
/// The set is closed: it mirrors the protocol and has no configuration
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "int8_t")]
    Int8,
    #[serde(rename = "uint8_t")]
    Uint8,
    /// Read-only `uint8_t` carrying the protocol version in `HEARTBEAT`.
    #[serde(rename = "uint8_t_mavlink_version")]
    Uint8MavlinkVersion,
    #[serde(rename = "int16_t")]
    Int16,
    #[serde(rename = "uint16_t")]
    Uint16,
    #[serde(rename = "int32_t")]
    Int32,
    #[serde(rename = "uint32_t")]
    Uint32,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "int64_t")]
    Int64,
    #[serde(rename = "uint64_t")]
    Uint64,
    #[serde(rename = "double")]
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 12] = [
        PrimitiveType::Char,
        PrimitiveType::Int8,
        PrimitiveType::Uint8,
        PrimitiveType::Uint8MavlinkVersion,
        PrimitiveType::Int16,
        PrimitiveType::Uint16,
        PrimitiveType::Int32,
        PrimitiveType::Uint32,
        PrimitiveType::Float,
        PrimitiveType::Int64,
        PrimitiveType::Uint64,
        PrimitiveType::Double,
    ];

    /// Size of a single value in bytes.
    pub const fn size(self) -> usize {
        match self {
            PrimitiveType::Char
            | PrimitiveType::Int8
            | PrimitiveType::Uint8
            | PrimitiveType::Uint8MavlinkVersion => 1,
            PrimitiveType::Int16 | PrimitiveType::Uint16 => 2,
            PrimitiveType::Int32 | PrimitiveType::Uint32 | PrimitiveType::Float => 4,
            PrimitiveType::Int64 | PrimitiveType::Uint64 | PrimitiveType::Double => 8,
        }
    }

    /// The declared name, as it appears in dialect definitions.
    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Char => "char",
            PrimitiveType::Int8 => "int8_t",
            PrimitiveType::Uint8 => "uint8_t",
            PrimitiveType::Uint8MavlinkVersion => "uint8_t_mavlink_version",
            PrimitiveType::Int16 => "int16_t",
            PrimitiveType::Uint16 => "uint16_t",
            PrimitiveType::Int32 => "int32_t",
            PrimitiveType::Uint32 => "uint32_t",
            PrimitiveType::Float => "float",
            PrimitiveType::Int64 => "int64_t",
            PrimitiveType::Uint64 => "uint64_t",
            PrimitiveType::Double => "double",
        }
    }

    /// The name fed to CRC_EXTRA. The version marker hashes as plain `uint8_t`.
    pub const fn crc_name(self) -> &'static str {
        match self {
            PrimitiveType::Uint8MavlinkVersion => "uint8_t",
            other => other.as_str(),
        }
    }
}

impl FromStr for PrimitiveType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTypeError(s.to_string()))
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte width of a declared type. Array types report the element size;
/// callers multiply by the declared length.
pub fn size_of(type_name: &str) -> Result<usize, UnknownTypeError> {
    let element = match ARRAY_TYPE.captures(type_name) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => type_name,
    };
    Ok(element.parse::<PrimitiveType>()?.size())
}

/// A parsed field type: a primitive, optionally repeated a fixed number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    pub element:      PrimitiveType,
    pub array_length: Option<usize>,
}

impl TypeSpec {
    /// Parses `uint8_t` or `float[4]` style declarations.
    pub fn parse(type_name: &str) -> Result<Self, TypeSpecError> {
        match ARRAY_TYPE.captures(type_name) {
            Some(caps) => {
                let element = caps.get(1).map_or("", |m| m.as_str());
                let length = caps.get(2).map_or("", |m| m.as_str());
                let element = element.parse::<PrimitiveType>()?;
                let array_length = length
                    .parse::<usize>()
                    .ok()
                    .filter(|len| *len <= MAX_ARRAY_LENGTH)
                    .ok_or_else(|| TypeSpecError::InvalidArrayLength {
                        type_name: type_name.to_string(),
                        length:    length.to_string(),
                    })?;
                Ok(TypeSpec { element, array_length: Some(array_length) })
            }
            None => Ok(TypeSpec {
                element:      type_name.parse::<PrimitiveType>()?,
                array_length: None,
            }),
        }
    }

    pub fn is_array(&self) -> bool {
        self.array_length.is_some()
    }

    /// `char[N]` is a text value rather than a byte array.
    pub fn is_text(&self) -> bool {
        self.element == PrimitiveType::Char && self.is_array()
    }

    pub fn element_size(&self) -> usize {
        self.element.size()
    }

    pub fn total_size(&self) -> usize {
        self.element_size() * self.array_length.unwrap_or(1).max(1)
    }

    /// `uint8_t[]` for arrays, the bare primitive name otherwise.
    pub fn type_name(&self) -> String {
        if self.is_array() {
            format!("{}[]", self.element)
        } else {
            self.element.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_the_protocol_table() {
        let expected = [
            ("char", 1),
            ("int8_t", 1),
            ("uint8_t", 1),
            ("uint8_t_mavlink_version", 1),
            ("int16_t", 2),
            ("uint16_t", 2),
            ("int32_t", 4),
            ("uint32_t", 4),
            ("float", 4),
            ("int64_t", 8),
            ("uint64_t", 8),
            ("double", 8),
        ];
        for (name, size) in expected {
            assert_eq!(size_of(name), Ok(size), "{}", name);
        }
    }

    #[test]
    fn array_types_report_element_size() {
        assert_eq!(size_of("int32_t[10]"), Ok(4));
        assert_eq!(size_of("char[16]"), Ok(1));
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert_eq!(size_of("uint128_t"), Err(UnknownTypeError("uint128_t".to_string())));
        assert_eq!(size_of("bool[2]"), Err(UnknownTypeError("bool".to_string())));
        assert!(matches!(
            TypeSpec::parse("string"),
            Err(TypeSpecError::UnknownType(_))
        ));
    }

    #[test]
    fn parses_array_specs() {
        let spec = TypeSpec::parse("float[4]").unwrap();
        assert_eq!(spec.element, PrimitiveType::Float);
        assert_eq!(spec.array_length, Some(4));
        assert_eq!(spec.total_size(), 16);
        assert_eq!(spec.type_name(), "float[]");
        assert!(!spec.is_text());

        let text = TypeSpec::parse("char[50]").unwrap();
        assert!(text.is_text());

        let scalar = TypeSpec::parse("char").unwrap();
        assert!(!scalar.is_text());
        assert_eq!(scalar.total_size(), 1);
    }

    #[test]
    fn rejects_lengths_that_do_not_fit_a_byte() {
        assert!(matches!(
            TypeSpec::parse("uint8_t[256]"),
            Err(TypeSpecError::InvalidArrayLength { .. })
        ));
        assert!(TypeSpec::parse("uint8_t[255]").is_ok());
    }

    #[test]
    fn version_marker_hashes_as_uint8() {
        assert_eq!(PrimitiveType::Uint8MavlinkVersion.crc_name(), "uint8_t");
        assert_eq!(PrimitiveType::Uint8MavlinkVersion.as_str(), "uint8_t_mavlink_version");
        assert_eq!(PrimitiveType::Double.crc_name(), "double");
    }
}
