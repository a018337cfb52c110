//! mavlink-mappings
//!
//! Front door of the MAVLink mappings compiler.
//!
//! - Re-exports the compiler pipeline, IR types and wire primitives
//! - JSON helpers for receiving declaration trees from a markup parser and
//!   handing the IR to an emitter

pub use mavlink_mappings_compiler::error::MappingsError;
pub use mavlink_mappings_compiler::tree::Element;
pub use mavlink_mappings_compiler::types::{
    CommandDef, CommandParamDef, Deprecation, Dialect, EnumDef, EnumParamDef, EnumValueDef, FieldDef,
    MagicNumbers, MessageDef,
};
pub use mavlink_mappings_compiler::{
    collect_magic_numbers, compile_all, compile_dialect, compile_dialects, compile_dialects_parallel, Batch,
    DialectSource, ReaderOptions,
};
pub use mavlink_mappings_schema::{size_of, PrimitiveType, TypeSpec, X25Crc, X25_INIT};

/// Parse a declaration tree serialized as JSON.
pub fn tree_from_json(json: &str) -> Result<Element, MappingsError> {
    Ok(serde_json::from_str(json)?)
}

/// Compile a dialect whose tree arrives as JSON.
pub fn compile_json(name: &str, json: &str, options: &ReaderOptions) -> Result<Dialect, MappingsError> {
    let root = tree_from_json(json)?;
    compile_dialect(name, &root, options)
}

/// Pretty-printed JSON of a dialect's IR.
pub fn dialect_to_json(dialect: &Dialect) -> Result<String, MappingsError> {
    Ok(serde_json::to_string_pretty(dialect)?)
}

/// Pretty-printed JSON object mapping message id to CRC_EXTRA.
pub fn magic_numbers_to_json(magic_numbers: &MagicNumbers) -> Result<String, MappingsError> {
    Ok(serde_json::to_string_pretty(magic_numbers)?)
}

pub mod error {
    pub use mavlink_mappings_compiler::error::MappingsError;
}

pub mod schema {
    pub use mavlink_mappings_schema::*;
}
