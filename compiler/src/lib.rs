//! mavlink-mappings-compiler
//!
//! This crate implements:
//!  1) Typed views over the attributed declaration tree of a MAVLink dialect,
//!  2) The schema reader building enums, messages and fields (`SchemaReader`),
//!  3) Field layout and CRC_EXTRA (`layout`, `magic`),
//!  4) Identifier normalization and enum value prefix trimming,
//!  5) `MavCmd` command derivation and the `CommandInt` / `CommandLong` renames,
//!  6) The batch pipeline and the message-id → magic aggregate,
//!  7) Error types (`MappingsError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod tree;
pub mod options;
pub mod naming;
pub mod prefix;
pub mod layout;
pub mod magic;
pub mod commands;
pub mod reader;
pub mod compiler;

pub use compiler::{collect_magic_numbers, compile_all, compile_dialect, compile_dialects, compile_dialects_parallel};
pub use compiler::{Batch, DialectSource};
pub use error::MappingsError;
pub use options::ReaderOptions;
pub use reader::SchemaReader;
pub use tree::Element;
