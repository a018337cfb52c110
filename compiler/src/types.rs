use std::collections::BTreeMap;

use mavlink_mappings_schema::{PrimitiveType, TypeSpec, TypeSpecError};
use serde::Serialize;

use crate::{layout, magic, naming::snake_to_camel};

/// Everything derived from one dialect definition file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dialect {
    pub name:     String,
    pub version:  Option<u32>,
    pub dialect:  Option<u32>,
    pub includes: Vec<String>,
    pub enums:    Vec<EnumDef>,
    pub messages: Vec<MessageDef>,
    pub commands: Vec<CommandDef>,
}

impl Dialect {
    pub fn enum_by_name(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn message_by_name(&self, name: &str) -> Option<&MessageDef> {
        self.messages.iter().find(|m| m.name == name)
    }

    pub fn message_by_id(&self, id: i64) -> Option<&MessageDef> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn magic_numbers(&self) -> MagicNumbers {
        self.messages.iter().map(|m| (m.id, m.magic)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deprecation {
    pub since:       String,
    pub replaced_by: String,
    pub note:        Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDef {
    pub name:          String,
    pub source_name:   String,
    pub description:   Vec<String>,
    /// Prefix cut off the value names; empty until resolved.
    pub common_prefix: String,
    pub values:        Vec<EnumValueDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValueDef {
    pub source_name:      String,
    pub name:             String,
    pub value:            i128,
    pub source_value:     String,
    pub description:      Vec<String>,
    pub params:           Vec<EnumParamDef>,
    pub has_location:     bool,
    pub is_destination:   bool,
    pub work_in_progress: bool,
    pub deprecated:       Option<Deprecation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumParamDef {
    pub index:       u32,
    pub label:       Option<String>,
    pub units:       String,
    pub min_value:   Option<String>,
    pub max_value:   Option<String>,
    pub increment:   Option<String>,
    pub enum_name:   Option<String>,
    pub reserved:    bool,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub source_name:      String,
    pub name:             String,
    /// Type as declared, e.g. `char[16]`.
    pub declared_type:    String,
    pub element_type:     PrimitiveType,
    pub element_size:     usize,
    pub array_length:     Option<usize>,
    pub total_size:       usize,
    /// Byte offset inside the payload; assigned by [`MessageDef::new`].
    pub offset:           usize,
    pub is_extension:     bool,
    pub enum_source_name: Option<String>,
    pub enum_name:        Option<String>,
    /// Type handed to emitters: enum class, `string`, `T[]` or the primitive.
    pub field_type:       String,
    pub units:            String,
    pub description:      Vec<String>,
}

impl FieldDef {
    pub fn new(source_name: &str, declared_type: &str) -> Result<Self, TypeSpecError> {
        let spec = TypeSpec::parse(declared_type)?;
        let field_type = if spec.is_text() {
            "string".to_string()
        } else {
            spec.type_name()
        };
        Ok(FieldDef {
            source_name: source_name.to_string(),
            name: snake_to_camel(source_name),
            declared_type: declared_type.to_string(),
            element_type: spec.element,
            element_size: spec.element_size(),
            array_length: spec.array_length,
            total_size: spec.total_size(),
            offset: 0,
            is_extension: false,
            enum_source_name: None,
            enum_name: None,
            field_type,
            units: String::new(),
            description: Vec::new(),
        })
    }

    /// Reinterprets the field as enum-typed. Array-ness follows the field.
    pub fn with_enum(mut self, source_name: &str, class_name: &str) -> Self {
        self.field_type = if self.is_array() {
            format!("{}[]", class_name)
        } else {
            class_name.to_string()
        };
        self.enum_source_name = Some(source_name.to_string());
        self.enum_name = Some(class_name.to_string());
        self
    }

    pub fn with_extension(mut self, is_extension: bool) -> Self {
        self.is_extension = is_extension;
        self
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = units.to_string();
        self
    }

    pub fn with_description(mut self, description: Vec<String>) -> Self {
        self.description = description;
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_length.is_some()
    }

    pub fn is_text(&self) -> bool {
        self.element_type == PrimitiveType::Char && self.is_array()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDef {
    pub source_name:      String,
    pub name:             String,
    pub id:               i64,
    pub description:      Vec<String>,
    pub deprecated:       Option<Deprecation>,
    pub work_in_progress: bool,
    /// Declaration order. Replace through [`MessageDef::set_fields`] so the
    /// derived layout stays in sync.
    pub fields:           Vec<FieldDef>,
    pub payload_length:   usize,
    /// CRC_EXTRA.
    pub magic:            u8,
}

impl MessageDef {
    pub fn new(source_name: &str, name: &str, id: i64, fields: Vec<FieldDef>) -> Self {
        let mut message = MessageDef {
            source_name:      source_name.to_string(),
            name:             name.to_string(),
            id,
            description:      Vec::new(),
            deprecated:       None,
            work_in_progress: false,
            fields:           Vec::new(),
            payload_length:   0,
            magic:            0,
        };
        message.set_fields(fields);
        message
    }

    /// Replaces the fields and recomputes offsets, payload length and magic.
    pub fn set_fields(&mut self, mut fields: Vec<FieldDef>) {
        self.payload_length = layout::assign_offsets(&mut fields);
        self.magic = magic::crc_extra(&self.source_name, &fields);
        self.fields = fields;
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn base_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.is_extension)
    }

    pub fn extension_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_extension)
    }

    /// Fields in payload order.
    pub fn fields_in_wire_order(&self) -> Vec<&FieldDef> {
        layout::wire_order(&self.fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDef {
    pub source_name:    String,
    /// Prefix-trimmed value name the class name is built from.
    pub name:           String,
    pub class_name:     String,
    pub value:          i128,
    pub description:    Vec<String>,
    pub has_location:   bool,
    pub is_destination: bool,
    pub params:         Vec<CommandParamDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandParamDef {
    pub index:       u32,
    /// Accessor identifier derived from the label.
    pub name:        String,
    /// The label as declared, kept for documentation.
    pub label:       String,
    pub units:       String,
    pub min_value:   Option<String>,
    pub max_value:   Option<String>,
    pub increment:   Option<String>,
    pub description: Vec<String>,
}

/// CRC_EXTRA by message id across every processed dialect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MagicNumbers(BTreeMap<i64, u8>);

impl MagicNumbers {
    pub fn new() -> Self {
        MagicNumbers(BTreeMap::new())
    }

    /// Last write wins.
    pub fn insert(&mut self, id: i64, magic: u8) -> Option<u8> {
        self.0.insert(id, magic)
    }

    pub fn merge(&mut self, other: MagicNumbers) {
        self.0.extend(other.0);
    }

    pub fn get(&self, id: i64) -> Option<u8> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, u8)> + '_ {
        self.0.iter().map(|(id, magic)| (*id, *magic))
    }
}

impl FromIterator<(i64, u8)> for MagicNumbers {
    fn from_iter<I: IntoIterator<Item = (i64, u8)>>(iter: I) -> Self {
        MagicNumbers(iter.into_iter().collect())
    }
}
