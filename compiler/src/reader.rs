use log::{debug, trace, warn};

use crate::{
    commands::{derive_commands, rename_command_message_fields},
    error::MappingsError,
    naming::make_class_name,
    options::ReaderOptions,
    prefix::apply_common_prefix,
    tree::{DeprecatedNode, DialectNode, Element, EntryNode, EnumNode, MessageItem, MessageNode, ParamNode},
    types::{Deprecation, Dialect, EnumDef, EnumParamDef, EnumValueDef, FieldDef, MessageDef},
    utils::{quote, wrap_text},
};

/// Builds the IR of one dialect from its declaration tree.
#[derive(Debug, Clone, Default)]
pub struct SchemaReader {
    options: ReaderOptions,
}

impl SchemaReader {
    pub fn new(options: ReaderOptions) -> Self {
        SchemaReader { options }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Runs every stage in order: tree views, enums, prefix resolution,
    /// messages with layout and magic, work-in-progress exclusion, command
    /// derivation and the command message renames.
    pub fn read(&self, name: &str, root: &Element) -> Result<Dialect, MappingsError> {
        let node = DialectNode::from_element(root)?;

        let enums = self.read_enum_defs(&node.enums)?;
        let enums = resolve_enum_prefixes(enums);

        let messages = self.read_message_defs(&node.messages)?;
        let mut messages = exclude_work_in_progress(messages);

        let commands = match derive_commands(&enums) {
            Ok(commands) => commands,
            Err(MappingsError::MissingDistinguishedEnum) => {
                debug!("dialect {} declares no MavCmd enum; no commands derived", quote(name));
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        rename_command_message_fields(&mut messages);

        debug!(
            "dialect {}: {} enums, {} messages, {} commands",
            quote(name),
            enums.len(),
            messages.len(),
            commands.len()
        );

        Ok(Dialect {
            name: name.to_string(),
            version: parse_optional_number(name, "version", node.version),
            dialect: parse_optional_number(name, "dialect", node.dialect),
            includes: node.includes.iter().map(|s| s.to_string()).collect(),
            enums,
            messages,
            commands,
        })
    }

    fn wrap(&self, text: Option<&str>) -> Vec<String> {
        wrap_text(text, self.options.wrap_width)
    }

    fn read_enum_defs(&self, nodes: &[EnumNode]) -> Result<Vec<EnumDef>, MappingsError> {
        nodes
            .iter()
            .map(|node| {
                trace!("enum {}", node.name);
                Ok(EnumDef {
                    name:          make_class_name(node.name),
                    source_name:   node.name.to_string(),
                    description:   self.wrap(node.description),
                    common_prefix: String::new(),
                    values:        self.read_enum_value_defs(&node.entries)?,
                })
            })
            .collect()
    }

    fn read_enum_value_defs(&self, entries: &[EntryNode]) -> Result<Vec<EnumValueDef>, MappingsError> {
        let mut values: Vec<EnumValueDef> = Vec::with_capacity(entries.len());
        for entry in entries {
            let (value, source_value) = match entry.value {
                Some(text) => {
                    let value = parse_enum_value(text).ok_or_else(|| MappingsError::InvalidNumber {
                        element:   "entry".to_string(),
                        attribute: "value".to_string(),
                        value:     text.to_string(),
                    })?;
                    (value, text.to_string())
                }
                None => {
                    let value = match values.last() {
                        Some(prev) => prev.value.checked_add(1).ok_or_else(|| MappingsError::InvalidNumber {
                            element:   "entry".to_string(),
                            attribute: "value".to_string(),
                            value:     format!("{} + 1", prev.source_value),
                        })?,
                        None => 0,
                    };
                    (value, value.to_string())
                }
            };

            values.push(EnumValueDef {
                source_name: entry.name.to_string(),
                name: entry.name.to_string(),
                value,
                source_value,
                description: self.wrap(entry.description),
                params: self.read_param_defs(entry.name, &entry.params),
                has_location: entry.has_location,
                is_destination: entry.is_destination,
                work_in_progress: entry.wip,
                deprecated: entry.deprecated.as_ref().map(|d| self.read_deprecation(d)),
            });
        }
        Ok(values)
    }

    /// An absent or unparsable `index` falls back to the param's position.
    fn read_param_defs(&self, entry_name: &str, params: &[ParamNode]) -> Vec<EnumParamDef> {
        params
            .iter()
            .enumerate()
            .map(|(position, param)| {
                let fallback = position as u32 + 1;
                let index = match param.index {
                    Some(text) => text.trim().parse::<u32>().unwrap_or_else(|_| {
                        warn!("{}: param index {} is not a number, using {}", entry_name, quote(text), fallback);
                        fallback
                    }),
                    None => fallback,
                };
                EnumParamDef {
                    index,
                    label:       param.label.map(str::to_string),
                    units:       param.units.unwrap_or("").to_string(),
                    min_value:   param.min_value.map(str::to_string),
                    max_value:   param.max_value.map(str::to_string),
                    increment:   param.increment.map(str::to_string),
                    enum_name:   param.enum_name.map(str::to_string),
                    reserved:    param.reserved,
                    description: self.wrap(param.description),
                }
            })
            .collect()
    }

    fn read_deprecation(&self, node: &DeprecatedNode) -> Deprecation {
        Deprecation {
            since:       node.since.unwrap_or("").to_string(),
            replaced_by: node.replaced_by.unwrap_or("").to_string(),
            note:        self.wrap(node.note),
        }
    }

    fn read_message_defs(&self, nodes: &[MessageNode]) -> Result<Vec<MessageDef>, MappingsError> {
        nodes.iter().map(|node| self.read_message_def(node)).collect()
    }

    fn read_message_def(&self, node: &MessageNode) -> Result<MessageDef, MappingsError> {
        // ids are not range-checked; zero, negative and repeated ids are kept
        let id = node.id.trim().parse::<i64>().map_err(|_| MappingsError::InvalidNumber {
            element:   "message".to_string(),
            attribute: "id".to_string(),
            value:     node.id.to_string(),
        })?;

        let mut description = Vec::new();
        let mut deprecated = None;
        let mut fields = Vec::new();
        let mut is_extension = false;
        let mut work_in_progress = false;

        // order matters: fields after <extensions> are extension fields
        for item in &node.items {
            match item {
                MessageItem::Field(field) => {
                    let mut def = FieldDef::new(field.name, field.type_name)
                        .map_err(|source| MappingsError::FieldType {
                            message: node.name.to_string(),
                            field:   field.name.to_string(),
                            source,
                        })?
                        .with_extension(is_extension)
                        .with_units(field.units.unwrap_or(""))
                        .with_description(self.wrap(field.description));
                    if let Some(enum_name) = field.enum_name {
                        def = def.with_enum(enum_name, &make_class_name(enum_name));
                    }
                    fields.push(def);
                }
                MessageItem::Extensions => is_extension = true,
                MessageItem::Wip => work_in_progress = true,
                MessageItem::Description(text) => description = self.wrap(Some(*text)),
                MessageItem::Deprecated(deprecation) => deprecated = Some(self.read_deprecation(deprecation)),
                MessageItem::Other(_) => {}
            }
        }

        let mut message = MessageDef::new(node.name, &make_class_name(node.name), id, fields);
        message.description = description;
        message.deprecated = deprecated;
        message.work_in_progress = work_in_progress;

        trace!(
            "message {} #{}: payload {} bytes, magic {}",
            message.source_name,
            message.id,
            message.payload_length,
            message.magic
        );
        Ok(message)
    }
}

/// Sets the common prefix and trimmed value names of every enum.
pub fn resolve_enum_prefixes(mut enums: Vec<EnumDef>) -> Vec<EnumDef> {
    for enum_def in &mut enums {
        apply_common_prefix(enum_def);
    }
    enums
}

/// Drops messages carrying a work-in-progress marker.
pub fn exclude_work_in_progress(messages: Vec<MessageDef>) -> Vec<MessageDef> {
    messages
        .into_iter()
        .filter(|m| {
            if m.work_in_progress {
                trace!("skipping work-in-progress message {}", m.source_name);
            }
            !m.work_in_progress
        })
        .collect()
}

/// Parses a declared enum value: decimal, `0x` hex, `0b` binary or `2**N`.
pub fn parse_enum_value(text: &str) -> Option<i128> {
    let text = text.trim();
    if let Some(exp) = text.strip_prefix("2**") {
        let exp = exp.trim().parse::<u32>().ok().filter(|e| *e < 127)?;
        return Some(1i128 << exp);
    }
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return i128::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        return i128::from_str_radix(bin, 2).ok();
    }
    text.parse::<i128>().ok()
}

/// Metadata numbers are optional; text that does not parse is dropped.
fn parse_optional_number(dialect: &str, element: &str, text: Option<&str>) -> Option<u32> {
    let text = text?;
    match text.parse::<u32>() {
        Ok(number) => Some(number),
        Err(_) => {
            warn!("dialect {}: ignoring <{}> {}", quote(dialect), element, quote(text));
            None
        }
    }
}
