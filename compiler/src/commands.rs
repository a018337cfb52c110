//! Command classes derived from the `MAV_CMD` enum, and the field renames
//! the two command carrier messages need so their wire fields do not
//! collide with the `param1..param7` accessors of those classes.

use crate::{
    error::MappingsError,
    naming::{label_to_identifier, name_to_class_name},
    types::{CommandDef, CommandParamDef, EnumDef, EnumValueDef, MessageDef},
};

/// Class-style name of the enum whose values define commands.
pub const DISTINGUISHED_ENUM: &str = "MavCmd";

pub const COMMAND_INT: &str = "CommandInt";
pub const COMMAND_LONG: &str = "CommandLong";

/// One [`CommandDef`] per value of `MavCmd` that is not work in progress.
///
/// Returns [`MappingsError::MissingDistinguishedEnum`] when the dialect has
/// no such enum.
pub fn derive_commands(enums: &[EnumDef]) -> Result<Vec<CommandDef>, MappingsError> {
    let mav_cmd = enums
        .iter()
        .find(|e| e.name == DISTINGUISHED_ENUM)
        .ok_or(MappingsError::MissingDistinguishedEnum)?;

    Ok(mav_cmd
        .values
        .iter()
        .filter(|value| !value.work_in_progress)
        .map(derive_command)
        .collect())
}

pub fn derive_command(value: &EnumValueDef) -> CommandDef {
    let params = value
        .params
        .iter()
        .filter_map(|param| {
            let label = param.label.as_deref().filter(|l| !l.trim().is_empty())?;
            Some(CommandParamDef {
                index:       param.index,
                name:        label_to_identifier(label),
                label:       label.to_string(),
                units:       param.units.clone(),
                min_value:   param.min_value.clone(),
                max_value:   param.max_value.clone(),
                increment:   param.increment.clone(),
                description: param.description.clone(),
            })
        })
        .collect();

    CommandDef {
        source_name:    value.source_name.clone(),
        name:           value.name.clone(),
        class_name:     name_to_class_name(&value.name),
        value:          value.value,
        description:    value.description.clone(),
        has_location:   value.has_location,
        is_destination: value.is_destination,
        params,
    }
}

/// `param1..param4` gain a leading `_`; `x`, `y`, `z` become
/// `_param5`, `_param6`, `_param7`.
pub fn rename_command_int_fields(message: &mut MessageDef) {
    for field in &mut message.fields {
        let renamed = match field.name.as_str() {
            "param1" | "param2" | "param3" | "param4" => format!("_{}", field.name),
            "x" => "_param5".to_string(),
            "y" => "_param6".to_string(),
            "z" => "_param7".to_string(),
            _ => continue,
        };
        field.name = renamed;
    }
}

/// Every field starting with `param` gains a leading `_`.
pub fn rename_command_long_fields(message: &mut MessageDef) {
    for field in &mut message.fields {
        if field.name.starts_with("param") {
            field.name.insert(0, '_');
        }
    }
}

/// Applies both renames to whichever of the two messages are present.
/// Only field names change; offsets and magic depend on source names.
pub fn rename_command_message_fields(messages: &mut [MessageDef]) {
    for message in messages {
        match message.name.as_str() {
            COMMAND_INT => rename_command_int_fields(message),
            COMMAND_LONG => rename_command_long_fields(message),
            _ => {}
        }
    }
}
