//! Common-prefix resolution for enum value names, so that `MAV_TEST_FIRST`
//! in enum `MAV_TEST` becomes `FIRST`.

use crate::types::EnumDef;

fn longest_common_prefix<'a>(names: &[&'a str]) -> &'a str {
    let Some((first, rest)) = names.split_first() else {
        return "";
    };
    let mut len = first.len();
    for name in rest {
        len = first
            .char_indices()
            .zip(name.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8())
            .min(len);
    }
    &first[..len]
}

/// Prefix to cut from the value names of enum `enum_name`.
///
/// The longest common prefix is trimmed back to its last `_`. A prefix
/// reaching past `enum_name_` is clamped to `enum_name_`, and an empty
/// one falls back to `enum_name_`.
pub fn common_prefix(enum_name: &str, value_names: &[&str]) -> String {
    let shared = longest_common_prefix(value_names);
    let trimmed = match shared.rfind('_') {
        Some(pos) => &shared[..=pos],
        None => "",
    };

    let enum_prefix = format!("{}_", enum_name);
    if trimmed.is_empty() || (trimmed.starts_with(enum_name) && trimmed.len() > enum_prefix.len()) {
        enum_prefix
    } else {
        trimmed.to_string()
    }
}

/// Short identifier for `source_name` under `prefix`.
///
/// Names that would start with a digit, or come out empty, keep the full
/// source name.
pub fn strip_prefix(source_name: &str, prefix: &str) -> String {
    let short = source_name.strip_prefix(prefix).unwrap_or(source_name);
    match short.chars().next() {
        Some(c) if !c.is_ascii_digit() => short.to_string(),
        _ => source_name.to_string(),
    }
}

/// Resolves the enum's common prefix and sets every value's `name` from
/// its source name. Running it again yields the same names.
pub fn apply_common_prefix(enum_def: &mut EnumDef) {
    let names: Vec<&str> = enum_def.values.iter().map(|v| v.source_name.as_str()).collect();
    let prefix = common_prefix(&enum_def.source_name, &names);

    for value in &mut enum_def.values {
        value.name = strip_prefix(&value.source_name, &prefix);
    }
    enum_def.common_prefix = prefix;
}
