//! Identifier normalization: case conversion of declared names and the
//! label and command-name transforms used for generated command classes.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::types::EnumDef;

lazy_static! {
    static ref SNAKE_HUMP: Regex = Regex::new(r"[-_]\w").unwrap();
    static ref LABEL_HUMP: Regex = Regex::new(r"\s+(\w)?").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-\S+").unwrap();
    static ref DOT_RUN:    Regex = Regex::new(r"\.\S+").unwrap();
    static ref ORDINAL:    Regex = Regex::new(r"(^|[^0-9])([456])th").unwrap();
    static ref WORD:       Regex = Regex::new(r"\w\S*").unwrap();
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

// `-abc` → `Abc`
fn hump_run(caps: &Captures) -> String {
    upper_first(&caps[0][1..])
}

/// `custom_mode` → `customMode`. Each `-` or `_` is dropped and the
/// following character upper-cased; nothing else changes.
pub fn snake_to_camel(s: &str) -> String {
    SNAKE_HUMP
        .replace_all(s, |caps: &Captures| caps[0].chars().skip(1).flat_map(char::to_uppercase).collect::<String>())
        .into_owned()
}

/// `custom_mode` → `CustomMode`.
pub fn snake_to_pascal(s: &str) -> String {
    upper_first(&snake_to_camel(s))
}

/// Class-style name for a declared enum or message name:
/// `MAV_AUTOPILOT` → `MavAutopilot`.
pub fn make_class_name(source_name: &str) -> String {
    snake_to_pascal(&source_name.to_lowercase())
}

/// Accessor identifier for a free-text parameter label.
///
/// The steps run in a fixed order: lower-case, hump on whitespace, cut at
/// the first `/`, hump hyphen runs (twice) and dot runs (once), then the
/// ordinal and `command` substitutions.
pub fn label_to_identifier(label: &str) -> String {
    let lower = label.to_lowercase();
    let humped = LABEL_HUMP.replace_all(&lower, |caps: &Captures| {
        caps.get(1).map(|m| m.as_str().to_uppercase()).unwrap_or_default()
    });
    let head = humped.split('/').next().unwrap_or_default();

    let head = HYPHEN_RUN.replace_all(head, hump_run);
    let head = HYPHEN_RUN.replace_all(&head, hump_run);
    let head = DOT_RUN.replace_all(&head, hump_run);

    let head = ORDINAL.replace_all(&head, |caps: &Captures| {
        let word = match &caps[2] {
            "4" => "fourth",
            "5" => "fifth",
            _ => "sixth",
        };
        format!("{}{}", &caps[1], word)
    });

    head.replace("command", "cmd")
}

/// Class name of a derived command: `NAV_WAYPOINT` → `NavWaypointCommand`.
pub fn name_to_class_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let titled = WORD.replace_all(&spaced, |caps: &Captures| {
        let mut chars = caps[0].chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
        }
    });
    let mut class_name = titled.replace(' ', "");
    class_name.push_str("Command");
    class_name
}

/// Length of the longest value name across `enums`, for column alignment.
pub fn max_enum_value_name_length(enums: &[EnumDef]) -> usize {
    enums
        .iter()
        .flat_map(|e| e.values.iter())
        .map(|v| v.name.chars().count())
        .max()
        .unwrap_or(0)
}
