use mavlink_mappings::{
    compile_json, dialect_to_json, magic_numbers_to_json, tree_from_json, MagicNumbers, MappingsError,
    ReaderOptions,
};

const MINIMAL: &str = r#"{
  "name": "mavlink",
  "children": [
    { "name": "version", "text": "3" },
    {
      "name": "enums",
      "children": [
        {
          "name": "enum",
          "attributes": { "name": "MAV_STATE" },
          "children": [
            { "name": "entry", "attributes": { "name": "MAV_STATE_UNINIT", "value": "0" } },
            { "name": "entry", "attributes": { "name": "MAV_STATE_BOOT" } }
          ]
        }
      ]
    },
    {
      "name": "messages",
      "children": [
        {
          "name": "message",
          "attributes": { "id": "0", "name": "HEARTBEAT" },
          "children": [
            { "name": "field", "attributes": { "name": "type", "type": "uint8_t", "enum": "MAV_TYPE" } },
            { "name": "field", "attributes": { "name": "autopilot", "type": "uint8_t", "enum": "MAV_AUTOPILOT" } },
            { "name": "field", "attributes": { "name": "base_mode", "type": "uint8_t", "enum": "MAV_MODE_FLAG" } },
            { "name": "field", "attributes": { "name": "custom_mode", "type": "uint32_t" } },
            { "name": "field", "attributes": { "name": "system_status", "type": "uint8_t", "enum": "MAV_STATE" } },
            { "name": "field", "attributes": { "name": "mavlink_version", "type": "uint8_t_mavlink_version" } }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn compiles_a_json_tree() {
    let dialect = compile_json("minimal", MINIMAL, &ReaderOptions::default()).unwrap();

    assert_eq!(dialect.version, Some(3));
    assert_eq!(dialect.enums[0].name, "MavState");
    assert_eq!(dialect.enums[0].values[1].value, 1);

    let heartbeat = dialect.message_by_id(0).unwrap();
    assert_eq!(heartbeat.name, "Heartbeat");
    assert_eq!(heartbeat.payload_length, 9);
    assert_eq!(heartbeat.magic, 50);
}

#[test]
fn omitted_tree_parts_default_to_empty() {
    let root = tree_from_json(r#"{ "name": "mavlink" }"#).unwrap();
    assert!(root.attributes.is_empty());
    assert!(root.children.is_empty());
    assert_eq!(root.text, None);
}

#[test]
fn dialect_serializes_for_emitters() {
    let dialect = compile_json("minimal", MINIMAL, &ReaderOptions::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&dialect_to_json(&dialect).unwrap()).unwrap();

    assert_eq!(json["name"], "minimal");
    assert_eq!(json["messages"][0]["magic"], 50);
    assert_eq!(json["messages"][0]["fields"][3]["name"], "customMode");
    assert_eq!(json["messages"][0]["fields"][3]["offset"], 0);
    assert_eq!(json["enums"][0]["common_prefix"], "MAV_STATE_");
}

#[test]
fn magic_numbers_serialize_as_an_object() {
    let mut magic_numbers = MagicNumbers::new();
    magic_numbers.insert(0, 50);
    magic_numbers.insert(76, 152);

    let json: serde_json::Value = serde_json::from_str(&magic_numbers_to_json(&magic_numbers).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "0": 50, "76": 152 }));
}

#[test]
fn malformed_json_is_reported() {
    let err = compile_json("broken", "{ not json", &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, MappingsError::Json(_)));
}
