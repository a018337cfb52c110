#![allow(dead_code)]

use mavlink_mappings_compiler::tree::Element;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn field(name: &str, type_name: &str) -> Element {
    Element::new("field").with_attr("name", name).with_attr("type", type_name)
}

pub fn enum_field(name: &str, type_name: &str, enum_name: &str) -> Element {
    field(name, type_name).with_attr("enum", enum_name)
}

pub fn description(text: &str) -> Element {
    Element::new("description").with_text(text)
}

pub fn message(id: i64, name: &str, children: Vec<Element>) -> Element {
    Element::new("message")
        .with_attr("id", id.to_string())
        .with_attr("name", name)
        .with_children(children)
}

pub fn entry(name: &str, value: &str) -> Element {
    Element::new("entry").with_attr("name", name).with_attr("value", value)
}

pub fn param(index: u32, label: Option<&str>) -> Element {
    let el = Element::new("param").with_attr("index", index.to_string());
    match label {
        Some(label) => el.with_attr("label", label),
        None => el,
    }
}

pub fn enumeration(name: &str, entries: Vec<Element>) -> Element {
    Element::new("enum").with_attr("name", name).with_children(entries)
}

pub fn dialect(enums: Vec<Element>, messages: Vec<Element>) -> Element {
    Element::new("mavlink")
        .with_child(Element::new("enums").with_children(enums))
        .with_child(Element::new("messages").with_children(messages))
}

pub fn heartbeat() -> Element {
    message(
        0,
        "HEARTBEAT",
        vec![
            description("The heartbeat message shows that a system or component is present and responding."),
            enum_field("type", "uint8_t", "MAV_TYPE"),
            enum_field("autopilot", "uint8_t", "MAV_AUTOPILOT"),
            enum_field("base_mode", "uint8_t", "MAV_MODE_FLAG"),
            field("custom_mode", "uint32_t"),
            enum_field("system_status", "uint8_t", "MAV_STATE"),
            field("mavlink_version", "uint8_t_mavlink_version"),
        ],
    )
}

pub fn sys_status() -> Element {
    let mut children = vec![
        enum_field("onboard_control_sensors_present", "uint32_t", "MAV_SYS_STATUS_SENSOR"),
        enum_field("onboard_control_sensors_enabled", "uint32_t", "MAV_SYS_STATUS_SENSOR"),
        enum_field("onboard_control_sensors_health", "uint32_t", "MAV_SYS_STATUS_SENSOR"),
        field("load", "uint16_t").with_attr("units", "d%"),
        field("voltage_battery", "uint16_t").with_attr("units", "mV"),
        field("current_battery", "int16_t").with_attr("units", "cA"),
        field("battery_remaining", "int8_t").with_attr("units", "%"),
        field("drop_rate_comm", "uint16_t"),
        field("errors_comm", "uint16_t"),
    ];
    for i in 1..=4 {
        children.push(field(&format!("errors_count{}", i), "uint16_t"));
    }
    children.push(Element::new("extensions"));
    children.push(enum_field(
        "onboard_control_sensors_present_extended",
        "uint32_t",
        "MAV_SYS_STATUS_SENSOR_EXTENDED",
    ));
    children.push(field("onboard_control_sensors_enabled_extended", "uint32_t"));
    message(1, "SYS_STATUS", children)
}

pub fn param_value() -> Element {
    message(
        22,
        "PARAM_VALUE",
        vec![
            field("param_id", "char[16]"),
            field("param_value", "float"),
            enum_field("param_type", "uint8_t", "MAV_PARAM_TYPE"),
            field("param_count", "uint16_t"),
            field("param_index", "uint16_t"),
        ],
    )
}

pub fn command_int() -> Element {
    let mut children = vec![
        field("target_system", "uint8_t"),
        field("target_component", "uint8_t"),
        enum_field("frame", "uint8_t", "MAV_FRAME"),
        enum_field("command", "uint16_t", "MAV_CMD"),
        field("current", "uint8_t"),
        field("autocontinue", "uint8_t"),
    ];
    for i in 1..=4 {
        children.push(field(&format!("param{}", i), "float"));
    }
    children.push(field("x", "int32_t"));
    children.push(field("y", "int32_t"));
    children.push(field("z", "float"));
    message(75, "COMMAND_INT", children)
}

pub fn command_long() -> Element {
    let mut children = vec![
        field("target_system", "uint8_t"),
        field("target_component", "uint8_t"),
        enum_field("command", "uint16_t", "MAV_CMD"),
        field("confirmation", "uint8_t"),
    ];
    for i in 1..=7 {
        children.push(field(&format!("param{}", i), "float"));
    }
    message(76, "COMMAND_LONG", children)
}

pub fn mav_cmd() -> Element {
    enumeration(
        "MAV_CMD",
        vec![
            entry("MAV_CMD_NAV_WAYPOINT", "16")
                .with_attr("hasLocation", "true")
                .with_attr("isDestination", "true")
                .with_child(description("Navigate to waypoint."))
                .with_child(param(1, Some("Hold")).with_attr("units", "s").with_attr("minValue", "0"))
                .with_child(param(2, Some("Accept Radius")).with_attr("units", "m"))
                .with_child(param(3, Some("Pass Radius")))
                .with_child(param(4, Some("Yaw")).with_attr("units", "deg"))
                .with_child(param(5, Some("Latitude")))
                .with_child(param(6, Some("Longitude")))
                .with_child(param(7, Some("Altitude")).with_attr("units", "m")),
            entry("MAV_CMD_DO_SOMETHING_COOL", "31000")
                .with_child(param(1, Some("Cool Factor")))
                .with_child(param(2, None))
                .with_child(param(3, Some(""))),
            entry("MAV_CMD_DO_UNFINISHED", "31001").with_child(Element::new("wip")),
        ],
    )
}

pub fn mav_state() -> Element {
    enumeration(
        "MAV_STATE",
        vec![
            entry("MAV_STATE_UNINIT", "0"),
            entry("MAV_STATE_BOOT", "1"),
            entry("MAV_STATE_CALIBRATING", "2"),
            entry("MAV_STATE_STANDBY", "3"),
        ],
    )
}

/// A small dialect shaped like `common.xml`.
pub fn common_dialect() -> Element {
    dialect(
        vec![mav_state(), mav_cmd()],
        vec![heartbeat(), sys_status(), param_value(), command_int(), command_long()],
    )
}
