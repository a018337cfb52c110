mod common;

use common::*;
use mavlink_mappings_compiler::{
    compile_dialect,
    naming::{
        label_to_identifier, make_class_name, max_enum_value_name_length, name_to_class_name, snake_to_camel,
        snake_to_pascal,
    },
    ReaderOptions,
};

#[test]
fn snake_case_conversions() {
    assert_eq!(snake_to_camel("custom_mode"), "customMode");
    assert_eq!(snake_to_camel("onboard_control_sensors_present"), "onboardControlSensorsPresent");
    assert_eq!(snake_to_camel("errors_count1"), "errorsCount1");
    assert_eq!(snake_to_camel("param1"), "param1");
    assert_eq!(snake_to_camel("x"), "x");
    assert_eq!(snake_to_pascal("custom_mode"), "CustomMode");
}

#[test]
fn class_names_from_declared_names() {
    assert_eq!(make_class_name("HEARTBEAT"), "Heartbeat");
    assert_eq!(make_class_name("MAV_AUTOPILOT"), "MavAutopilot");
    assert_eq!(make_class_name("COMMAND_INT"), "CommandInt");
    assert_eq!(make_class_name("MAV_CMD"), "MavCmd");
    assert_eq!(make_class_name("GPS2_RAW"), "Gps2Raw");
}

#[test]
fn labels_become_camel_identifiers() {
    assert_eq!(label_to_identifier("Cool Factor"), "coolFactor");
    assert_eq!(label_to_identifier("Hold"), "hold");
    assert_eq!(label_to_identifier("Accept Radius"), "acceptRadius");
    assert_eq!(label_to_identifier("Trailing "), "trailing");
}

#[test]
fn labels_are_cut_at_the_first_slash() {
    assert_eq!(label_to_identifier("Latitude/X"), "latitude");
    assert_eq!(label_to_identifier("Target Speed/Rate"), "targetSpeed");
}

#[test]
fn hyphen_and_dot_runs_hump() {
    assert_eq!(label_to_identifier("Yaw-rate"), "yawRate");
    assert_eq!(label_to_identifier("Use-current-location"), "useCurrentLocation");
    assert_eq!(label_to_identifier("Max. Speed"), "maxSpeed");
}

#[test]
fn ordinal_and_command_substitutions() {
    assert_eq!(label_to_identifier("4th Dimension"), "fourthDimension");
    assert_eq!(label_to_identifier("5th Dimension"), "fifthDimension");
    assert_eq!(label_to_identifier("6th Dimension"), "sixthDimension");
    assert_eq!(label_to_identifier("14th Day"), "14thDay");
    assert_eq!(label_to_identifier("Command Id"), "cmdId");
    // humping runs first, so the capitalized word is left alone
    assert_eq!(label_to_identifier("4th Command Dimension"), "fourthCommandDimension");
}

#[test]
fn command_class_names() {
    assert_eq!(name_to_class_name("NAV_WAYPOINT"), "NavWaypointCommand");
    assert_eq!(name_to_class_name("DO_SOMETHING_COOL"), "DoSomethingCoolCommand");
    assert_eq!(name_to_class_name("MAV_TEST_1_FIRST"), "MavTest1FirstCommand");
    assert_eq!(name_to_class_name("do_set_mode"), "DoSetModeCommand");
}

#[test]
fn longest_value_name_across_enums() {
    let dialect = compile_dialect("common", &common_dialect(), &ReaderOptions::default()).unwrap();
    assert_eq!(max_enum_value_name_length(&dialect.enums), "DO_SOMETHING_COOL".len());
    assert_eq!(max_enum_value_name_length(&[]), 0);
}
