use crate::LogLevel;
use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::Config;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serial_test::serial;

#[test]
fn given_known_level_names_when_parse_then_matching_filter() {
    assert_that!(LogLevel::parse("debug").0, eq(LevelFilter::Debug));
    assert_that!(LogLevel::parse(" WARN ").0, eq(LevelFilter::Warn));
    assert_that!(LogLevel::parse("off").0, eq(LevelFilter::Off));
}

#[test]
fn given_unknown_level_name_when_parse_then_falls_back_to_info() {
    // When
    let level = LogLevel::parse("verbose");

    // Then
    assert_that!(level.0, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_level_in_toml_and_env_when_load_then_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nlevel = \"warn\"\n");
    let _level = EnvGuard::set("CB_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
}
