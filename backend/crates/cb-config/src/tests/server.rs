use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("CB_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("server.port"));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("CB_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_max_connections_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("CB_SERVER_MAX_CONNECTIONS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_wildcard_host_when_base_url_then_uses_loopback() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::set("CB_SERVER_HOST", "0.0.0.0");
    let _port = EnvGuard::set("CB_SERVER_PORT", "8123");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.base_url(), eq("http://127.0.0.1:8123"));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("CB_DATABASE_PATH", "/etc/cookbook.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("database.path"));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("CB_DATABASE_PATH", "../cookbook.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
