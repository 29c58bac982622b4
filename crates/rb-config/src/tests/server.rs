use crate::ServerConfig;

#[test]
fn given_default_server_config_when_validated_then_passes() {
    assert!(ServerConfig::default().validate().is_ok());
}

#[test]
fn given_port_zero_when_validated_then_passes_as_auto_assign() {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn given_privileged_port_when_validated_then_fails() {
    let config = ServerConfig {
        port: 80,
        ..ServerConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_empty_host_when_validated_then_fails() {
    let config = ServerConfig {
        host: "  ".to_string(),
        ..ServerConfig::default()
    };

    assert!(config.validate().is_err());
}
