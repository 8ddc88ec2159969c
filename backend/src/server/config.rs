//! HTTP server settings read from the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use mockable::{DefaultEnv, Env};
use tracing::warn;

/// Listening port variable.
pub const PORT_ENV: &str = "PORT";
/// Listening address variable.
pub const BIND_HOST_ENV: &str = "BIND_HOST";
/// Request body limit variable.
pub const MAX_BODY_BYTES_ENV: &str = "MAX_BODY_BYTES";
/// Optional seed for reproducible synthetic data.
pub const RNG_SEED_ENV: &str = "CASHFLOW_RNG_SEED";

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_MAX_BODY_BYTES: usize = 65_536;

/// Errors raised while validating server configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ServerConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    /// Upper bound on JSON request bodies.
    pub max_body_bytes: usize,
    /// Seed for the synthetic data source; entropy is used when absent.
    pub rng_seed: Option<u64>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(DEFAULT_BIND_HOST, DEFAULT_PORT),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            rng_seed: None,
        }
    }
}

/// Build server settings from environment variables.
///
/// Unset or blank variables fall back to their defaults.
///
/// # Errors
/// Returns [`ServerConfigError::InvalidEnv`] when a variable cannot be parsed.
pub fn server_settings_from_env<E: Env>(env: &E) -> Result<ServerSettings, ServerConfigError> {
    let port = parse_var(env, PORT_ENV, "a port number between 1 and 65535", |raw| {
        raw.parse::<u16>().ok().filter(|port| *port > 0)
    })?
    .unwrap_or(DEFAULT_PORT);

    let host = parse_var(env, BIND_HOST_ENV, "an IP address", |raw| {
        raw.parse::<IpAddr>().ok()
    })?
    .unwrap_or(DEFAULT_BIND_HOST);

    let max_body_bytes = parse_var(env, MAX_BODY_BYTES_ENV, "a positive byte count", |raw| {
        raw.parse::<usize>().ok().filter(|limit| *limit > 0)
    })?
    .unwrap_or(DEFAULT_MAX_BODY_BYTES);

    let rng_seed = parse_var(env, RNG_SEED_ENV, "an unsigned 64-bit integer", |raw| {
        raw.parse::<u64>().ok()
    })?;

    Ok(ServerSettings {
        bind_addr: SocketAddr::new(host, port),
        max_body_bytes,
        rng_seed,
    })
}

/// Build server settings from the real process environment.
///
/// # Errors
/// Same as [`server_settings_from_env`].
pub fn server_settings_from_process() -> Result<ServerSettings, ServerConfigError> {
    server_settings_from_env(&DefaultEnv::new())
}

fn parse_var<E, T>(
    env: &E,
    name: &'static str,
    expected: &'static str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<Option<T>, ServerConfigError>
where
    E: Env,
{
    let Some(value) = env.string(name) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!(name, "blank environment variable ignored");
        return Ok(None);
    }
    parse(trimmed)
        .map(Some)
        .ok_or(ServerConfigError::InvalidEnv {
            name,
            value,
            expected,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;
    use std::collections::HashMap;

    fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| vars.get(key).cloned());
        env
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = server_settings_from_env(&mock_env(&[])).expect("defaults are valid");
        assert_eq!(settings, ServerSettings::default());
        assert_eq!(settings.bind_addr.to_string(), "0.0.0.0:3001");
    }

    #[rstest]
    fn explicit_values_override_defaults() {
        let env = mock_env(&[
            (PORT_ENV, "8080"),
            (BIND_HOST_ENV, "127.0.0.1"),
            (MAX_BODY_BYTES_ENV, "1024"),
            (RNG_SEED_ENV, "99"),
        ]);
        let settings = server_settings_from_env(&env).expect("valid settings");
        assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(settings.max_body_bytes, 1024);
        assert_eq!(settings.rng_seed, Some(99));
    }

    #[rstest]
    fn blank_values_fall_back() {
        let env = mock_env(&[(PORT_ENV, "  "), (RNG_SEED_ENV, "")]);
        let settings = server_settings_from_env(&env).expect("blank is unset");
        assert_eq!(settings.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(settings.rng_seed, None);
    }

    #[rstest]
    fn process_environment_yields_usable_settings() {
        // Only the shape is checked; the host environment may set any of the
        // variables.
        if let Ok(settings) = server_settings_from_process() {
            assert!(settings.max_body_bytes > 0);
            assert!(settings.bind_addr.port() > 0);
        }
    }

    #[rstest]
    #[case(PORT_ENV, "http")]
    #[case(PORT_ENV, "0")]
    #[case(PORT_ENV, "70000")]
    #[case(BIND_HOST_ENV, "localhost:80")]
    #[case(MAX_BODY_BYTES_ENV, "0")]
    #[case(MAX_BODY_BYTES_ENV, "-5")]
    #[case(RNG_SEED_ENV, "seed")]
    fn invalid_values_are_rejected(#[case] name: &'static str, #[case] value: &str) {
        let err = server_settings_from_env(&mock_env(&[(name, value)]))
            .expect_err("invalid value must fail");
        let ServerConfigError::InvalidEnv {
            name: reported,
            value: raw,
            ..
        } = err;
        assert_eq!(reported, name);
        assert_eq!(raw, value);
    }
}
