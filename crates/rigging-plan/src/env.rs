//! Environment resolution: effective host, port, and environment file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::mode::Mode;

/// Port the development server binds to, regardless of mode.
pub const DEV_SERVER_PORT: u16 = 8000;

/// Fixed LAN address used when the network override is enabled without an
/// explicit address.
pub const LAN_HOST: &str = "192.168.1.83";

const LOCALHOST: &str = "localhost";

/// Network host override supplied by the invoker.
///
/// Deserializes from either a boolean (`true` selects the fixed LAN
/// address) or an explicit address string, matching the invocation
/// contract of the original tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkOverride {
    Enabled(bool),
    Address(String),
}

/// Invocation-time overrides. Read-only for the duration of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overrides {
    #[serde(default)]
    pub network: Option<NetworkOverride>,

    /// Whether the bundle-composition analyzer stage is registered.
    /// Always on in practice; kept as a switch for parity with the
    /// invocation contract.
    #[serde(default = "default_true")]
    pub analyze: bool,
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            network: None,
            analyze: true,
        }
    }
}

/// Resolved host/port/env-file triple. Pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub host: String,
    pub port: u16,
    pub env_file: PathBuf,
}

impl Environment {
    /// Resolve the effective environment for `mode`.
    ///
    /// Host selection: absent → `localhost`; `true` → the fixed LAN
    /// address; explicit string → that string verbatim. No address
    /// validation is performed; malformed addresses propagate unchanged.
    /// A `false` override behaves like an absent one.
    pub fn resolve(mode: Mode, network: Option<&NetworkOverride>) -> Self {
        let host = match network {
            Some(NetworkOverride::Enabled(true)) => LAN_HOST.to_string(),
            Some(NetworkOverride::Address(addr)) => addr.clone(),
            Some(NetworkOverride::Enabled(false)) | None => LOCALHOST.to_string(),
        };

        Self {
            host,
            port: DEV_SERVER_PORT,
            env_file: PathBuf::from(mode.settings().env_file),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_override_yields_localhost() {
        let env = Environment::resolve(Mode::Development, None);
        assert_eq!(env.host, "localhost");
        assert_eq!(env.port, DEV_SERVER_PORT);
    }

    #[test]
    fn enabled_override_yields_lan_host() {
        for mode in [Mode::Development, Mode::Production] {
            let env = Environment::resolve(mode, Some(&NetworkOverride::Enabled(true)));
            assert_eq!(env.host, LAN_HOST);
        }
    }

    #[test]
    fn disabled_override_behaves_like_absent() {
        let env = Environment::resolve(Mode::Development, Some(&NetworkOverride::Enabled(false)));
        assert_eq!(env.host, "localhost");
    }

    #[test]
    fn explicit_address_passes_through_verbatim() {
        let env = Environment::resolve(
            Mode::Production,
            Some(&NetworkOverride::Address("10.0.0.5".into())),
        );
        assert_eq!(env.host, "10.0.0.5");

        // Malformed addresses are not this component's problem.
        let env = Environment::resolve(
            Mode::Development,
            Some(&NetworkOverride::Address("not a host".into())),
        );
        assert_eq!(env.host, "not a host");
    }

    #[test]
    fn env_file_is_selected_by_mode() {
        let dev = Environment::resolve(Mode::Development, None);
        let prod = Environment::resolve(Mode::Production, None);
        assert_eq!(dev.env_file, PathBuf::from(".env.dev"));
        assert_eq!(prod.env_file, PathBuf::from(".env.stage"));
    }

    #[test]
    fn network_override_deserializes_from_bool_or_string() {
        let enabled: NetworkOverride = serde_json::from_str("true").unwrap();
        assert_eq!(enabled, NetworkOverride::Enabled(true));

        let addr: NetworkOverride = serde_json::from_str("\"10.0.0.5\"").unwrap();
        assert_eq!(addr, NetworkOverride::Address("10.0.0.5".into()));
    }

    #[test]
    fn overrides_default_to_analyze_on() {
        let overrides = Overrides::default();
        assert!(overrides.analyze);
        assert!(overrides.network.is_none());

        let parsed: Overrides = serde_json::from_str("{}").unwrap();
        assert!(parsed.analyze);
    }
}
