use dotenv::dotenv;
use eyre::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::{env, fs};

/// Application configuration read from `config.toml`.
///
/// RPC endpoints are keyed by network id; a value of the form `env:VAR` is
/// resolved from the environment at load time so keys stay out of the file.
#[derive(Debug, Deserialize)]
pub struct Config {
    rpc_endpoints: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Result<Self> {
        dotenv().ok();
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn rpc_url(&self, network_id: u32) -> Result<String> {
        let url = self
            .rpc_endpoints
            .get(&network_id.to_string())
            .ok_or_else(|| eyre::eyre!("no RPC endpoint configured for network {}", network_id))?;

        if let Some(var) = url.strip_prefix("env:") {
            env::var(var).map_err(|_| eyre::eyre!("environment variable {} not set", var))
        } else {
            Ok(url.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_urls_pass_through() {
        let config: Config = toml::from_str(
            r#"
            [rpc_endpoints]
            1 = "http://localhost:8545"
            "#,
        )
        .unwrap();
        assert_eq!(config.rpc_url(1).unwrap(), "http://localhost:8545");
    }

    #[test]
    fn missing_network_is_an_error() {
        let config: Config = toml::from_str("[rpc_endpoints]\n").unwrap();
        assert!(config.rpc_url(5).is_err());
    }

    #[test]
    fn env_indirection_resolves() {
        let config: Config = toml::from_str(
            r#"
            [rpc_endpoints]
            1 = "env:BATCHER_TEST_RPC"
            "#,
        )
        .unwrap();
        unsafe { env::set_var("BATCHER_TEST_RPC", "http://example:8545") };
        assert_eq!(config.rpc_url(1).unwrap(), "http://example:8545");
    }
}
