use std::path::PathBuf;

use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Server settings.
///
/// Read from the `HOST`, `PORT`, `FLEET_PATH` and `JITTER_SEED` environment
/// variables. A first command line argument takes precedence over
/// `FLEET_PATH`. Without a fleet path the built-in demo fleet is served.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub fleet_path: Option<PathBuf>,
    pub jitter_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            fleet_path: None,
            jitter_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let args: Vec<_> = std::env::args().skip(1).collect();
        Self::from_lookup(|key| std::env::var(key).ok(), &args)
    }

    pub fn from_lookup<F>(lookup: F, args: &[String]) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(err) => warn!("Ignoring invalid PORT {port}: {err}"),
            }
        }
        if let Some(seed) = lookup("JITTER_SEED") {
            match seed.parse() {
                Ok(seed) => config.jitter_seed = Some(seed),
                Err(err) => warn!("Ignoring invalid JITTER_SEED {seed}: {err}"),
            }
        }
        config.fleet_path = args
            .first()
            .cloned()
            .or_else(|| lookup("FLEET_PATH"))
            .map(PathBuf::from);
        config
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[]), &[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.address(), "0.0.0.0:8000");
    }

    #[test]
    fn environment_overrides() {
        let config = Config::from_lookup(
            lookup(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "8080"),
                ("FLEET_PATH", "fleet.zip"),
                ("JITTER_SEED", "42"),
            ]),
            &[],
        );
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.fleet_path, Some(PathBuf::from("fleet.zip")));
        assert_eq!(config.jitter_seed, Some(42));
    }

    #[test]
    fn argument_wins_over_fleet_path() {
        let args = vec!["other.zip".to_string()];
        let config = Config::from_lookup(lookup(&[("FLEET_PATH", "fleet.zip")]), &args);
        assert_eq!(config.fleet_path, Some(PathBuf::from("other.zip")));
    }

    #[test]
    fn invalid_port_keeps_default() {
        let config = Config::from_lookup(lookup(&[("PORT", "http")]), &[]);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
