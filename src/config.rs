use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/state.json";
/// Body weight assumed by the calorie estimate when none is configured.
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub body_weight_kg: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let body_weight_kg = match lookup("APP_BODY_WEIGHT_KG") {
            None => defaults.body_weight_kg,
            Some(raw) => match raw.parse::<f64>() {
                Ok(weight) if weight > 0.0 && weight.is_finite() => weight,
                _ => {
                    warn!("ignoring APP_BODY_WEIGHT_KG={raw:?}, using {DEFAULT_BODY_WEIGHT_KG}");
                    defaults.body_weight_kg
                }
            },
        };

        Self {
            port,
            data_path,
            body_weight_kg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("APP_DATA_PATH", "/tmp/x.json"),
            ("APP_BODY_WEIGHT_KG", "82.5"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/x.json"));
        assert_eq!(config.body_weight_kg, 82.5);
    }

    #[test]
    fn rejects_non_positive_weight() {
        let config = Config::from_lookup(lookup_from(&[("APP_BODY_WEIGHT_KG", "-3")]));
        assert_eq!(config.body_weight_kg, DEFAULT_BODY_WEIGHT_KG);
    }
}
