use crate::domain::value_objects::DistanceUnit;
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BACKEND: &str = "standard";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Geocoding backend
    pub backend: String,
    pub geocoder_url: String,
    pub geocoder_timeout_secs: u64,
    pub geocoder_max_results: usize,
    pub user_agent: String,

    // Distance computations
    pub input_unit: DistanceUnit,
    pub output_unit: DistanceUnit,

    // Spatial reference applied to created geometries
    pub srid: Option<u32>,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_timeout_secs: 10,
            geocoder_max_results: 5,
            user_agent: default_user_agent(),
            input_unit: DistanceUnit::Mile,
            output_unit: DistanceUnit::Mile,
            srid: None,
            debug: false,
        }
    }
}

impl Config {
    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unparsable numbers fall back to their defaults; unknown unit names
    /// are an error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = lookup("LOCREF_BACKEND").unwrap_or_else(|| DEFAULT_BACKEND.to_string());

        let geocoder_url =
            lookup("LOCREF_GEOCODER_URL").unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string());

        let geocoder_timeout_secs = lookup("LOCREF_GEOCODER_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .unwrap_or(10);

        let geocoder_max_results = lookup("LOCREF_GEOCODER_MAX_RESULTS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .unwrap_or(5);

        let user_agent = lookup("LOCREF_USER_AGENT").unwrap_or_else(default_user_agent);

        let input_unit = parse_unit(&lookup, "LOCREF_INPUT_UNIT")?;
        let output_unit = parse_unit(&lookup, "LOCREF_OUTPUT_UNIT")?;

        let srid = lookup("LOCREF_SRID").and_then(|v| v.trim().parse().ok());

        let debug = lookup("DEBUG").is_some();

        Ok(Config {
            backend,
            geocoder_url,
            geocoder_timeout_secs,
            geocoder_max_results,
            user_agent,
            input_unit,
            output_unit,
            srid,
            debug,
        })
    }

    pub fn geocoder_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoder_timeout_secs)
    }
}

fn default_user_agent() -> String {
    format!("locref/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_unit<F>(lookup: &F, key: &str) -> anyhow::Result<DistanceUnit>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => v
            .parse()
            .with_context(|| format!("invalid {} '{}'", key, v)),
        None => Ok(DistanceUnit::default()),
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> anyhow::Result<Config> {
    Config::from_lookup(|key| std::env::var(key).ok())
}
