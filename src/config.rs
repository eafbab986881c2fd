use serde::Deserialize;

/// Optional YAML config file; every field has a default so the app starts
/// with no setup.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Simulated fetch latency in milliseconds
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// Starting radius for the gardener search, in km
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,

    #[serde(default)]
    pub vim_mode: bool,

    /// Make the light scan fail as if sensor permission was denied
    #[serde(default)]
    pub simulate_permission_denied: bool,
}

fn default_fetch_delay_ms() -> u64 {
    800
}

fn default_radius_km() -> f64 {
    10.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_delay_ms: default_fetch_delay_ms(),
            default_radius_km: default_radius_km(),
            vim_mode: false,
            simulate_permission_denied: false,
        }
    }
}
