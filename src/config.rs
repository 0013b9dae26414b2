use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory containing one `<device>_<YYYYMMDD>_<HHMMSS>` folder per test run.
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Max number of devices a single /api/compare request may align.
    #[serde(default = "default_max_compare_devices")]
    pub max_compare_devices: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_compare_devices: default_max_compare_devices(),
        }
    }
}

fn default_max_compare_devices() -> usize {
    6
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.artifacts.root.is_empty(),
            "artifacts.root must be non-empty"
        );
        anyhow::ensure!(
            self.limits.max_compare_devices > 0,
            "limits.max_compare_devices must be > 0, got {}",
            self.limits.max_compare_devices
        );
        Ok(())
    }
}
