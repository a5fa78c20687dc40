use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// Path of the JSON file maintained by the external producer.
    pub file: PathBuf,
}

/// Load settings from `config/server.toml` (optional) and `CELLS_*` environment
/// variables, on top of built-in defaults.
pub fn load_gateway_config() -> anyhow::Result<GatewayConfig> {
    let settings = config::Config::builder()
        .set_default("server.listen", "0.0.0.0:8000")?
        .set_default("dashboard.file", "data/dashboard.json")?
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix("CELLS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
