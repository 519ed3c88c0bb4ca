use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Configuration {
    pub application: ApplicationConfigs,
    pub relay: RelayConfigs,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationConfigs {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct RelayConfigs {
    /// Decoded-size cap for inline media payloads
    pub max_attachment_bytes: u64,
    /// How often the background reporter logs counter snapshots
    pub stats_report_interval_secs: u64,
}

pub fn get_config() -> Result<Configuration, config::ConfigError> {
    // initialise config reader
    let configs = config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
        .build()?;

    // convert the config values to config type
    configs.try_deserialize::<Configuration>()
}
