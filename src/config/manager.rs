use super::{
    agent::AgentConfig,
    fitness::FitnessConfig,
    planner::PlannerConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Default prefix for environment overrides, e.g. `EVOPLANNER_PLANNER__NUM_GENERATIONS=10`.
pub const ENV_PREFIX: &str = "EVOPLANNER";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub planner: PlannerConfig,
    pub fitness: FitnessConfig,
    pub agent: AgentConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PlannerError> {
        self.planner.validate()?;
        self.fitness.validate()?;
        self.agent.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![
            self.planner.to_manifest(),
            self.fitness.to_manifest(),
            self.agent.to_manifest(),
        ]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PlannerError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    /// Loads defaults, then the optional TOML file, then `<PREFIX>_<SECTION>__<FIELD>`
    /// environment variables, each layer overriding the previous one.
    pub fn load_layered<P: AsRef<Path>>(
        &self,
        path: Option<P>,
        env_prefix: &str,
    ) -> Result<(), PlannerError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path.as_ref()).format(::config::FileFormat::Toml),
            );
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        log::debug!("Loaded layered configuration: {:?}", config);
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PlannerError> {
        let toml_str = {
            let config = self.config.read().unwrap_or_else(|e| e.into_inner());
            toml::to_string_pretty(&*config)?
        };
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Applies `f` and keeps the result only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), PlannerError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
