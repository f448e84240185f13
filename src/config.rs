//! Layered runtime configuration: built-in defaults, then `cropcast.toml`,
//! then `CROPCAST_`-prefixed environment variables.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Locations of the three serialized artifacts loaded at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactPaths {
    pub dir: String,
    pub minmax_scaler: String,
    pub standard_scaler: String,
    pub model: String,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        ArtifactPaths {
            dir: "artifacts".to_string(),
            minmax_scaler: "minmaxscaler.json".to_string(),
            standard_scaler: "standscaler.json".to_string(),
            model: "model.json".to_string(),
        }
    }
}

impl ArtifactPaths {
    pub fn minmax_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.minmax_scaler)
    }

    pub fn standard_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.standard_scaler)
    }

    pub fn model_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.model)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CropcastConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactPaths,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for CropcastConfig {
    fn default() -> Self {
        CropcastConfig {
            server: ServerConfig::default(),
            artifacts: ArtifactPaths::default(),
            static_dir: default_static_dir(),
        }
    }
}

pub fn load_config() -> Result<CropcastConfig, figment::Error> {
    let figment = Figment::from(Serialized::defaults(CropcastConfig::default()))
        .merge(Toml::file("cropcast.toml"))
        .merge(Env::prefixed("CROPCAST_"));

    let config: CropcastConfig = figment.extract()?;

    if config.artifacts.dir.trim().is_empty() {
        return Err(figment::Error::from(
            "artifacts.dir must be set".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_artifact_dir() {
        let cfg = CropcastConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(
            cfg.artifacts.model_path(),
            PathBuf::from("artifacts/model.json")
        );
        assert_eq!(cfg.static_dir, "static");
    }
}
