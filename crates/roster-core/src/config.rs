use crate::error::Result;
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// YAML seed file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn roster(&self) -> Result<Roster> {
        match &self.seed {
            Some(path) => crate::seed::load_roster(path),
            None => Ok(Roster::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_fields_absent() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.server.addr(), "0.0.0.0:8000");
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn partial_server_section_keeps_other_defaults() {
        let cfg: Config = serde_yaml::from_str("server:\n  port: 9001\n").unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.host, "0.0.0.0");
    }

    #[test]
    fn roster_uses_seed_file_when_set() {
        let dir = TempDir::new().unwrap();
        let seed = dir.path().join("seed.yaml");
        std::fs::write(
            &seed,
            "- name: Robotics\n  description: Build robots\n  schedule: Mondays\n  max_participants: 8\n",
        )
        .unwrap();
        let cfg_path = dir.path().join("roster.yaml");
        std::fs::write(&cfg_path, format!("seed: {}\n", seed.display())).unwrap();

        let cfg = Config::load(&cfg_path).unwrap();
        let roster = cfg.roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.get("Robotics").is_some());
    }

    #[test]
    fn roster_falls_back_to_builtin_catalog() {
        let roster = Config::default().roster().unwrap();
        assert!(roster.get("Chess Club").is_some());
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
