//! CLI configuration.
//!
//! The roster, the blob path, and the key-derivation parameters all come
//! from a TOML file; nothing is baked into the binary. The salt default is
//! shared by every deployment that does not override it -- production setups
//! should set `security.salt` to a per-deployment random value.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use manito_core::crypto::DEFAULT_ITERATIONS;

/// On-disk blob filename used when `storage.path` is not configured.
pub const DEFAULT_BLOB_FILENAME: &str = "manito_pairs.enc";

/// Deployment-wide default salt (see the module docs caveat).
pub const DEFAULT_SALT: &str = "manito-fixed-salt-v1";

#[derive(Debug, Serialize, Deserialize)]
pub struct ManitoConfig {
    pub roster: RosterSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub security: SecuritySection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RosterSection {
    pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_blob_path")]
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SecuritySection {
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_salt")]
    pub salt: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            path: default_blob_path(),
        }
    }
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            salt: default_salt(),
        }
    }
}

fn default_blob_path() -> String {
    DEFAULT_BLOB_FILENAME.to_string()
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_salt() -> String {
    DEFAULT_SALT.to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<ManitoConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Resolve the blob path from config, relative paths anchored at the config
/// file's directory so the tool behaves the same from any working directory.
pub fn resolve_blob_path(config_path: &Path, config: &ManitoConfig) -> PathBuf {
    let configured = PathBuf::from(&config.storage.path);
    if configured.is_absolute() {
        return configured;
    }
    match config_path.parent() {
        Some(parent) => parent.join(configured),
        None => configured,
    }
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("manito"));
        }
    }
    Ok(home_dir()?.join(".config").join("manito"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [roster]
            names = ["Ana", "Ben", "Cleo"]

            [storage]
            path = "/var/lib/manito/pairs.enc"

            [security]
            iterations = 250000
            salt = "deployment-salt-42"
        "#;
        let config: ManitoConfig = toml::from_str(toml).expect("parse config");
        assert_eq!(config.roster.names, vec!["Ana", "Ben", "Cleo"]);
        assert_eq!(config.storage.path, "/var/lib/manito/pairs.enc");
        assert_eq!(config.security.iterations, 250_000);
        assert_eq!(config.security.salt, "deployment-salt-42");
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let toml = r#"
            [roster]
            names = ["Ana", "Ben"]
        "#;
        let config: ManitoConfig = toml::from_str(toml).expect("parse config");
        assert_eq!(config.storage.path, DEFAULT_BLOB_FILENAME);
        assert_eq!(config.security.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.security.salt, DEFAULT_SALT);
    }

    #[test]
    fn test_missing_roster_section_is_an_error() {
        let toml = r#"
            [storage]
            path = "pairs.enc"
        "#;
        assert!(toml::from_str::<ManitoConfig>(toml).is_err());
    }

    #[test]
    fn test_relative_blob_path_resolves_beside_config() {
        let toml = r#"
            [roster]
            names = ["Ana", "Ben"]

            [storage]
            path = "pairs.enc"
        "#;
        let config: ManitoConfig = toml::from_str(toml).expect("parse config");
        let resolved = resolve_blob_path(Path::new("/etc/manito/config.toml"), &config);
        assert_eq!(resolved, PathBuf::from("/etc/manito/pairs.enc"));
    }

    #[test]
    fn test_absolute_blob_path_kept_as_is() {
        let toml = r#"
            [roster]
            names = ["Ana", "Ben"]

            [storage]
            path = "/data/pairs.enc"
        "#;
        let config: ManitoConfig = toml::from_str(toml).expect("parse config");
        let resolved = resolve_blob_path(Path::new("/etc/manito/config.toml"), &config);
        assert_eq!(resolved, PathBuf::from("/data/pairs.enc"));
    }

    #[test]
    fn test_xdg_config_dir_uses_env() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("XDG_CONFIG_HOME", "/tmp/manito-config-test");

        let config_dir = xdg_config_dir().expect("config dir");
        assert_eq!(
            config_dir,
            PathBuf::from("/tmp/manito-config-test").join("manito")
        );

        std::env::remove_var("XDG_CONFIG_HOME");
    }
}
