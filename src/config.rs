// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_BASE_URL: &str = "HKTECH_REMOTE_BASE_URL";
const ENV_PATH: &str = "HKTECH_REMOTE_CONFIG_PATH";

/// Where the published dashboard data lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://hktech-dashboard.pages.dev/data";

/// Remote endpoint settings. The request timeout is deliberately not part of
/// this struct; it is the fixed constant in `remote`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_remote_config_from(path: &Path) -> Result<RemoteConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading remote config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_remote_config(&content, ext.as_str())
}

/// Load config using env vars + fallbacks:
/// 1) $HKTECH_REMOTE_BASE_URL (direct override, no file involved)
/// 2) $HKTECH_REMOTE_CONFIG_PATH
/// 3) config/remote.toml
/// 4) config/remote.json
/// 5) compiled-in default
pub fn load_remote_config_default() -> Result<RemoteConfig> {
    if let Ok(url) = std::env::var(ENV_BASE_URL) {
        let url = url.trim();
        if url.is_empty() {
            return Err(anyhow!("HKTECH_REMOTE_BASE_URL is set but empty"));
        }
        return Ok(RemoteConfig {
            base_url: url.to_string(),
        });
    }
    if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_remote_config_from(&pb);
        } else {
            return Err(anyhow!(
                "HKTECH_REMOTE_CONFIG_PATH points to non-existent path"
            ));
        }
    }
    let toml_p = PathBuf::from("config/remote.toml");
    if toml_p.exists() {
        return load_remote_config_from(&toml_p);
    }
    let json_p = PathBuf::from("config/remote.json");
    if json_p.exists() {
        return load_remote_config_from(&json_p);
    }
    Ok(RemoteConfig::default())
}

fn parse_remote_config(s: &str, hint_ext: &str) -> Result<RemoteConfig> {
    // Try TOML first if hinted or content looks like toml.
    let try_toml = hint_ext == "toml" || s.contains("base_url =");
    if try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported remote config format"))
}

fn parse_toml(s: &str) -> Result<RemoteConfig> {
    let v: RemoteConfig = toml::from_str(s)?;
    validate(v)
}

fn parse_json(s: &str) -> Result<RemoteConfig> {
    let v: RemoteConfig = serde_json::from_str(s)?;
    validate(v)
}

fn validate(mut v: RemoteConfig) -> Result<RemoteConfig> {
    v.base_url = v.base_url.trim().to_string();
    if v.base_url.is_empty() {
        return Err(anyhow!("base_url must not be empty"));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn both_formats_parse_and_trim() {
        let toml = r#"base_url = " https://example.com/data ""#;
        let json = r#"{"base_url": "https://example.com/data"}"#;
        assert_eq!(
            parse_toml(toml).unwrap().base_url,
            "https://example.com/data"
        );
        assert_eq!(
            parse_json(json).unwrap().base_url,
            "https://example.com/data"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(parse_toml(r#"base_url = "  ""#).is_err());
        assert!(parse_json(r#"{"base_url": ""}"#).is_err());
    }

    #[test]
    #[serial]
    fn env_base_url_wins_over_everything() {
        env::set_var(ENV_BASE_URL, "https://override.example/data");
        env::set_var(ENV_PATH, "/definitely/not/there.toml");
        let cfg = load_remote_config_default().unwrap();
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_PATH);
        assert_eq!(cfg.base_url, "https://override.example/data");
    }

    #[test]
    #[serial]
    fn missing_config_path_is_an_error() {
        env::remove_var(ENV_BASE_URL);
        env::set_var(ENV_PATH, "/definitely/not/there.toml");
        let res = load_remote_config_default();
        env::remove_var(ENV_PATH);
        assert!(res.is_err());
    }

    #[test]
    #[serial]
    fn falls_back_to_compiled_default() {
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_PATH);
        // Test cwd has no config/ directory.
        let cfg = load_remote_config_default().unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
