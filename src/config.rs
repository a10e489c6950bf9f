//! Configuration resolution: TOML file merged with environment variables.
//!
//! File values win over `SUPABASE_URL` / `SUPABASE_SERVICE_KEY` from the
//! environment; bucket and table names default to `"blog"` and `"posts"`.
//! Resolution fails fast when the URL or service key is missing from both
//! sources.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::error::{Error, Result};

/// Read when no explicit `--config` path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

const SAMPLE_CONFIG: &str = r#"supabase_url = "https://xxxxx.supabase.co"
supabase_service_key = "service_role_key"
bucket = "blog"
"#;

/// Raw, partial configuration as written in the TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub supabase_url: Option<String>,
    pub supabase_service_key: Option<String>,
    pub bucket: Option<String>,
    pub table: Option<String>,
}

/// Fully resolved configuration handed to the backend client.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub supabase_url: String,
    pub service_key: String,
    pub bucket: String,
    pub table: String,
}

/// Resolves the configuration for one invocation.
///
/// An explicit `cli_path` must exist and parse. Without one, the default
/// `./config.toml` is read when present; otherwise resolution is env-only.
pub fn load_config(cli_path: Option<&Path>) -> Result<ResolvedConfig> {
    let file_cfg = match cli_path {
        Some(path) => read_config(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                read_config(default)?
            } else {
                FileConfig::default()
            }
        }
    };

    let supabase_url = file_cfg
        .supabase_url
        .filter(|v| !v.is_empty())
        .or_else(|| env::var("SUPABASE_URL").ok())
        .filter(|v| !v.is_empty());
    let service_key = file_cfg
        .supabase_service_key
        .filter(|v| !v.is_empty())
        .or_else(|| env::var("SUPABASE_SERVICE_KEY").ok())
        .filter(|v| !v.is_empty());

    let (Some(supabase_url), Some(service_key)) = (supabase_url, service_key) else {
        error!("Supabase URL or service key missing from both config file and environment");
        return Err(Error::Config("Missing Supabase credentials".into()));
    };

    let resolved = ResolvedConfig {
        supabase_url,
        service_key,
        bucket: file_cfg.bucket.unwrap_or_else(|| "blog".into()),
        table: file_cfg.table.unwrap_or_else(|| "posts".into()),
    };
    info!(
        supabase_url = %resolved.supabase_url,
        bucket = %resolved.bucket,
        table = %resolved.table,
        "Config resolved"
    );
    Ok(resolved)
}

fn read_config(path: &Path) -> Result<FileConfig> {
    info!(config_path = ?path, "Loading configuration from file");

    let raw = fs::read_to_string(path).map_err(|e| {
        error!(error = ?e, config_path = ?path, "Failed to read config file");
        Error::Io {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    toml::from_str(&raw).map_err(|e| {
        error!(error = ?e, config_path = ?path, "Failed to parse config TOML");
        Error::Config(format!("Failed to parse config TOML: {e}"))
    })
}

/// Writes a sample `./config.toml`, refusing to clobber an existing one.
/// Returns the written path.
pub fn gen_config() -> Result<String> {
    let path = DEFAULT_CONFIG_PATH;
    if Path::new(path).exists() {
        return Err(Error::Config("Config already exists".into()));
    }

    fs::write(path, SAMPLE_CONFIG).map_err(|e| Error::Io {
        path: path.to_string(),
        source: e,
    })?;
    info!(config_path = %path, "Wrote sample config");
    Ok(path.to_string())
}
