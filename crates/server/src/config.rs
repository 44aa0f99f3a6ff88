use billet::PageSize;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "BILLET_SERVER_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config/default";
const ENV_PREFIX: &str = "BILLET_SERVER";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub output: OutputConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Scratch directory for rendered files. Files never outlive their request.
    pub dir: PathBuf,
    pub page_size: PageSize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            output: OutputConfig {
                dir: std::env::temp_dir(),
                page_size: PageSize::A4,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `BILLET_SERVER_CONFIG`
    /// (or `config/default.toml` when present), then `BILLET_SERVER__*`
    /// environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from(Some(Path::new(&path))),
            _ => Self::load_from(None),
        }
    }

    /// Loads configuration from an explicit file, falling back to the
    /// default file location when `file` is `None`.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = Config::default();
        let mut builder = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("output.dir", defaults.output.dir.to_string_lossy().into_owned())?
            .set_default("output.page_size", "A4")?
            .set_default("cors.allowed_origins", defaults.cors.allowed_origins)?;

        builder = match file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        );

        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9100\n\n[output]\npage_size = \"Letter\"").unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.output.page_size, PageSize::Letter);
        assert_eq!(config.cors.allowed_origins, ["http://localhost:3000"]);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(Config::default().bind_address(), "127.0.0.1:8000");
    }
}
