use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "DECKHAND_CONFIG";
pub const STORE_DIR_ENV: &str = "DECKHAND_STORE_DIR";
pub const SHUFFLE_ENV: &str = "DECKHAND_SHUFFLE";
pub const SEED_ENV: &str = "DECKHAND_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub store_dir: PathBuf,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub store_dir: ValueSource,
    pub shuffle: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            store_dir: ValueSource::Default,
            shuffle: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Apply a `--store` flag on top of file and environment values.
    pub fn with_store_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.config.store_dir = dir;
            self.sources.store_dir = ValueSource::Cli;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".deckhand"),
            shuffle: true,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve configuration: defaults, then the TOML file named by
/// `DECKHAND_CONFIG`, then `DECKHAND_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.store_dir {
            cfg.store_dir = v;
            sources.store_dir = ValueSource::File;
        }
        if let Some(v) = f.shuffle {
            cfg.shuffle = v;
            sources.shuffle = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(dir) = std::env::var(STORE_DIR_ENV)
        && !dir.is_empty()
    {
        cfg.store_dir = PathBuf::from(dir);
        sources.store_dir = ValueSource::Env;
    }
    if let Ok(shuffle) = std::env::var(SHUFFLE_ENV)
        && !shuffle.is_empty()
    {
        cfg.shuffle =
            parse_bool(&shuffle).ok_or_else(|| ConfigError::Invalid("Invalid shuffle".into()))?;
        sources.shuffle = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    store_dir: Option<PathBuf>,
    #[serde(default)]
    shuffle: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.store_dir.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: store_dir must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
