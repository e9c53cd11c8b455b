//! Session configuration: built-in defaults, then the TOML file named by
//! `SIXMAX_CONFIG`, then `SIXMAX_*` environment variables. Command-line flags
//! are applied by the commands themselves on top of the resolved values.

use serde::{Deserialize, Serialize};
use sixmax_engine::chips::Chips;
use sixmax_engine::seat::Seat;
use sixmax_engine::state::HandConfig;
use std::fs;

pub const CONFIG_ENV: &str = "SIXMAX_CONFIG";
pub const STACK_ENV: &str = "SIXMAX_STACK";
pub const HERO_ENV: &str = "SIXMAX_HERO";
pub const LOG_ENV: &str = "SIXMAX_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: Chips,
    pub hero: Option<Seat>,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: Chips::DEFAULT_STACK,
            hero: None,
            log_level: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub hero: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            hero: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v.to_chips()?;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.hero {
            cfg.hero = Some(parse_seat(&v)?);
            sources.hero = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = Some(v);
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(stack) = std::env::var(STACK_ENV)
        && !stack.is_empty()
    {
        cfg.starting_stack = parse_stack(&stack)?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(hero) = std::env::var(HERO_ENV)
        && !hero.is_empty()
    {
        cfg.hero = Some(parse_seat(&hero)?);
        sources.hero = ValueSource::Env;
    }
    if let Ok(level) = std::env::var(LOG_ENV)
        && !level.is_empty()
    {
        cfg.log_level = Some(level);
        sources.log_level = ValueSource::Env;
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
    starting_stack: Option<BigBlinds>,
    #[serde(default)]
    hero: Option<String>,
    #[serde(default)]
    log_level: Option<String>,
}

/// Stack sizes may be written as `100`, `62.5` or `"62.5"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BigBlinds {
    Whole(u64),
    Fraction(f64),
    Text(String),
}

impl BigBlinds {
    fn to_chips(&self) -> Result<Chips, ConfigError> {
        match self {
            BigBlinds::Whole(bb) => parse_stack(&bb.to_string()),
            BigBlinds::Fraction(bb) => parse_stack(&bb.to_string()),
            BigBlinds::Text(s) => parse_stack(s),
        }
    }
}

/// Parses a stack in big blinds, refusing anything above
/// [`HandConfig::MAX_STACK`].
pub fn parse_stack(s: &str) -> Result<Chips, ConfigError> {
    let stack = s
        .parse::<Chips>()
        .map_err(|e| ConfigError::Invalid(format!("Invalid starting_stack '{}': {}", s, e)))?;
    if stack > HandConfig::MAX_STACK {
        return Err(ConfigError::Invalid(format!(
            "Invalid starting_stack '{}': above the {}bb limit",
            s,
            HandConfig::MAX_STACK
        )));
    }
    Ok(stack)
}

fn parse_seat(s: &str) -> Result<Seat, ConfigError> {
    s.parse::<Seat>()
        .map_err(|e| ConfigError::Invalid(format!("Invalid hero: {}", e)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack.is_zero() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    Ok(())
}
