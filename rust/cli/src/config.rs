use serde::{Deserialize, Serialize};
use std::fs;

use runfast_engine::deck::DeckVariant;
use runfast_engine::rules::{FirstTurnRule, GameSettings};

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub seats: usize,
    pub deck: DeckVariant,
    pub first_turn: FirstTurnRule,
    pub three_as_bomb: bool,
    pub ai: String,
}

impl Config {
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            deck_variant: self.deck,
            first_turn: self.first_turn,
            three_as_bomb: self.three_as_bomb,
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
    pub seed: ValueSource,
    pub seats: ValueSource,
    pub deck: ValueSource,
    pub first_turn: ValueSource,
    pub three_as_bomb: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            seats: ValueSource::Default,
            deck: ValueSource::Default,
            first_turn: ValueSource::Default,
            three_as_bomb: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            seats: 3,
            deck: DeckVariant::default(),
            first_turn: FirstTurnRule::default(),
            three_as_bomb: false,
            ai: "baseline".into(),
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves defaults, then `RUNFAST_CONFIG` (TOML), then `RUNFAST_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("RUNFAST_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.deck {
            cfg.deck = v;
            sources.deck = ValueSource::File;
        }
        if let Some(v) = f.first_turn {
            cfg.first_turn = v;
            sources.first_turn = ValueSource::File;
        }
        if let Some(v) = f.three_as_bomb {
            cfg.three_as_bomb = v;
            sources.three_as_bomb = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("RUNFAST_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(seats) = env_value("RUNFAST_SEATS") {
        cfg.seats = seats
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid seats: {}", seats)))?;
        sources.seats = ValueSource::Env;
    }
    if let Some(deck) = env_value("RUNFAST_DECK") {
        cfg.deck = parse_deck(&deck)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid deck: {}", deck)))?;
        sources.deck = ValueSource::Env;
    }
    if let Some(rule) = env_value("RUNFAST_FIRST_TURN") {
        cfg.first_turn = parse_first_turn(&rule)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid first_turn: {}", rule)))?;
        sources.first_turn = ValueSource::Env;
    }
    if let Some(flag) = env_value("RUNFAST_THREE_AS_BOMB") {
        cfg.three_as_bomb = parse_bool(&flag)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid three_as_bomb: {}", flag)))?;
        sources.three_as_bomb = ValueSource::Env;
    }
    if let Some(ai) = env_value("RUNFAST_AI") {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    deck: Option<DeckVariant>,
    #[serde(default)]
    first_turn: Option<FirstTurnRule>,
    #[serde(default)]
    three_as_bomb: Option<bool>,
    #[serde(default)]
    ai: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_SEATS..=MAX_SEATS).contains(&cfg.seats) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: seats must be between {} and {}",
            MIN_SEATS, MAX_SEATS
        )));
    }
    if cfg.ai.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: ai must not be empty".into(),
        ));
    }
    Ok(())
}

pub fn parse_deck(s: &str) -> Option<DeckVariant> {
    match s.to_ascii_lowercase().as_str() {
        "standard48" | "48" => Some(DeckVariant::Standard48),
        "standard52" | "52" => Some(DeckVariant::Standard52),
        _ => None,
    }
}

pub fn parse_first_turn(s: &str) -> Option<FirstTurnRule> {
    match s.to_ascii_lowercase().as_str() {
        "heart3" => Some(FirstTurnRule::Heart3),
        "rotate" => Some(FirstTurnRule::Rotate),
        "winner" => Some(FirstTurnRule::Winner),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
