use std::env;
use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;
use url::Url;

use crate::core::{
    config::Config,
    Error,
    Result,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/persons";
pub const BASE_URL_ENV: &str = "PHONEBOOK_BASE_URL";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Default, Deserialize)]
struct FileCfg {
    #[serde(rename = "baseUrl")]
    base_url    : Option<String>,
    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

struct Configuration {
    base_url    : String,
    log_level   : LevelFilter,
    log_file    : Option<String>,
}

/// Layers configuration sources: builder values win over the environment,
/// which wins over the config file, which wins over built-in defaults.
pub struct Builder<'a> {
    base_url    : Option<&'a str>,
    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,
    cfg         : Option<FileCfg>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            base_url    : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_base_url(&mut self, url: &'a str) -> &mut Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<FileCfg>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let cfg = b.cfg.clone().unwrap_or_default();

        let base_url = match b.base_url {
            Some(url) => url.to_string(),
            None => match env::var(BASE_URL_ENV) {
                Ok(url) if !url.trim().is_empty() => url,
                _ => cfg.base_url.clone().unwrap_or(DEFAULT_BASE_URL.into()),
            }
        };

        Url::parse(&base_url).map_err(|e| {
            Error::Argument(format!("bad base url {}, error: {}", base_url, e))
        })?;

        let logger = cfg.logger.as_ref();
        let log_level = match b.log_level {
            Some(level) => level,
            None => logger
                .and_then(|v| v.level.as_ref())
                .and_then(|v| v.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::Info),
        };

        let log_file = match b.log_file {
            Some(file) => Some(file.to_string()),
            None => logger.and_then(|v| v.file.clone()),
        };

        Ok(Self {
            base_url,
            log_level,
            log_file,
        })
    }
}

impl Config for Configuration {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "baseUrl:{},", self.base_url)?;
        write!(f, "logLevel:{}", self.log_level)?;
        if let Some(file) = self.log_file.as_ref() {
            write!(f, ",logFile:{}", file)?;
        }
        Ok(())
    }
}
