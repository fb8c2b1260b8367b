use crate::error::{Error, Result};
use crate::services::fetcher::SourceKind;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_HH_API_URL: &str = "https://api.hh.ru/vacancies";
const DEFAULT_HABR_SEARCH_URL: &str = "https://career.habr.com/vacancies";
const DEFAULT_HABR_BASE_URL: &str = "https://career.habr.com";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct Config {
    pub search_text: String,
    pub search_area: u32,
    pub page_limit: u32,
    pub per_page: u32,
    pub sources: Vec<SourceKind>,
    pub hh_api_url: String,
    pub habr_search_url: String,
    pub habr_base_url: String,
    pub page_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub output_path: PathBuf,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        Ok(Self {
            search_text: vars.get("SEARCH_TEXT")?,
            search_area: vars.parse_or("SEARCH_AREA", 1)?,
            page_limit: vars.parse_or("PAGE_LIMIT", 1)?,
            per_page: vars.parse_or("PER_PAGE", 20)?,
            sources: parse_sources(&vars.get_or("SOURCES", "hh,habr"))?,
            hh_api_url: vars.get_or("HH_API_URL", DEFAULT_HH_API_URL),
            habr_search_url: vars.get_or("HABR_SEARCH_URL", DEFAULT_HABR_SEARCH_URL),
            habr_base_url: vars.get_or("HABR_BASE_URL", DEFAULT_HABR_BASE_URL),
            page_delay: Duration::from_millis(vars.parse_or("PAGE_DELAY_MS", 2000)?),
            request_timeout: Duration::from_secs(vars.parse_or("REQUEST_TIMEOUT_SECS", 30)?),
            user_agent: vars.get_or("USER_AGENT", DEFAULT_USER_AGENT),
            output_path: PathBuf::from(vars.get_or("OUTPUT_PATH", "vacancies.json")),
        })
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Result<String> {
        (self.0)(name)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("Missing environment variable: {}", name)))
    }

    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|_| default.to_string())
    }

    fn parse_or<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
            Err(_) => Ok(default),
        }
    }
}

fn parse_sources(raw: &str) -> Result<Vec<SourceKind>> {
    let mut sources = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let kind: SourceKind = name.parse()?;
        if !sources.contains(&kind) {
            sources.push(kind);
        }
    }

    if sources.is_empty() {
        return Err(Error::Config("SOURCES must name at least one source".to_string()));
    }
    Ok(sources)
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_only_search_text_is_set() {
        let config = config_from(&[("SEARCH_TEXT", "rust")]).unwrap();
        assert_eq!(config.search_text, "rust");
        assert_eq!(config.search_area, 1);
        assert_eq!(config.page_limit, 1);
        assert_eq!(config.per_page, 20);
        assert_eq!(config.sources, vec![SourceKind::Hh, SourceKind::Habr]);
        assert_eq!(config.page_delay, Duration::from_secs(2));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.hh_api_url, DEFAULT_HH_API_URL);
        assert_eq!(config.output_path, PathBuf::from("vacancies.json"));
    }

    #[test]
    fn missing_search_text_is_a_config_error() {
        let err = config_from(&[("PAGE_LIMIT", "3")]).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("SEARCH_TEXT")));
    }

    #[test]
    fn invalid_number_is_reported_with_variable_name() {
        let err = config_from(&[("SEARCH_TEXT", "rust"), ("PAGE_LIMIT", "many")]).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("PAGE_LIMIT")));
    }

    #[test]
    fn sources_are_deduplicated_and_case_insensitive() {
        let config = config_from(&[("SEARCH_TEXT", "rust"), ("SOURCES", "Habr, hh ,habr")]).unwrap();
        assert_eq!(config.sources, vec![SourceKind::Habr, SourceKind::Hh]);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let err = config_from(&[("SEARCH_TEXT", "rust"), ("SOURCES", "hh,linkedin")]).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("linkedin")));
    }

    #[test]
    fn empty_source_list_is_rejected() {
        let err = config_from(&[("SEARCH_TEXT", "rust"), ("SOURCES", " , ")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
