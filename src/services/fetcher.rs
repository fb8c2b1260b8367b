use async_trait::async_trait;
use reqwest::Client;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::config::Config;
use crate::dto::search_dto::SearchQuery;
use crate::error::{Error, Result};
use crate::models::raw_vacancy::RawVacancy;
use crate::services::habr_fetcher::HabrFetcher;
use crate::services::hh_fetcher::HhFetcher;

/// A job board that can be searched for raw listings.
///
/// Every call to [`SourceFetcher::fetch`] starts from scratch; implementations keep no
/// state between calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Key under which this source's records are reported.
    fn name(&self) -> &'static str;

    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawVacancy>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Hh,
    Habr,
}

impl SourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Hh => "HH",
            SourceKind::Habr => "Habr",
        }
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hh" | "headhunter" => Ok(SourceKind::Hh),
            "habr" | "habr-career" => Ok(SourceKind::Habr),
            other => Err(Error::Config(format!("Unknown vacancy source: {}", other))),
        }
    }
}

pub fn build_fetcher(kind: SourceKind, config: &Config, client: Client) -> Arc<dyn SourceFetcher> {
    match kind {
        SourceKind::Hh => Arc::new(HhFetcher::new(
            client,
            config.hh_api_url.clone(),
            config.page_delay,
        )),
        SourceKind::Habr => Arc::new(HabrFetcher::new(
            client,
            config.habr_search_url.clone(),
            config.habr_base_url.clone(),
            config.user_agent.clone(),
        )),
    }
}
