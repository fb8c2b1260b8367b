pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::dto::search_dto::SearchQuery;
use crate::error::Result;
use crate::models::vacancy::VacancyBatches;
use crate::services::{
    aggregator::Aggregator,
    fetcher::build_fetcher,
    sink::{JsonFileSink, VacancySink},
};
use reqwest::Client;
use std::sync::Arc;
use validator::Validate;

/// Fetch, normalize and store in one pass.
#[derive(Clone)]
pub struct Pipeline {
    pub aggregator: Aggregator,
    pub sink: Arc<dyn VacancySink>,
}

impl Pipeline {
    pub fn new(aggregator: Aggregator, sink: Arc<dyn VacancySink>) -> Self {
        Self { aggregator, sink }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http_client = Client::builder().timeout(config.request_timeout).build()?;

        let sources = config
            .sources
            .iter()
            .map(|kind| build_fetcher(*kind, config, http_client.clone()))
            .collect();

        Ok(Self::new(
            Aggregator::new(sources),
            Arc::new(JsonFileSink::new(config.output_path.clone())),
        ))
    }

    pub async fn run(&self, query: &SearchQuery) -> Result<VacancyBatches> {
        query.validate()?;
        let batches = self.aggregator.collect(query).await;
        self.sink.save(&batches).await?;
        Ok(batches)
    }
}
