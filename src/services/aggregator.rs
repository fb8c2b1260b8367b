use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::dto::search_dto::SearchQuery;
use crate::models::vacancy::{VacancyBatches, VacancyRecord};
use crate::services::fetcher::SourceFetcher;
use crate::services::normalizer::normalize;

/// Runs every configured source concurrently and collects normalized records per source.
#[derive(Clone)]
pub struct Aggregator {
    sources: Vec<Arc<dyn SourceFetcher>>,
}

impl Aggregator {
    pub fn new(sources: Vec<Arc<dyn SourceFetcher>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Every configured source gets a key in the result, even when its fetch failed.
    #[instrument(skip_all, fields(text = %query.text))]
    pub async fn collect(&self, query: &SearchQuery) -> VacancyBatches {
        let mut batches = VacancyBatches::new();
        let mut tasks = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            batches.insert(source.name().to_string(), Vec::new());

            let source = Arc::clone(source);
            let query = query.clone();
            let name = source.name();
            let task = tokio::spawn(async move { collect_source(source.as_ref(), &query).await });
            tasks.push((name, task));
        }

        for (name, task) in tasks {
            match task.await {
                Ok(records) => {
                    batches.insert(name.to_string(), records);
                }
                Err(err) => {
                    error!(source = name, error = ?err, "Source task aborted, recording no vacancies");
                }
            }
        }

        batches
    }
}

async fn collect_source(source: &dyn SourceFetcher, query: &SearchQuery) -> Vec<VacancyRecord> {
    match source.fetch(query).await {
        Ok(raw) => {
            let records: Vec<VacancyRecord> = raw.into_iter().map(normalize).collect();
            info!(source = source.name(), count = records.len(), "Vacancies normalized");
            records
        }
        Err(err) => {
            warn!(
                source = source.name(),
                network = err.is_network(),
                error = %err,
                "Fetch failed, recording no vacancies"
            );
            Vec::new()
        }
    }
}
