use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::hh_dto::HhPage;
use crate::dto::search_dto::SearchQuery;
use crate::error::{Error, Result};
use crate::models::raw_vacancy::RawVacancy;
use crate::services::fetcher::{SourceFetcher, SourceKind};

/// HeadHunter JSON API. Pages are requested one after another with a pause in between.
#[derive(Clone)]
pub struct HhFetcher {
    client: Client,
    endpoint: String,
    page_delay: Duration,
}

impl HhFetcher {
    pub fn new(client: Client, endpoint: impl Into<String>, page_delay: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            page_delay,
        }
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<HhPage> {
        let params = [
            ("text", query.text.clone()),
            ("area", query.area.to_string()),
            ("per_page", query.per_page.to_string()),
            ("page", page.to_string()),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Network {
                board: SourceKind::Hh.name().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::Parse(format!("HH page {} is not a vacancy list: {}", page, e)))
    }
}

#[async_trait]
impl SourceFetcher for HhFetcher {
    fn name(&self) -> &'static str {
        SourceKind::Hh.name()
    }

    #[instrument(skip(self, query), fields(source = "HH", text = %query.text))]
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawVacancy>> {
        query.validate()?;

        let mut raw = Vec::new();
        for page in 0..query.page_limit {
            let body = match self.fetch_page(query, page).await {
                Ok(body) => body,
                Err(err @ Error::Network { .. }) => {
                    warn!(page, error = %err, "Failed to retrieve vacancies, keeping {} fetched", raw.len());
                    break;
                }
                Err(err) if raw.is_empty() => return Err(err),
                Err(err) => {
                    warn!(page, error = %err, "HH page failed, keeping {} fetched", raw.len());
                    break;
                }
            };

            let last = body.is_last(page);
            info!(page, received = body.items.len(), found = ?body.found, "HH page fetched");
            raw.extend(body.items.into_iter().map(RawVacancy::Json));

            if last || page + 1 >= query.page_limit {
                break;
            }
            tokio::time::sleep(self.page_delay).await;
        }

        Ok(raw)
    }
}
