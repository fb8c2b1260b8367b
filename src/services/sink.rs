use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::models::vacancy::VacancyBatches;

/// Storage for collected vacancies. The pipeline only ever hands over finished batches.
#[async_trait]
pub trait VacancySink: Send + Sync {
    async fn save(&self, batches: &VacancyBatches) -> Result<()>;
}

/// Writes all batches to one pretty-printed JSON document, replacing earlier output.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl VacancySink for JsonFileSink {
    async fn save(&self, batches: &VacancyBatches) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(batches)?;
        tokio::fs::write(&self.path, json).await?;

        let total: usize = batches.values().map(Vec::len).sum();
        info!(path = %self.path.display(), total, "Vacancies saved");
        Ok(())
    }
}
