use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Title used when a listing carries no usable name.
pub const NO_TITLE: &str = "No title";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub experience: Option<String>,
    pub salary_from: i64,
    pub salary_to: i64,
    pub currency: Option<String>,
    pub work_format: Option<String>,
}

/// Normalized records keyed by source name.
pub type VacancyBatches = BTreeMap<String, Vec<VacancyRecord>>;
