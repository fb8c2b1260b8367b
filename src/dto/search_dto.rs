use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::Config;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1))]
    pub text: String,
    pub area: u32,
    #[validate(range(min = 1, max = 20))]
    pub page_limit: u32,
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, area: u32, page_limit: u32) -> Self {
        Self {
            text: text.into(),
            area,
            page_limit,
            per_page: 20,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            text: config.search_text.clone(),
            area: config.search_area,
            page_limit: config.page_limit,
            per_page: config.per_page,
        }
    }
}
