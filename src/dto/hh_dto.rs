use serde::Deserialize;
use serde_json::Value;

/// One page of the HH `/vacancies` response. Items stay untyped until normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct HhPage {
    #[serde(default)]
    pub items: Vec<Value>,
    pub found: Option<u64>,
    pub pages: Option<u32>,
    pub page: Option<u32>,
}

impl HhPage {
    /// Whether no page exists after `page` according to the API's own count.
    pub fn is_last(&self, page: u32) -> bool {
        self.items.is_empty() || self.pages.is_some_and(|pages| pages <= page + 1)
    }
}
