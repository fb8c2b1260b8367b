use serde_json::Value;

/// Link used when a scraped card has no anchor.
pub const NO_LINK: &str = "No link";

/// A listing as it came off the wire, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawVacancy {
    /// One element of the HH `items` array.
    Json(Value),
    /// One vacancy card scraped from a Habr search page.
    Html(HabrCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabrCard {
    pub title: String,
    pub link: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary_text: Option<String>,
}
