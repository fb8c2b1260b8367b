use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use tracing::{info, instrument, warn};
use url::Url;
use validator::Validate;

use crate::dto::search_dto::SearchQuery;
use crate::error::{Error, Result};
use crate::models::raw_vacancy::{HabrCard, RawVacancy, NO_LINK};
use crate::models::vacancy::NO_TITLE;
use crate::services::fetcher::{SourceFetcher, SourceKind};
use crate::utils::text::non_blank;

const CARD: &str = "div.vacancy-card";
const TITLE_LINK: &str = "a.vacancy-card__title-link";
const COMPANY: &str = ".vacancy-card__company-title";
const META: &str = ".vacancy-card__meta";
const SKILLS: &str = ".vacancy-card__skills";
const SALARY: &str = ".vacancy-card__salary";

/// Habr Career search page, scraped in a single request.
#[derive(Clone)]
pub struct HabrFetcher {
    client: Client,
    search_url: String,
    base_url: String,
    user_agent: String,
}

impl HabrFetcher {
    pub fn new(
        client: Client,
        search_url: impl Into<String>,
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client,
            search_url: search_url.into(),
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn build_url(&self, query: &SearchQuery) -> Result<Url> {
        Url::parse_with_params(&self.search_url, &[("q", query.text.as_str())])
            .map_err(|e| Error::Config(format!("Invalid Habr search URL {}: {}", self.search_url, e)))
    }
}

#[async_trait]
impl SourceFetcher for HabrFetcher {
    fn name(&self) -> &'static str {
        SourceKind::Habr.name()
    }

    #[instrument(skip(self, query), fields(source = "Habr", text = %query.text))]
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawVacancy>> {
        query.validate()?;

        let url = self.build_url(query)?;
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "Failed to retrieve vacancies from Habr");
            return Ok(Vec::new());
        }

        let html = response.text().await?;
        let cards = parse_cards(&html, &self.base_url)?;
        info!(cards = cards.len(), "Habr search page parsed");

        Ok(cards.into_iter().map(RawVacancy::Html).collect())
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("Bad selector {}: {:?}", css, e)))
}

/// Extracts every vacancy card from a Habr search page. Cards missing a title or link
/// are kept with the `No title` / `No link` placeholders.
pub fn parse_cards(html: &str, base_url: &str) -> Result<Vec<HabrCard>> {
    let document = Html::parse_document(html);
    let card_selector = selector(CARD)?;
    let title_selector = selector(TITLE_LINK)?;
    let company_selector = selector(COMPANY)?;
    let meta_selector = selector(META)?;
    let meta_link_selector = selector("a")?;
    let skills_selector = selector(SKILLS)?;
    let salary_selector = selector(SALARY)?;

    let base = Url::parse(base_url).ok();

    let cards = document
        .select(&card_selector)
        .map(|card| {
            let title_link = card.select(&title_selector).next();

            let title = title_link
                .and_then(|el| non_blank(&element_text(el)))
                .unwrap_or_else(|| NO_TITLE.to_string());

            let link = title_link
                .and_then(|el| el.value().attr("href"))
                .map(|href| absolutize(base.as_ref(), href))
                .unwrap_or_else(|| NO_LINK.to_string());

            // The first link in the meta line is the city; remote-only cards have none.
            let location = card.select(&meta_selector).next().and_then(|meta| {
                meta.select(&meta_link_selector)
                    .next()
                    .and_then(|city| non_blank(&element_text(city)))
                    .or_else(|| non_blank(&element_text(meta)))
            });

            HabrCard {
                title,
                link,
                company: first_text(card, &company_selector),
                location,
                description: first_text(card, &skills_selector),
                salary_text: first_text(card, &salary_selector),
            }
        })
        .collect();

    Ok(cards)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| non_blank(&element_text(el)))
}

fn absolutize(base: Option<&Url>, href: &str) -> String {
    base.and_then(|base| base.join(href).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| href.to_string())
}
