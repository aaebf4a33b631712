//! Acquisition layer: fetch the competition page and extract one
//! [`RawFixtureRecord`] per fixture card.
//!
//! The fetch is behind the [`HtmlFetcher`] seam so the extraction logic can
//! be exercised with static HTML, and so a rendering-capable fetcher could
//! be slotted in without touching anything else.

pub mod selectors;

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::constants;
use crate::error::AppError;
use crate::fixture::models::RawFixtureRecord;
use selectors::SelectorChain;

/// Source of raw page HTML.
#[allow(async_fn_in_trait)]
pub trait HtmlFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, AppError>;
}

/// Plain HTTP fetcher with the configured timeout and user agent.
pub struct WebHtmlFetcher {
    client: Client,
}

impl WebHtmlFetcher {
    pub fn new(timeout_seconds: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(Duration::from_secs(timeout_seconds))
            .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;
        Ok(Self { client })
    }
}

impl HtmlFetcher for WebHtmlFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, AppError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::page_status(status.as_u16(), url));
        }
        Ok(response.text().await?)
    }
}

/// Fetches the competition page and extracts fixture cards in page order.
pub struct FixtureScraper<F: HtmlFetcher> {
    fetcher: F,
}

impl<F: HtmlFetcher> FixtureScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn fetch_fixtures(&self, url: &str) -> Result<Vec<RawFixtureRecord>, AppError> {
        info!(url, "fetching competition page");
        let html = self.fetcher.fetch_html(url).await?;
        let records = parse_fixture_cards(&html);
        info!(count = records.len(), "extracted fixture cards");
        Ok(records)
    }
}

/// Extracts one record per fixture card (`ul.l-grid > li`).
///
/// Field lookup follows the candidate chains in
/// [`constants::selectors`]. A card with no resolvable date header is
/// skipped; a missing kickoff element degrades to the "Unknown" label and
/// missing teams or venue stay `None` for downstream handling. A `datetime`
/// attribute that fails to parse as RFC 3339 is treated as absent so the
/// display label passes through unconverted.
pub fn parse_fixture_cards(html: &str) -> Vec<RawFixtureRecord> {
    let Ok(card_selector) = Selector::parse(constants::selectors::FIXTURE_CARD) else {
        return Vec::new();
    };
    let Ok(time_selector) = Selector::parse(constants::selectors::KICKOFF_TIME) else {
        return Vec::new();
    };
    let date_chain = SelectorChain::new(constants::selectors::DATE_CANDIDATES);
    let team_chain = SelectorChain::new(constants::selectors::TEAM_CANDIDATES);
    let venue_chain = SelectorChain::new(constants::selectors::VENUE_CANDIDATES);

    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for (index, card) in document.select(&card_selector).enumerate() {
        let Some(date_label) = date_chain.first_text_multiline(card) else {
            debug!(index, "skipping card without a date header");
            continue;
        };

        let mut teams = team_chain.all_texts(card).into_iter();
        let home_team = teams.next();
        let away_team = teams.next();

        let (time_label, kickoff_utc) = match card.select(&time_selector).next() {
            Some(el) => {
                let label: String = el
                    .text()
                    .flat_map(str::split_whitespace)
                    .collect::<Vec<_>>()
                    .join(" ");
                let label = if label.is_empty() {
                    "Unknown".to_string()
                } else {
                    label
                };
                (label, parse_kickoff_attr(el.value().attr("datetime")))
            }
            None => ("Unknown".to_string(), None),
        };

        records.push(RawFixtureRecord {
            date_label,
            time_label,
            kickoff_utc,
            home_team,
            away_team,
            venue: venue_chain.first_text(card),
        });
    }

    records
}

fn parse_kickoff_attr(attr: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = attr?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            debug!(raw, error = %e, "ignoring unparsable datetime attribute");
            None
        }
    }
}
