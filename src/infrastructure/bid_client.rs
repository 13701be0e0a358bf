//! Client for the BID bulletin endpoints
//!
//! Site-specific operations on top of [`HttpClient`]: session bootstrap,
//! country enumeration, and the search POST whose response wraps the
//! result HTML in a JSON envelope.

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::SearchQuery;
use crate::infrastructure::config::cbf_bid;
use crate::infrastructure::fetch_error::{FetchError, FetchResult};
use crate::infrastructure::html_parser::BidDataExtractor;
use crate::infrastructure::http_client::HttpClient;

/// JSON envelope the search endpoint wraps its HTML payload in.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    status: String,
    dados: String,
}

const ENVELOPE_STATUS_ERROR: &str = "erro";

/// Fetches the search result fragment for one (country, date) pair.
///
/// The export driver depends only on this trait; [`BidClient`] is the
/// production implementation, tests substitute scripted fetchers.
#[async_trait]
pub trait SearchResultFetcher: Send + Sync {
    async fn fetch_search_results(
        &self,
        session: &str,
        query: &SearchQuery,
    ) -> FetchResult<String>;
}

/// Client for the bulletin site
pub struct BidClient {
    http: HttpClient,
    extractor: BidDataExtractor,
    base_url: String,
    search_url: String,
}

impl BidClient {
    /// Create a client for the production site
    pub fn new(http: HttpClient) -> FetchResult<Self> {
        Self::with_base_url(http, cbf_bid::BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(http: HttpClient, base_url: &str) -> FetchResult<Self> {
        let extractor = BidDataExtractor::new()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        let search_url = format!("{}{}", base_url, cbf_bid::SEARCH_PATH);

        Ok(Self {
            http,
            extractor,
            base_url,
            search_url,
        })
    }

    /// The extractor used for landing-page parsing; the export driver
    /// shares it for result fragments.
    pub fn extractor(&self) -> &BidDataExtractor {
        &self.extractor
    }

    /// GET the landing page and read the session cookie off the response.
    pub async fn acquire_session(&self) -> FetchResult<String> {
        let response = self.http.get(&self.base_url).await?;

        let session = response
            .cookies()
            .find(|cookie| cookie.name() == cbf_bid::SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| FetchError::SessionCookieMissing {
                cookie: cbf_bid::SESSION_COOKIE.to_string(),
            })?;

        info!("Session established");
        Ok(session)
    }

    /// GET the landing page and enumerate the selectable countries.
    pub async fn fetch_countries(&self) -> FetchResult<Vec<String>> {
        let response = self.http.get(&self.base_url).await?;
        let html = response.text().await?;

        let countries = self.extractor.extract_countries(&html)?;
        info!("{} countries loaded", countries.len());
        Ok(countries)
    }
}

#[async_trait]
impl SearchResultFetcher for BidClient {
    async fn fetch_search_results(
        &self,
        session: &str,
        query: &SearchQuery,
    ) -> FetchResult<String> {
        debug!("Searching {} on {}", query.country, query.date);

        let cookie = format!("{}={}", cbf_bid::SESSION_COOKIE, session);
        let response = self
            .http
            .post_form(&self.search_url, &query.form_fields(), Some(&cookie))
            .await?;

        let body = response.text().await?;
        let envelope: SearchEnvelope = serde_json::from_str(&body)?;

        if envelope.status == ENVELOPE_STATUS_ERROR {
            return Err(FetchError::SearchRejected {
                message: rejection_message(&envelope.dados),
            });
        }

        Ok(envelope.dados)
    }
}

/// The server reports rejections as an HTML snippet carrying the reason
/// in an `h3` element.
fn rejection_message(html: &str) -> String {
    let fallback = || "unspecified server error".to_string();

    match Selector::parse("h3") {
        Ok(selector) => Html::parse_document(html)
            .select(&selector)
            .next()
            .map(|heading| heading.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(fallback),
        Err(_) => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_success_payload() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"status":"sucesso","dados":"<div>ok</div>"}"#).unwrap();
        assert_eq!(envelope.status, "sucesso");
        assert_eq!(envelope.dados, "<div>ok</div>");
    }

    #[test]
    fn rejection_message_comes_from_the_h3() {
        let message = rejection_message("<div><h3>Data inválida</h3></div>");
        assert_eq!(message, "Data inválida");
    }

    #[test]
    fn rejection_message_falls_back_when_h3_is_missing() {
        let message = rejection_message("<div>nada</div>");
        assert_eq!(message, "unspecified server error");
    }
}
