//! HTML parsing and data extraction for the BID bulletin
//!
//! This module provides specialized extractors for the bulletin's search
//! result fragments (one modal card per registered player) and for the
//! landing page's country select.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::constants::labels;
use crate::domain::player::Player;
use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};

/// CSS selectors for the bulletin markup
#[derive(Debug, Clone)]
pub struct BidSelectors {
    /// One card per registered player in a result fragment.
    pub card: String,
    /// Player name heading inside a card.
    pub name: String,
    /// Team cell inside a card.
    pub team: String,
    /// Card body holding the labeled paragraphs.
    pub body: String,
    /// "label: value" paragraphs inside the card body.
    pub attribute: String,
    /// Country select on the landing page.
    pub country_select: String,
    /// Options of the country select.
    pub country_option: String,
}

impl Default for BidSelectors {
    fn default() -> Self {
        Self {
            card: ".modal-dialog".to_string(),
            name: "h4".to_string(),
            team: ".col-xs-9.col-sm-9.col-md-9".to_string(),
            body: ".modal-body".to_string(),
            attribute: "p".to_string(),
            country_select: "select[name=uf]".to_string(),
            country_option: "option".to_string(),
        }
    }
}

/// Data extractor for bulletin documents
pub struct BidDataExtractor {
    selectors: BidSelectors,
    card: Selector,
    name: Selector,
    team: Selector,
    body: Selector,
    attribute: Selector,
    country_select: Selector,
    country_option: Selector,
}

impl BidDataExtractor {
    /// Create a new extractor with the default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_selectors(BidSelectors::default())
    }

    /// Create a new extractor with custom selectors
    pub fn with_selectors(selectors: BidSelectors) -> ParsingResult<Self> {
        Ok(Self {
            card: parse_selector(&selectors.card)?,
            name: parse_selector(&selectors.name)?,
            team: parse_selector(&selectors.team)?,
            body: parse_selector(&selectors.body)?,
            attribute: parse_selector(&selectors.attribute)?,
            country_select: parse_selector(&selectors.country_select)?,
            country_option: parse_selector(&selectors.country_option)?,
            selectors,
        })
    }

    /// Extract every player card from a result fragment, in document order.
    ///
    /// A fragment with zero cards is an empty result, not an error, and a
    /// card whose labels are all missing still contributes a record.
    pub fn extract_players(&self, html: &str) -> ParsingResult<Vec<Player>> {
        let document = Html::parse_document(html);

        let players: Vec<Player> = document
            .select(&self.card)
            .map(|card| self.extract_single_player(card))
            .collect();

        debug!("Extracted {} player(s) from result fragment", players.len());
        Ok(players)
    }

    /// Extract the selectable countries from the landing page, in document
    /// order. A page without the select, or with an empty one, means the
    /// site changed and the run cannot proceed.
    pub fn extract_countries(&self, html: &str) -> ParsingResult<Vec<String>> {
        let document = Html::parse_document(html);

        let select = document
            .select(&self.country_select)
            .next()
            .ok_or_else(|| ParsingError::element_not_found(&self.selectors.country_select))?;

        let countries: Vec<String> = select
            .select(&self.country_option)
            .map(|option| option.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if countries.is_empty() {
            return Err(ParsingError::EmptyCountrySelect {
                selector: self.selectors.country_select.clone(),
            });
        }

        debug!("Extracted {} countries from landing page", countries.len());
        Ok(countries)
    }

    /// Extract a single player from a card element
    fn extract_single_player(&self, card: ElementRef) -> Player {
        let mut player = Player {
            name: self.element_text(&card, &self.name),
            team: self.element_text(&card, &self.team),
            ..Player::default()
        };

        if let Some(body) = card.select(&self.body).next() {
            for paragraph in body.select(&self.attribute) {
                let text = paragraph.text().collect::<String>();
                if let Some((label, value)) = split_attribute(&text) {
                    apply_attribute(&mut player, label, value);
                }
            }
        }

        player
    }

    /// Extract trimmed text from the first element matching a selector
    fn element_text(&self, element: &ElementRef, selector: &Selector) -> Option<String> {
        element
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

/// Split a card paragraph into its (label, value) halves on the first
/// colon. Paragraphs missing either half are skipped, not errors.
fn split_attribute(text: &str) -> Option<(&str, &str)> {
    let (label, value) = text.trim().split_once(':')?;
    let label = label.trim();
    let value = value.trim();

    if label.is_empty() || value.is_empty() {
        return None;
    }

    Some((label, value))
}

/// Populate one player field from a labeled value.
///
/// Dispatch is byte-exact on the Portuguese labels; unrecognized labels
/// are ignored.
fn apply_attribute(player: &mut Player, label: &str, value: &str) {
    match label {
        labels::REGISTRATION_ID => player.id = Some(value.to_string()),
        labels::CONTRACT_TYPE => {
            // The site appends the contract number, e.g. "Cedido N°123/21".
            let contract = value.split("N°").next().unwrap_or(value).trim();
            player.contract_type = Some(contract.to_string());
        }
        labels::START_DATE => player.start_date = Some(value.to_string()),
        labels::BIRTHDAY => player.birthday = Some(value.to_string()),
        labels::PUBLICATION_DATE => {
            // Keep the date token, drop the trailing time token.
            let date = value.split(' ').next().unwrap_or(value);
            player.publication_date = Some(date.to_string());
        }
        _ => {}
    }
}

fn parse_selector(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}
