use serde::{Deserialize, Serialize};

use crate::domain::constants::search;

/// One player registration extracted from a bulletin card.
///
/// Extraction is best-effort: every field except `country` stays `None`
/// when its source label or element is missing from the card. `country`
/// is assigned by the export driver, never by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub country: String,
    pub name: Option<String>,
    pub team: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "contractType")]
    pub contract_type: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    pub birthday: Option<String>,
    #[serde(rename = "publicationDate")]
    pub publication_date: Option<String>,
}

/// Search criteria for a single bulletin query.
///
/// `country` and `date` identify the (pair) being fetched. The remaining
/// filters mirror the site's search form; `None` means "no filter", which
/// the form encodes as an empty string (contract type uses `TODOS`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub country: String,
    /// Search date in `dd/mm/yyyy` form.
    pub date: String,
    pub contract: Option<String>,
    pub athlete: Option<String>,
    pub club_code: Option<String>,
    pub exercise: Option<String>,
}

impl SearchQuery {
    /// Create a query for one (country, date) pair with default filters.
    pub fn new(country: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            date: date.into(),
            contract: None,
            athlete: None,
            club_code: None,
            exercise: None,
        }
    }

    /// The form fields posted to the search endpoint, in form order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("uf", self.country.clone()),
            ("dt_pesquisa", self.date.clone()),
            (
                "tp_contrato",
                self.contract
                    .clone()
                    .unwrap_or_else(|| search::ALL_CONTRACT_TYPES.to_string()),
            ),
            ("n_atleta", self.athlete.clone().unwrap_or_default()),
            ("codigo_clube", self.club_code.clone().unwrap_or_default()),
            ("exercicio", self.exercise.clone().unwrap_or_default()),
        ]
    }
}
