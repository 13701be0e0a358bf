//! Tests for the streaming export driver: iteration order, error
//! tolerance, country tagging, and pull-driven cancellation.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::StreamExt;

use bid_scraper::domain::{ExportPlan, SearchQuery};
use bid_scraper::infrastructure::fetch_error::{FetchError, FetchResult};
use bid_scraper::{player_stream, BidDataExtractor, SearchResultFetcher};

/// Scripted fetcher that records every (date, country) pair it is asked
/// for and answers from a fixed script.
struct ScriptedFetcher {
    calls: Mutex<Vec<(String, String)>>,
    script: Box<dyn Fn(&SearchQuery) -> FetchResult<String> + Send + Sync>,
}

impl ScriptedFetcher {
    fn new(script: impl Fn(&SearchQuery) -> FetchResult<String> + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Box::new(script),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchResultFetcher for ScriptedFetcher {
    async fn fetch_search_results(
        &self,
        _session: &str,
        query: &SearchQuery,
    ) -> FetchResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((query.date.clone(), query.country.clone()));
        (self.script)(query)
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").unwrap()
}

fn card(name: &str) -> String {
    format!(r#"<div class="modal-dialog"><h4>{name}</h4></div>"#)
}

#[tokio::test]
async fn single_pair_issues_one_fetch_and_yields_its_cards() {
    let fetcher =
        ScriptedFetcher::new(|_| Ok(format!("{}{}", card("Primeiro"), card("Segundo"))));
    let extractor = BidDataExtractor::new().unwrap();
    let plan = ExportPlan::new(
        date("01/02/2021"),
        date("01/02/2021"),
        vec!["RJ".to_string()],
    )
    .unwrap();

    let players: Vec<_> = player_stream(&fetcher, &extractor, "sessao", &plan)
        .collect()
        .await;

    assert_eq!(fetcher.calls().len(), 1);
    assert_eq!(players.len(), 2);
}

#[tokio::test]
async fn pairs_are_visited_date_major_in_country_list_order() {
    let fetcher = ScriptedFetcher::new(|_| Ok(String::new()));
    let extractor = BidDataExtractor::new().unwrap();
    let plan = ExportPlan::new(
        date("01/02/2021"),
        date("02/02/2021"),
        vec!["RJ".to_string(), "SP".to_string()],
    )
    .unwrap();

    let _players: Vec<_> = player_stream(&fetcher, &extractor, "sessao", &plan)
        .collect()
        .await;

    assert_eq!(
        fetcher.calls(),
        vec![
            ("01/02/2021".to_string(), "RJ".to_string()),
            ("01/02/2021".to_string(), "SP".to_string()),
            ("02/02/2021".to_string(), "RJ".to_string()),
            ("02/02/2021".to_string(), "SP".to_string()),
        ]
    );
}

#[tokio::test]
async fn a_failed_pair_is_skipped_without_aborting_the_run() {
    let fetcher = ScriptedFetcher::new(|query| {
        if query.date == "01/02/2021" && query.country == "RJ" {
            Err(FetchError::SearchRejected {
                message: "Data inválida".to_string(),
            })
        } else {
            Ok(card("Alguém"))
        }
    });
    let extractor = BidDataExtractor::new().unwrap();
    let plan = ExportPlan::new(
        date("01/02/2021"),
        date("02/02/2021"),
        vec!["RJ".to_string(), "SP".to_string()],
    )
    .unwrap();

    let players: Vec<_> = player_stream(&fetcher, &extractor, "sessao", &plan)
        .collect()
        .await;

    // All four pairs were attempted, only the failed one yields nothing.
    assert_eq!(fetcher.calls().len(), 4);
    assert_eq!(players.len(), 3);
}

#[tokio::test]
async fn every_record_is_tagged_with_the_country_of_its_pair() {
    let fetcher = ScriptedFetcher::new(|query| Ok(card(&format!("Jogador {}", query.country))));
    let extractor = BidDataExtractor::new().unwrap();
    let plan = ExportPlan::new(
        date("01/02/2021"),
        date("01/02/2021"),
        vec!["RJ".to_string(), "SP".to_string(), "MG".to_string()],
    )
    .unwrap();

    let players: Vec<_> = player_stream(&fetcher, &extractor, "sessao", &plan)
        .collect()
        .await;

    let countries: Vec<_> = players.iter().map(|p| p.country.as_str()).collect();
    assert_eq!(countries, vec!["RJ", "SP", "MG"]);
    assert_eq!(players[0].name.as_deref(), Some("Jogador RJ"));
}

#[tokio::test]
async fn dropping_the_stream_stops_further_fetches() {
    let fetcher = ScriptedFetcher::new(|_| Ok(card("Um")));
    let extractor = BidDataExtractor::new().unwrap();
    let plan = ExportPlan::new(
        date("01/02/2021"),
        date("05/02/2021"),
        vec!["RJ".to_string()],
    )
    .unwrap();

    let stream = player_stream(&fetcher, &extractor, "sessao", &plan);
    futures::pin_mut!(stream);

    assert!(stream.next().await.is_some());
    drop(stream);

    // Only the pair the consumer actually pulled was fetched.
    assert_eq!(fetcher.calls().len(), 1);
}

#[tokio::test]
async fn inverted_range_issues_no_fetches() {
    let fetcher = ScriptedFetcher::new(|_| Ok(card("Nunca")));
    let extractor = BidDataExtractor::new().unwrap();
    let plan = ExportPlan::new(
        date("02/02/2021"),
        date("01/02/2021"),
        vec!["RJ".to_string()],
    )
    .unwrap();

    let players: Vec<_> = player_stream(&fetcher, &extractor, "sessao", &plan)
        .collect()
        .await;

    assert!(players.is_empty());
    assert!(fetcher.calls().is_empty());
}
