//! Streaming export driver
//!
//! Walks the date × country product of an [`ExportPlan`] and lazily
//! yields tagged player records. Production and consumption are coupled:
//! the next fetch is only issued when the consumer pulls, so dropping the
//! stream early stops the run without issuing further requests.

use async_stream::stream;
use futures::Stream;
use tracing::{error, info};

use crate::domain::constants::dates::DATE_FORMAT;
use crate::domain::{ExportPlan, Player, SearchQuery};
use crate::infrastructure::bid_client::SearchResultFetcher;
use crate::infrastructure::html_parser::BidDataExtractor;

/// Lazily yield every player found across the plan's (date, country)
/// pairs, tagged with the originating country.
///
/// Dates ascend one calendar day at a time, both endpoints included;
/// countries follow the plan's list order within each date. One fetch is
/// in flight at a time. A failed fetch or extraction is logged and the
/// pair skipped; it never aborts the run.
pub fn player_stream<'a, F>(
    fetcher: &'a F,
    extractor: &'a BidDataExtractor,
    session: &'a str,
    plan: &'a ExportPlan,
) -> impl Stream<Item = Player> + 'a
where
    F: SearchResultFetcher + ?Sized,
{
    let country_count = plan.countries().len();

    stream! {
        for date in plan.dates() {
            let date_text = date.format(DATE_FORMAT).to_string();

            for (position, country) in plan.countries().iter().enumerate() {
                let query = SearchQuery::new(country.clone(), date_text.clone());

                let html = match fetcher.fetch_search_results(session, &query).await {
                    Ok(html) => html,
                    Err(e) => {
                        error!(
                            "Failed to fetch players for \"{}\" on \"{}\": {}",
                            country, date_text, e
                        );
                        continue;
                    }
                };

                let players = match extractor.extract_players(&html) {
                    Ok(players) => players,
                    Err(e) => {
                        error!(
                            "Failed to parse players for \"{}\" on \"{}\": {}",
                            country, date_text, e
                        );
                        continue;
                    }
                };

                info!(
                    "[{} {} {}/{}] Found {} player(s)",
                    date_text,
                    country,
                    position + 1,
                    country_count,
                    players.len()
                );

                for mut player in players {
                    player.country = country.clone();
                    yield player;
                }
            }
        }
    }
}
