//! Tests for the CSV sink: fixed column order, empty cells for missing
//! fields, and header-only output for empty runs.

use futures::stream;
use tempfile::tempdir;

use bid_scraper::domain::Player;
use bid_scraper::CsvExporter;

#[tokio::test]
async fn exports_header_and_rows_in_fixed_column_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("players.csv");

    let players = vec![
        Player {
            country: "RJ".to_string(),
            name: Some("Fulano de Tal".to_string()),
            team: Some("Flamengo".to_string()),
            id: Some("123456".to_string()),
            contract_type: Some("Cedido".to_string()),
            start_date: Some("01/02/2021".to_string()),
            birthday: Some("15/05/1998".to_string()),
            publication_date: Some("01/02/2021".to_string()),
        },
        Player {
            country: "SP".to_string(),
            ..Player::default()
        },
    ];

    let mut exporter = CsvExporter::create(&path).unwrap();
    let written = exporter.write_stream(stream::iter(players)).await.unwrap();
    exporter.finish().unwrap();

    assert_eq!(written, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "country,name,team,id,contractType,startDate,birthday,publicationDate"
    );
    assert_eq!(
        lines.next().unwrap(),
        "RJ,Fulano de Tal,Flamengo,123456,Cedido,01/02/2021,15/05/1998,01/02/2021"
    );
    assert_eq!(lines.next().unwrap(), "SP,,,,,,,");
    assert!(lines.next().is_none());
}

#[tokio::test]
async fn empty_stream_still_writes_the_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let mut exporter = CsvExporter::create(&path).unwrap();
    let written = exporter
        .write_stream(stream::iter(Vec::<Player>::new()))
        .await
        .unwrap();
    exporter.finish().unwrap();

    assert_eq!(written, 0);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents.trim_end(),
        "country,name,team,id,contractType,startDate,birthday,publicationDate"
    );
}
