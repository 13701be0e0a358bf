//! CSV export sink
//!
//! Consumes the player stream and writes one row per record as it
//! arrives; nothing is buffered beyond the writer's own block, so the
//! file grows while the scrape is still running.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use futures::{Stream, StreamExt};
use thiserror::Error;

use crate::domain::Player;

/// Column order of the exported file.
const HEADER: [&str; 8] = [
    "country",
    "name",
    "team",
    "id",
    "contractType",
    "startDate",
    "birthday",
    "publicationDate",
];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
}

/// Streaming CSV writer for player records
pub struct CsvExporter {
    writer: Writer<File>,
}

impl CsvExporter {
    /// Create or truncate the output file and write the header row.
    ///
    /// The header is written eagerly so an export that finds no players
    /// still produces a well-formed file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let file = File::create(path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(HEADER)?;

        Ok(Self { writer })
    }

    /// Drain the stream into the file, one row per record, and return the
    /// number of records written. Missing fields become empty cells.
    pub async fn write_stream<S>(&mut self, players: S) -> Result<u64, ExportError>
    where
        S: Stream<Item = Player>,
    {
        futures::pin_mut!(players);

        let mut written = 0u64;
        while let Some(player) = players.next().await {
            self.writer.serialize(player)?;
            written += 1;
        }

        Ok(written)
    }

    /// Flush buffered rows and close the exporter.
    pub fn finish(mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
