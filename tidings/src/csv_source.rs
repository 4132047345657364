use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use tidings_core::connector::NewsProvider;
use tidings_core::{NewsQuery, NewsRecord, TidingsError};

const NAME: &str = "csv";

#[derive(Debug, Deserialize)]
struct Row {
    headline: String,
    publisher: String,
    date: String,
    #[serde(default)]
    stock: Option<String>,
}

/// [`NewsProvider`] reading a headline CSV file.
///
/// The file needs a header row with `headline`, `publisher` and `date`
/// columns; a `stock` column tags each article with its ticker. Other columns
/// are ignored. Dates are read from their leading `YYYY-MM-DD`, so timestamps
/// such as `2020-06-05 10:30:54-04:00` are accepted. Rows with a blank
/// headline carry no text to score and are skipped.
///
/// The file is re-read on every call.
#[derive(Debug, Clone)]
pub struct CsvNewsSource {
    path: PathBuf,
}

impl CsvNewsSource {
    /// Source backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse headline CSV data into records sorted by date.
    ///
    /// Rows sharing a date keep their file order.
    ///
    /// # Errors
    /// Returns `DataSource` for malformed CSV, a missing required column or an
    /// unparseable date. The message names the line.
    pub fn parse_records<R: Read>(reader: R) -> Result<Vec<NewsRecord>, TidingsError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut out = Vec::new();
        for (i, row) in rdr.deserialize::<Row>().enumerate() {
            // header is line 1
            let line = i + 2;
            let row = row.map_err(|e| TidingsError::data_source(NAME, format!("line {line}: {e}")))?;
            if row.headline.is_empty() {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "tidings::csv", line, "skipping blank headline");
                continue;
            }
            let date = parse_date(&row.date)
                .ok_or_else(|| {
                    TidingsError::data_source(NAME, format!("line {line}: bad date '{}'", row.date))
                })?;
            let mut record = NewsRecord::new(date, row.headline, row.publisher);
            if let Some(stock) = row.stock.filter(|s| !s.is_empty()) {
                record = record.with_ticker(stock);
            }
            out.push(record);
        }
        out.sort_by_key(|r| r.date);
        Ok(out)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[async_trait]
impl NewsProvider for CsvNewsSource {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsRecord>, TidingsError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            TidingsError::data_source(NAME, format!("{}: {e}", self.path.display()))
        })?;
        let mut records = Self::parse_records(bytes.as_slice())?;
        records.retain(|r| query.matches(r));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "tidings::csv",
            path = %self.path.display(),
            records = records.len(),
            "loaded headlines"
        );
        Ok(records)
    }
}
