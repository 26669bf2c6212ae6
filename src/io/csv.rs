//! CSV adapters for raw OHLCV tables and processed feature tables.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Writer};
use serde_json::{Map, Number, Value};

use crate::error::{EngineError, PipelineError, PipelineResult};
use crate::models::{format_timestamp, Bar, Feature, PriceSeries, ScoredRow};

const REQUIRED_COLUMNS: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];

/// Parse a date or date-time cell into UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Extra header rows some exporters emit under the real header.
fn is_header_continuation(record: &StringRecord) -> bool {
    matches!(
        record.get(0).map(|c| c.trim().to_ascii_lowercase()).as_deref(),
        Some("ticker") | Some("date")
    )
}

/// Read a raw table: timestamp in the first column, then Open, High, Low,
/// Close, Volume in any order.
pub fn read_price_series(path: &Path) -> PipelineResult<PriceSeries> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut indices = [0usize; 5];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = column_index(&headers, name).ok_or_else(|| {
            EngineError::MalformedSeries(format!("missing required column {}", name))
        })?;
    }

    let mut bars = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_header_continuation(&record) {
            continue;
        }
        let line = record_line(&record);

        let ts_raw = record.get(0).unwrap_or_default();
        let timestamp = parse_timestamp(ts_raw).ok_or_else(|| PipelineError::MalformedRecord {
            line,
            reason: format!("unparseable timestamp {:?}", ts_raw),
        })?;

        let mut values = [0.0f64; 5];
        for ((value, &idx), name) in values.iter_mut().zip(&indices).zip(REQUIRED_COLUMNS) {
            let cell = record.get(idx).unwrap_or_default().trim();
            *value = cell.parse::<f64>().map_err(|_| PipelineError::MalformedRecord {
                line,
                reason: format!("column {} has non-numeric value {:?}", name, cell),
            })?;
        }
        let [open, high, low, close, volume] = values;
        bars.push(Bar::new(timestamp, open, high, low, close, volume));
    }

    Ok(PriceSeries::new(bars)?)
}

/// Header of a processed table, in column order.
pub fn enriched_header() -> Vec<&'static str> {
    let mut header = vec!["Date", "Open", "High", "Low", "Close", "Volume"];
    header.extend(Feature::ALL.iter().map(Feature::column_name));
    header.push("Signal_Score");
    header.push("Signal_Label");
    header
}

/// Write scored rows as a processed table.
pub fn write_enriched(path: &Path, rows: &[ScoredRow]) -> PipelineResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(enriched_header())?;

    for row in rows {
        let bar = &row.features.bar;
        let mut record = vec![
            format_timestamp(&bar.timestamp),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.volume.to_string(),
        ];
        record.extend(
            Feature::ALL
                .iter()
                .map(|f| row.features.get(*f).map(|v| v.to_string()).unwrap_or_default()),
        );
        record.push(row.signal.score.to_string());
        record.push(row.signal.label.to_string());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn cell_to_value(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match cell.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(cell.to_string()),
    }
}

/// Read any table back as one JSON object per row.
pub fn read_records(path: &Path) -> PipelineResult<Vec<Map<String, Value>>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, cell)| (h.to_string(), cell_to_value(cell.trim())))
            .collect();
        records.push(row);
    }
    Ok(records)
}
