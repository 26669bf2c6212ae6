//! Flat-file boundary adapters.

pub mod csv;

pub use self::csv::{enriched_header, parse_timestamp, read_price_series, read_records, write_enriched};
