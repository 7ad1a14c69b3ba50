//! Dataset Export
//!
//! Writes the visible order rows as CSV and the whole dataset as a JSON
//! snapshot. Both work against any `io::Write`, so the web UI can build a
//! download from an in-memory buffer and the CLI can stream to a file.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

use crate::store::{Dataset, DateRange, OrderRow, RandomSource, Store};

/// Errors that can occur while exporting
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Column order of the orders CSV
pub const ORDER_CSV_HEADER: [&str; 7] = [
    "id",
    "order_number",
    "customer",
    "product",
    "amount",
    "status",
    "date",
];

/// Write rows as CSV with a header line
pub fn write_orders_csv<'a, W, I>(writer: W, rows: I) -> ExportResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a OrderRow>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(ORDER_CSV_HEADER)?;

    let mut count = 0usize;
    for row in rows {
        csv_writer.write_record([
            row.id.to_string(),
            row.order_number.clone(),
            row.customer.clone(),
            row.product.clone(),
            row.amount.to_string(),
            row.status.to_string(),
            row.date.to_string(),
        ])?;
        count += 1;
    }
    csv_writer.flush()?;

    tracing::debug!(rows = count, "Exported orders as CSV");
    Ok(())
}

/// CSV of the rows matching the store's current search, as a string
pub fn orders_csv<R: RandomSource>(store: &Store<R>) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_orders_csv(&mut buf, store.filtered_orders())?;
    // csv only ever writes the UTF-8 it was given
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Snapshot of what the dashboard is showing
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub exported_at: String,
    pub date_range: DateRange,
    pub search_query: &'a str,
    pub dataset: &'a Dataset,
}

impl<'a> Snapshot<'a> {
    pub fn of<R: RandomSource>(store: &'a Store<R>) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            date_range: store.date_range(),
            search_query: store.search_query(),
            dataset: store.dataset(),
        }
    }
}

/// Pretty-printed JSON snapshot
pub fn write_snapshot_json<W: Write, R: RandomSource>(
    writer: W,
    store: &Store<R>,
) -> ExportResult<()> {
    serde_json::to_writer_pretty(writer, &Snapshot::of(store))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ScriptedRandom, User};

    fn ready_store() -> Store<ScriptedRandom> {
        let mut store = Store::with_source(ScriptedRandom::constant(0.5));
        store.login(User::demo());
        store.generate_data();
        store
    }

    #[test]
    fn test_orders_csv_all_rows() {
        let store = ready_store();
        let csv = orders_csv(&store).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "id,order_number,customer,product,amount,status,date");
        assert_eq!(
            lines[1],
            "1,ORD-10000,Alice,Sample Product,100,Completed,2024-01-15"
        );
    }

    #[test]
    fn test_orders_csv_respects_search() {
        let mut store = ready_store();
        store.set_search("david");
        let csv = orders_csv(&store).unwrap();
        let body: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(body.len(), 2);
        assert!(body.iter().all(|l| l.contains(",David,")));
    }

    #[test]
    fn test_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let store = ready_store();

        let file = std::fs::File::create(&path).unwrap();
        write_orders_csv(file, store.orders()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 10);
    }

    #[test]
    fn test_snapshot_json() {
        let mut store = ready_store();
        store.set_search("Bob");
        let mut buf = Vec::new();
        write_snapshot_json(&mut buf, &store).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["date_range"], "30d");
        assert_eq!(value["search_query"], "Bob");
        assert_eq!(value["dataset"]["kpis"].as_array().unwrap().len(), 4);
        assert_eq!(value["dataset"]["orders"][0]["date"], "2024-01-15");
        assert_eq!(value["dataset"]["orders"][1]["status"], "Processing");
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: ExportError = io_err.into();
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
