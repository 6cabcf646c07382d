use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CategoryField, NumericField, Row, TableDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Loader failures worth matching on.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
}

/// Load a table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-separated with a header row (the usual source)
/// * `.json` – array of flat records, `[{ "total_bill": 16.99, ... }, ...]`
pub fn load_file(path: &Path) -> Result<TableDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

/// Every loaded table must provide the selectable columns.
fn check_required_columns(headers: &[String]) -> Result<()> {
    let required = NumericField::ALL
        .iter()
        .map(|f| f.as_str())
        .chain(CategoryField::ALL.iter().map(|f| f.as_str()));

    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()).into());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<TableDataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

/// Split from [`load_csv`] so tests can parse in-memory bytes.
fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<TableDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();
    check_required_columns(&headers)?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        // Cells stay raw text; short rows simply lack the trailing columns.
        let values: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(Row { values });
    }

    Ok(TableDataset {
        rows,
        column_names: headers,
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<TableDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "total_bill": 16.99, "tip": 1.01, "sex": "Female",
///     "smoker": "No", "day": "Sun", "time": "Dinner", "size": 2 },
///   ...
/// ]
/// ```
fn parse_json(text: &str) -> Result<TableDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut values = BTreeMap::new();
        for (key, val) in obj {
            if !column_names.iter().any(|c| c == key) {
                column_names.push(key.clone());
            }
            values.insert(key.clone(), json_to_cell(val));
        }
        rows.push(Row { values });
    }

    check_required_columns(&column_names)?;
    Ok(TableDataset { rows, column_names })
}

/// Flatten a JSON scalar into the raw-string cell representation.
fn json_to_cell(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "total_bill,tip,sex,smoker,day,time,size";

    #[test]
    fn csv_keeps_raw_strings_and_header_order() {
        let data = format!("{HEADER}\n16.99,1.01,Female,No,Sun,Dinner,2\n");
        let dataset = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.column_names[0], "total_bill");
        assert_eq!(dataset.column_names[4], "day");
        assert_eq!(dataset.rows[0].get("total_bill"), Some("16.99"));
        assert_eq!(dataset.rows[0].get("day"), Some("Sun"));
    }

    #[test]
    fn csv_missing_required_column_fails() {
        let data = "total_bill,tip,sex,smoker,day,time\n10.0,1.0,Male,No,Sun,Dinner\n";
        let err = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingColumn(col)) if col == "size"
        ));
    }

    #[test]
    fn json_records_stringify_scalars() {
        let text = r#"[{"total_bill": 16.99, "tip": 1.01, "sex": "Female",
                        "smoker": false, "day": "Sun", "time": "Dinner", "size": 2}]"#;
        let dataset = parse_json(text).unwrap();

        assert_eq!(dataset.rows[0].get("total_bill"), Some("16.99"));
        assert_eq!(dataset.rows[0].get("smoker"), Some("false"));
        assert_eq!(dataset.rows[0].get("size"), Some("2"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("tips.parquet")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedExtension(_))
        ));
    }
}
