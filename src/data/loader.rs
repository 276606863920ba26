use std::fs::File;
use std::io::Read;
use std::path::Path;

use arrow::array::{
    Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::DataLoadError;
use super::model::{LaunchDataset, LaunchRecord, Outcome};

// Column names as they appear in the launch table.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT: &str = "Flight Number";
pub const COL_VERSION: &str = "Booster Version";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row plus one launch per line (the published dataset)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let source = path.display().to_string();
    let io_error = |source: std::io::Error| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    match ext.as_str() {
        "csv" => {
            let file = File::open(path).map_err(io_error)?;
            load_csv_reader(file, &source)
        }
        "json" => {
            let text = std::fs::read_to_string(path).map_err(io_error)?;
            load_json_str(&text, &source)
        }
        "parquet" | "pq" => {
            let file = File::open(path).map_err(io_error)?;
            load_parquet_file(file, &source)
        }
        other => Err(DataLoadError::UnsupportedFormat(other.to_string())),
    }
}

fn finish(records: Vec<LaunchRecord>, source: &str) -> Result<LaunchDataset, DataLoadError> {
    let dataset = LaunchDataset::from_records(records, source)
        .ok_or_else(|| DataLoadError::Empty(source.to_string()))?;
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {}..{} kg)",
        dataset.len(),
        source,
        dataset.sites().len(),
        dataset.payload_bounds().min,
        dataset.payload_bounds().max
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Cell parsing shared by every format
// ---------------------------------------------------------------------------

fn invalid(row: usize, column: &'static str, value: impl ToString) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    }
}

fn parse_site(raw: &str, row: usize) -> Result<String, DataLoadError> {
    let site = raw.trim();
    if site.is_empty() {
        return Err(invalid(row, COL_SITE, raw));
    }
    Ok(site.to_string())
}

fn check_payload(mass: f64, row: usize) -> Result<f64, DataLoadError> {
    if mass.is_finite() {
        Ok(mass)
    } else {
        Err(invalid(row, COL_PAYLOAD, mass))
    }
}

fn parse_payload(raw: &str, row: usize) -> Result<f64, DataLoadError> {
    let mass = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(row, COL_PAYLOAD, raw))?;
    check_payload(mass, row)
}

/// Accepts `0`/`1` and their float spellings (`1.0`), as pandas may write either.
fn class_from_f64(class: f64) -> Option<Outcome> {
    if class.fract() == 0.0 {
        Outcome::from_class(class as i64)
    } else {
        None
    }
}

fn parse_class(raw: &str, row: usize) -> Result<Outcome, DataLoadError> {
    let raw_trimmed = raw.trim();
    let outcome = match raw_trimmed.parse::<i64>() {
        Ok(i) => Outcome::from_class(i),
        Err(_) => raw_trimmed.parse::<f64>().ok().and_then(class_from_f64),
    };
    outcome.ok_or_else(|| invalid(row, COL_CLASS, raw))
}

/// Optional columns are display-only: unparsable values become `None`.
fn parse_flight_number(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().and_then(flight_from_f64))
}

/// Whole numbers within `u32` only; anything else is `None`, never saturated.
fn flight_from_f64(flight: f64) -> Option<u32> {
    let in_range = (0.0..=f64::from(u32::MAX)).contains(&flight);
    (in_range && flight.fract() == 0.0).then(|| flight as u32)
}

fn non_empty(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header positions of the columns we read.
struct CsvColumns {
    site: usize,
    payload: usize,
    class: usize,
    category: usize,
    flight: Option<usize>,
    version: Option<usize>,
}

impl CsvColumns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(DataLoadError::MissingColumn(name));
        Ok(CsvColumns {
            site: require(COL_SITE)?,
            payload: require(COL_PAYLOAD)?,
            class: require(COL_CLASS)?,
            category: require(COL_CATEGORY)?,
            flight: find(COL_FLIGHT),
            version: find(COL_VERSION),
        })
    }

    fn parse(&self, record: &csv::StringRecord, row: usize) -> Result<LaunchRecord, DataLoadError> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        Ok(LaunchRecord {
            site: parse_site(cell(self.site), row)?,
            payload_mass_kg: parse_payload(cell(self.payload), row)?,
            outcome: parse_class(cell(self.class), row)?,
            booster_category: cell(self.category).trim().to_string(),
            flight_number: self.flight.and_then(|idx| parse_flight_number(cell(idx))),
            booster_version: self.version.and_then(|idx| non_empty(cell(idx))),
        })
    }
}

/// Load CSV launch records from any reader. Extra columns (such as the
/// unnamed pandas index) are ignored; column order does not matter.
pub fn load_csv_reader<R: Read>(reader: R, source: &str) -> Result<LaunchDataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let columns = CsvColumns::resolve(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        records.push(columns.parse(&record, row_no + 1)?);
    }

    finish(records, source)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
pub fn load_json_str(text: &str, source: &str) -> Result<LaunchDataset, DataLoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows = root
        .as_array()
        .ok_or_else(|| DataLoadError::Schema("expected a top-level JSON array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let row_no = i + 1;
        let obj = row
            .as_object()
            .ok_or_else(|| DataLoadError::Schema(format!("row {row_no} is not a JSON object")))?;
        records.push(json_record(obj, row_no)?);
    }

    finish(records, source)
}

fn json_field<'a>(
    obj: &'a Map<String, JsonValue>,
    column: &'static str,
) -> Result<&'a JsonValue, DataLoadError> {
    obj.get(column).ok_or(DataLoadError::MissingColumn(column))
}

fn json_record(obj: &Map<String, JsonValue>, row: usize) -> Result<LaunchRecord, DataLoadError> {
    let site = json_field(obj, COL_SITE)?;
    let site = site
        .as_str()
        .ok_or_else(|| invalid(row, COL_SITE, site))
        .and_then(|s| parse_site(s, row))?;

    let payload = json_field(obj, COL_PAYLOAD)?;
    let payload_mass_kg = payload
        .as_f64()
        .ok_or_else(|| invalid(row, COL_PAYLOAD, payload))
        .and_then(|m| check_payload(m, row))?;

    let class = json_field(obj, COL_CLASS)?;
    let outcome = match class.as_i64() {
        Some(i) => Outcome::from_class(i),
        None => class.as_f64().and_then(class_from_f64),
    }
    .ok_or_else(|| invalid(row, COL_CLASS, class))?;

    let category = json_field(obj, COL_CATEGORY)?;
    let booster_category = category
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| invalid(row, COL_CATEGORY, category))?;

    let flight_number = obj.get(COL_FLIGHT).and_then(|v| match v {
        JsonValue::Number(n) => n.as_f64().and_then(flight_from_f64),
        JsonValue::String(s) => parse_flight_number(s),
        _ => None,
    });
    let booster_version = obj
        .get(COL_VERSION)
        .and_then(JsonValue::as_str)
        .and_then(non_empty);

    Ok(LaunchRecord {
        site,
        payload_mass_kg,
        outcome,
        booster_category,
        flight_number,
        booster_version,
    })
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file whose flat columns carry the launch table.
///
/// Strings may be `Utf8` or `LargeUtf8`; numeric columns may be any of
/// `Int32`, `Int64`, `Float32`, `Float64`. Works with files written by both
/// pandas (`df.to_parquet()`) and polars.
pub fn load_parquet_file(file: File, source: &str) -> Result<LaunchDataset, DataLoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let column = |name: &'static str| {
            schema
                .index_of(name)
                .map(|idx| batch.column(idx).clone())
                .map_err(|_| DataLoadError::MissingColumn(name))
        };
        let optional = |name: &str| schema.index_of(name).ok().map(|idx| batch.column(idx).clone());

        let site_col = column(COL_SITE)?;
        let payload_col = column(COL_PAYLOAD)?;
        let class_col = column(COL_CLASS)?;
        let category_col = column(COL_CATEGORY)?;
        let flight_col = optional(COL_FLIGHT);
        let version_col = optional(COL_VERSION);

        for i in 0..batch.num_rows() {
            let row = records.len() + 1;
            let site = string_at(&site_col, i)
                .ok_or_else(|| invalid(row, COL_SITE, describe_cell(&site_col, i)))?;
            let payload = f64_at(&payload_col, i)
                .ok_or_else(|| invalid(row, COL_PAYLOAD, describe_cell(&payload_col, i)))?;
            let outcome = f64_at(&class_col, i)
                .and_then(class_from_f64)
                .ok_or_else(|| invalid(row, COL_CLASS, describe_cell(&class_col, i)))?;
            let booster_category = string_at(&category_col, i)
                .ok_or_else(|| invalid(row, COL_CATEGORY, describe_cell(&category_col, i)))?;

            records.push(LaunchRecord {
                site: parse_site(&site, row)?,
                payload_mass_kg: check_payload(payload, row)?,
                outcome,
                booster_category: booster_category.trim().to_string(),
                flight_number: flight_col
                    .as_ref()
                    .and_then(|c| f64_at(c, i))
                    .and_then(flight_from_f64),
                booster_version: version_col
                    .as_ref()
                    .and_then(|c| string_at(c, i))
                    .and_then(|s| non_empty(&s)),
            });
        }
    }

    finish(records, source)
}

// -- Arrow helpers --

fn string_at(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
        Some(arr.value(row).to_string())
    } else {
        col.as_any()
            .downcast_ref::<LargeStringArray>()
            .map(|arr| arr.value(row).to_string())
    }
}

fn f64_at(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Some(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Some(arr.value(row) as f64)
    } else if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Some(arr.value(row) as f64)
    } else {
        any.downcast_ref::<Int32Array>()
            .map(|arr| arr.value(row) as f64)
    }
}

fn describe_cell(col: &ArrayRef, row: usize) -> String {
    if col.is_null(row) {
        "<null>".to_string()
    } else {
        format!("<{:?}>", col.data_type())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,Mission Outcome,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,Success,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,Success,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,Success,1,500.0,F9 v1.1  B1003,v1.1
3,4,KSC LC-39A,Success,1,2490.0,F9 FT  B1031.1,FT
";

    #[test]
    fn csv_loads_records_and_summaries() {
        let ds = load_csv_reader(SAMPLE_CSV.as_bytes(), "sample").unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.source, "sample");

        let first = &ds.records()[0];
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.payload_mass_kg, 0.0);
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_category, "v1.0");
        assert_eq!(first.flight_number, Some(1));
        assert_eq!(first.booster_version.as_deref(), Some("F9 v1.0  B0003"));

        let sites: Vec<&str> = ds.sites().sites().collect();
        assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
        assert_eq!(ds.payload_bounds().min, 0.0);
        assert_eq!(ds.payload_bounds().max, 2490.0);
    }

    #[test]
    fn csv_without_optional_columns() {
        let csv = "class,Booster Version Category,Payload Mass (kg),Launch Site\n1,B5,15600,KSC LC-39A\n";
        let ds = load_csv_reader(csv.as_bytes(), "minimal").unwrap();
        let rec = &ds.records()[0];
        assert_eq!(rec.outcome, Outcome::Success);
        assert_eq!(rec.payload_mass_kg, 15600.0);
        assert_eq!(rec.flight_number, None);
        assert_eq!(rec.booster_version, None);
    }

    #[test]
    fn csv_missing_required_column() {
        let csv = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
        let err = load_csv_reader(csv.as_bytes(), "broken").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(COL_PAYLOAD)), "{err}");
    }

    #[test]
    fn csv_rejects_bad_class_and_payload() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,100,2,FT\n";
        match load_csv_reader(csv.as_bytes(), "bad-class").unwrap_err() {
            DataLoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, COL_CLASS);
                assert_eq!(value, "2");
            }
            other => panic!("unexpected error: {other}"),
        }

        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,heavy,1,FT\n";
        let err = load_csv_reader(csv.as_bytes(), "bad-payload").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: COL_PAYLOAD, .. }));
    }

    #[test]
    fn csv_accepts_float_class() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,100,1.0,FT\n";
        let ds = load_csv_reader(csv.as_bytes(), "float-class").unwrap();
        assert_eq!(ds.records()[0].outcome, Outcome::Success);
    }

    #[test]
    fn csv_header_only_is_empty_error() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let err = load_csv_reader(csv.as_bytes(), "header-only").unwrap_err();
        assert!(matches!(err, DataLoadError::Empty(_)));
    }

    #[test]
    fn json_records_orient() {
        let text = r#"[
            {"Flight Number": 7, "Launch Site": "CCAFS LC-40", "class": 1,
             "Payload Mass (kg)": 2296.0, "Booster Version": "F9 v1.1",
             "Booster Version Category": "v1.1"},
            {"Launch Site": "VAFB SLC-4E", "class": 0,
             "Payload Mass (kg)": 500, "Booster Version Category": "v1.1"}
        ]"#;
        let ds = load_json_str(text, "json").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].flight_number, Some(7));
        assert_eq!(ds.records()[1].outcome, Outcome::Failure);
        assert_eq!(ds.records()[1].payload_mass_kg, 500.0);
    }

    #[test]
    fn json_missing_column_and_bad_root() {
        let text = r#"[{"Launch Site": "KSC LC-39A", "class": 1, "Payload Mass (kg)": 1.0}]"#;
        let err = load_json_str(text, "json").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(COL_CATEGORY)));

        let err = load_json_str(r#"{"rows": []}"#, "json").unwrap_err();
        assert!(matches!(err, DataLoadError::Schema(_)));
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spacex_launch_dash.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        drop(file);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 4);

        let err = load_file(&dir.path().join("launches.xlsx")).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedFormat(ref ext) if ext == "xlsx"));

        let err = load_file(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }

    const HEADER: &str = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";

    fn csv_error(row: &str) -> DataLoadError {
        let csv = format!("{HEADER}{row}\n");
        load_csv_reader(csv.as_bytes(), "csv").unwrap_err()
    }

    #[test]
    fn csv_rejects_non_finite_payload() {
        for raw in ["NaN", "inf", "-inf"] {
            match csv_error(&format!("KSC LC-39A,{raw},1,FT")) {
                DataLoadError::InvalidValue { row, column, .. } => {
                    assert_eq!(row, 1);
                    assert_eq!(column, COL_PAYLOAD, "{raw}");
                }
                other => panic!("{raw}: unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn csv_rejects_blank_site() {
        let err = csv_error("   ,100,1,FT");
        assert!(matches!(err, DataLoadError::InvalidValue { column: COL_SITE, .. }), "{err}");
    }

    #[test]
    fn csv_rejects_ragged_rows() {
        let err = csv_error("KSC LC-39A,100");
        assert!(matches!(err, DataLoadError::Csv(_)), "{err}");
    }

    #[test]
    fn flight_numbers_never_saturate() {
        assert_eq!(parse_flight_number("12"), Some(12));
        assert_eq!(parse_flight_number("12.0"), Some(12));
        assert_eq!(parse_flight_number("4294967295"), Some(u32::MAX));
        assert_eq!(parse_flight_number("4294967296"), None);
        assert_eq!(parse_flight_number("1e12"), None);
        assert_eq!(parse_flight_number("-1"), None);
        assert_eq!(parse_flight_number("NaN"), None);
        assert_eq!(flight_from_f64(7.5), None);
    }

    #[test]
    fn json_rejects_malformed_text_and_bad_cells() {
        let err = load_json_str("[{", "json").unwrap_err();
        assert!(matches!(err, DataLoadError::Json(_)), "{err}");

        let text = r#"[{"Launch Site": "", "class": 1, "Payload Mass (kg)": 1.0,
                       "Booster Version Category": "FT"}]"#;
        let err = load_json_str(text, "json").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: COL_SITE, .. }), "{err}");

        let text = r#"[{"Launch Site": "KSC LC-39A", "class": 1, "Payload Mass (kg)": "heavy",
                       "Booster Version Category": "FT"}]"#;
        let err = load_json_str(text, "json").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: COL_PAYLOAD, .. }), "{err}");

        let text = r#"[{"Launch Site": "KSC LC-39A", "class": 3, "Payload Mass (kg)": 1.0,
                       "Booster Version Category": "FT"}]"#;
        let err = load_json_str(text, "json").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: COL_CLASS, .. }), "{err}");
    }

    fn write_parquet(dir: &Path, fields: Vec<Field>, columns: Vec<ArrayRef>) -> std::path::PathBuf {
        let schema = Arc::new(Schema::new(fields));
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
        let path = dir.join("launches.parquet");
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        path
    }

    #[test]
    fn parquet_rejects_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.parquet");
        std::fs::write(&path, b"definitely not parquet").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Parquet(_)), "{err}");
    }

    #[test]
    fn parquet_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(
            dir.path(),
            vec![
                Field::new(COL_SITE, DataType::Utf8, false),
                Field::new(COL_PAYLOAD, DataType::Float64, false),
                Field::new(COL_CATEGORY, DataType::Utf8, false),
            ],
            vec![
                Arc::new(StringArray::from(vec!["KSC LC-39A"])),
                Arc::new(Float64Array::from(vec![5300.0])),
                Arc::new(StringArray::from(vec!["FT"])),
            ],
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(COL_CLASS)), "{err}");
    }

    #[test]
    fn parquet_rejects_null_and_mistyped_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(
            dir.path(),
            vec![
                Field::new(COL_SITE, DataType::Utf8, false),
                Field::new(COL_PAYLOAD, DataType::Float64, true),
                Field::new(COL_CLASS, DataType::Int64, false),
                Field::new(COL_CATEGORY, DataType::Utf8, false),
            ],
            vec![
                Arc::new(StringArray::from(vec!["KSC LC-39A", "VAFB SLC-4E"])),
                Arc::new(Float64Array::from(vec![Some(5300.0), None])),
                Arc::new(Int64Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["FT", "B4"])),
            ],
        );
        match load_file(&path).unwrap_err() {
            DataLoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, COL_PAYLOAD);
                assert_eq!(value, "<null>");
            }
            other => panic!("unexpected error: {other}"),
        }

        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(
            dir.path(),
            vec![
                Field::new(COL_SITE, DataType::Utf8, false),
                Field::new(COL_PAYLOAD, DataType::Float64, false),
                Field::new(COL_CLASS, DataType::Utf8, false),
                Field::new(COL_CATEGORY, DataType::Utf8, false),
            ],
            vec![
                Arc::new(StringArray::from(vec!["KSC LC-39A"])),
                Arc::new(Float64Array::from(vec![5300.0])),
                Arc::new(StringArray::from(vec!["yes"])),
                Arc::new(StringArray::from(vec!["FT"])),
            ],
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: COL_CLASS, .. }), "{err}");
    }

    #[test]
    fn parquet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(
            dir.path(),
            vec![
                Field::new(COL_SITE, DataType::Utf8, false),
                Field::new(COL_PAYLOAD, DataType::Float64, false),
                Field::new(COL_CLASS, DataType::Int64, false),
                Field::new(COL_CATEGORY, DataType::Utf8, false),
                Field::new(COL_FLIGHT, DataType::Float64, false),
            ],
            vec![
                Arc::new(StringArray::from(vec!["KSC LC-39A", "CCAFS SLC-40"])),
                Arc::new(Float64Array::from(vec![5300.0, 3669.0])),
                Arc::new(Int64Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["FT", "B4"])),
                Arc::new(Float64Array::from(vec![21.0, 1e12])),
            ],
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records()[0].flight_number, Some(21));
        assert_eq!(ds.records()[1].flight_number, None);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].site, "KSC LC-39A");
        assert_eq!(ds.records()[1].outcome, Outcome::Failure);
        assert_eq!(ds.payload_bounds().min, 3669.0);
    }
}
