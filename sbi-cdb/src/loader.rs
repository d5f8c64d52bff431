//! Loading a CDB bridge inventory export into a [`BridgeDataset`].
//!
//! # Normalization
//!
//! - Road classes go through the fixed synonym table in [`RoadClass::from_raw`];
//!   anything unmapped (including an empty cell) fails the load.
//! - A missing condition code becomes `-1`; a missing condition label becomes
//!   [`ConditionLabel::Unknown`]. Non-empty labels must be known.
//! - Year built and coordinates are trusted as published. Cells that do not
//!   parse as numbers are logged and coerced (year built to `None`,
//!   coordinates to NaN, condition code to `-1`).
//! - The observation year comes from its column when the header has one, and
//!   every cell must then be a year. Without the column every record gets
//!   [`SourceFormat::snapshot_year`].
//!
//! # Example CSV
//! ```text
//! Trieda cesty;Číslo cesty;Správcovské číslo mostu;Identifikačné číslo mostu;rok postavenia;stavebný stav - kód;Stavebný stav;LongitudeE;LatitudeN
//! diaľnica;D1;D1-001;M0001;1998;3;Dobrý;17,1234;48,15
//! ```

use crate::condition::{ConditionLabel, UNKNOWN_CONDITION_CODE};
use crate::dataset::BridgeDataset;
use crate::error::DataFormatError;
use crate::format::SourceFormat;
use crate::record::BridgeRecord;
use crate::road_class::RoadClass;
use csv::StringRecord;
use sbi_utils::numbers::{is_blank, parse_float, parse_int};
use sbi_utils::text;
use std::path::Path;

/// Positions of the selected columns within one particular file.
struct ColumnIndex {
    road_class: usize,
    road_number: usize,
    administrative_id: usize,
    bridge_id: usize,
    year_built: usize,
    condition_code: usize,
    condition_label: usize,
    longitude: usize,
    latitude: usize,
    observation_year: Option<usize>,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord, format: &SourceFormat) -> Result<Self, DataFormatError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| DataFormatError::MissingColumn(name.to_string()))
        };
        let columns = &format.columns;
        Ok(Self {
            road_class: require(&columns.road_class)?,
            road_number: require(&columns.road_number)?,
            administrative_id: require(&columns.administrative_id)?,
            bridge_id: require(&columns.bridge_id)?,
            year_built: require(&columns.year_built)?,
            condition_code: require(&columns.condition_code)?,
            condition_label: require(&columns.condition_label)?,
            longitude: require(&columns.longitude)?,
            latitude: require(&columns.latitude)?,
            observation_year: find(&columns.observation_year),
        })
    }
}

/// Load a dataset from a file on disk. `.gz` files are decompressed first.
pub fn load_path(path: &Path, format: &SourceFormat) -> Result<BridgeDataset, DataFormatError> {
    log::info!("[SBI Debug] loader: Reading {}", path.display());
    let bytes = text::read_path(path)?;
    load_bytes(&bytes, format)
}

/// Load a dataset from raw bytes in the configured encoding.
pub fn load_bytes(bytes: &[u8], format: &SourceFormat) -> Result<BridgeDataset, DataFormatError> {
    let decoded = text::decode(bytes, &format.encoding)?;
    load_str(&decoded, format)
}

/// Load a dataset from already-decoded text.
pub fn load_str(csv_data: &str, format: &SourceFormat) -> Result<BridgeDataset, DataFormatError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::locate(&headers, format)?;
    if index.observation_year.is_none() {
        log::info!(
            "[SBI Debug] loader: No '{}' column, using snapshot year {}",
            format.columns.observation_year,
            format.snapshot_year
        );
    }

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let r = result?;
        records.push(parse_row(&r, i + 1, &index, format)?);
    }

    let dataset = BridgeDataset::from_records(records);
    log::info!(
        "[SBI Debug] loader: Loaded {} bridge records for years {:?}",
        dataset.len(),
        dataset.observation_years()
    );
    Ok(dataset)
}

fn parse_row(
    r: &StringRecord,
    row: usize,
    index: &ColumnIndex,
    format: &SourceFormat,
) -> Result<BridgeRecord, DataFormatError> {
    let field = |i: usize| r.get(i).unwrap_or("").trim();

    let raw_class = field(index.road_class);
    let road_class =
        RoadClass::from_raw(raw_class).ok_or_else(|| DataFormatError::UnknownRoadClass {
            row,
            raw: raw_class.to_string(),
        })?;

    let raw_code = field(index.condition_code);
    let condition_code = if is_blank(raw_code) {
        UNKNOWN_CONDITION_CODE
    } else {
        parse_int(raw_code).unwrap_or_else(|| {
            log::warn!(
                "[SBI Debug] loader: Row {}: condition code '{}' is not a number, using {}",
                row,
                raw_code,
                UNKNOWN_CONDITION_CODE
            );
            UNKNOWN_CONDITION_CODE
        })
    };

    let raw_label = field(index.condition_label);
    let condition_label = if is_blank(raw_label) {
        ConditionLabel::Unknown
    } else {
        ConditionLabel::from_raw(raw_label).ok_or_else(|| {
            DataFormatError::UnknownConditionLabel {
                row,
                raw: raw_label.to_string(),
            }
        })?
    };

    let raw_year_built = field(index.year_built);
    let year_built = parse_int(raw_year_built);
    if year_built.is_none() && !is_blank(raw_year_built) {
        log::warn!(
            "[SBI Debug] loader: Row {}: year built '{}' is not a number",
            row,
            raw_year_built
        );
    }

    let observation_year = match index.observation_year {
        Some(i) => {
            let raw_year = field(i);
            parse_int(raw_year).ok_or_else(|| DataFormatError::MalformedObservationYear {
                row,
                raw: raw_year.to_string(),
            })?
        }
        None => format.snapshot_year,
    };

    Ok(BridgeRecord {
        road_class,
        road_number: field(index.road_number).to_string(),
        administrative_id: field(index.administrative_id).to_string(),
        bridge_id: field(index.bridge_id).to_string(),
        year_built,
        condition_code,
        condition_label,
        observation_year,
        lat: coordinate(field(index.latitude), row),
        lon: coordinate(field(index.longitude), row),
    })
}

fn coordinate(raw: &str, row: usize) -> f64 {
    parse_float(raw).unwrap_or_else(|| {
        log::warn!(
            "[SBI Debug] loader: Row {}: coordinate '{}' is not a number",
            row,
            raw
        );
        f64::NAN
    })
}
