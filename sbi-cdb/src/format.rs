//! Source file configuration.
//!
//! Delimiter, text encoding and header names differ between CDB export
//! vintages, so none of them are baked into the loader.

/// Header names of the fields the loader selects.
///
/// Columns are located by name, so reordering or adding columns in the
/// export does not affect loading.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnNames {
    pub road_class: String,
    pub road_number: String,
    pub administrative_id: String,
    pub bridge_id: String,
    pub year_built: String,
    pub condition_code: String,
    pub condition_label: String,
    pub longitude: String,
    pub latitude: String,
    /// Present only in multi-year exports.
    pub observation_year: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            road_class: "Trieda cesty".to_string(),
            road_number: "Číslo cesty".to_string(),
            administrative_id: "Správcovské číslo mostu".to_string(),
            bridge_id: "Identifikačné číslo mostu".to_string(),
            year_built: "rok postavenia".to_string(),
            condition_code: "stavebný stav - kód".to_string(),
            condition_label: "Stavebný stav".to_string(),
            longitude: "LongitudeE".to_string(),
            latitude: "LatitudeN".to_string(),
            observation_year: "rok".to_string(),
        }
    }
}

/// How to read a bridge inventory export.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFormat {
    /// Field delimiter byte
    pub delimiter: u8,
    /// WHATWG encoding label of the file
    pub encoding: String,
    pub columns: ColumnNames,
    /// Observation year assigned to every record when the export has no
    /// observation-year column (single-snapshot exports).
    pub snapshot_year: i32,
}

impl Default for SourceFormat {
    fn default() -> Self {
        Self {
            delimiter: b';',
            encoding: "windows-1250".to_string(),
            columns: ColumnNames::default(),
            snapshot_year: 2021,
        }
    }
}

impl SourceFormat {
    /// Same format, but for a UTF-8 file. Handy for fixtures.
    pub fn utf8() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            ..Self::default()
        }
    }
}
