//! Sensor package decoding from JSON and CSV sources.
//!
//! A package batch is the wire form the dispatcher consumes: one workout
//! code plus its ordered readings per record. Decoding failures abort the
//! batch read; per-record validation belongs to the dispatcher.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DecodeError, FitrsError, Result};

/// One sensor package: a workout code plus its ordered readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    /// Short activity code, e.g. "RUN".
    pub workout_type: String,
    /// Ordered numeric readings for the variant's fields.
    pub data: Vec<f64>,
}

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    /// Array of `{"workout_type": ..., "data": [...]}` objects.
    Json,
    /// Headerless rows of `CODE,reading,reading,...`.
    Csv,
}

impl PackageFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(PackageFormat::Json),
            "csv" => Some(PackageFormat::Csv),
            _ => None,
        }
    }
}

impl std::str::FromStr for PackageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(PackageFormat::Json),
            "csv" => Ok(PackageFormat::Csv),
            _ => Err(format!("Invalid package format: {}", s)),
        }
    }
}

/// Read a package batch from a file, inferring the format from the
/// extension unless one is given.
pub fn read_packages(path: &Path, format: Option<PackageFormat>) -> Result<Vec<Package>> {
    let format = format
        .or_else(|| PackageFormat::from_path(path))
        .ok_or_else(|| DecodeError::UnsupportedFormat {
            format: path.display().to_string(),
        })?;

    let file = File::open(path)?;
    let packages = match format {
        PackageFormat::Json => packages_from_json(file),
        PackageFormat::Csv => packages_from_csv(file),
    }
    .map_err(FitrsError::from)?;

    tracing::info!(count = packages.len(), ?format, "decoded package batch");
    Ok(packages)
}

/// Decode a JSON array of packages.
pub fn packages_from_json<R: Read>(reader: R) -> std::result::Result<Vec<Package>, DecodeError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decode headerless CSV rows; row length varies with the workout type.
pub fn packages_from_csv<R: Read>(reader: R) -> std::result::Result<Vec<Package>, DecodeError> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut packages = Vec::new();
    for (index, row) in rows.records().enumerate() {
        let row = row?;
        let mut fields = row.iter();
        let workout_type = match fields.next() {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => return Err(DecodeError::MissingCode { index }),
        };
        let data = fields
            .map(|raw| {
                raw.parse::<f64>().map_err(|_| DecodeError::InvalidReading {
                    index,
                    value: raw.to_string(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        packages.push(Package { workout_type, data });
    }
    Ok(packages)
}
