//! Lock-step reader over a feature/label CSV pair.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::config::Geometry;
use crate::error::{Error, Result};

/// Which side of the pair ran out of rows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Feature,
    Label,
}

/// Outcome of one lock-step read.
#[derive(Debug, Clone, PartialEq)]
pub enum RowPair {
    /// An aligned (feature row, label row) pair.
    Pair(Vec<f32>, Vec<u32>),
    /// One side ran out of rows. Recoverable: the caller stops assembling
    /// the current batch early instead of failing.
    Exhausted(Side),
}

/// Reads two CSV files in lock-step, row *i* of one aligned with row *i* of
/// the other. The header row of each file is skipped independently on open.
///
/// Field counts are validated against the geometry on every read; a wrong
/// field count or a non-numeric token is a fatal parse error.
pub struct PairedReader {
    features: Reader<File>,
    labels: Reader<File>,
    geometry: Geometry,
    /// Data rows consumed so far (0-based, header excluded).
    row: usize,
}

impl PairedReader {
    /// Open both files and skip their header rows.
    pub fn open<P: AsRef<Path>>(
        feature_path: P,
        label_path: P,
        geometry: Geometry,
    ) -> Result<Self> {
        // has_headers(true) consumes the first row of each file on first read.
        let features = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(feature_path.as_ref())?;
        let labels = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(label_path.as_ref())?;

        Ok(Self {
            features,
            labels,
            geometry,
            row: 0,
        })
    }

    /// Data rows consumed so far.
    pub fn rows_read(&self) -> usize {
        self.row
    }

    /// Read the next aligned row pair.
    ///
    /// The feature side is read first; if it is exhausted the label side is
    /// left untouched so no label row is silently dropped.
    pub fn next_pair(&mut self) -> Result<RowPair> {
        let mut record = StringRecord::new();

        if !self.features.read_record(&mut record)? {
            return Ok(RowPair::Exhausted(Side::Feature));
        }
        let feature = parse_feature_row(&record, self.geometry.feature_len(), self.row)?;

        if !self.labels.read_record(&mut record)? {
            return Ok(RowPair::Exhausted(Side::Label));
        }
        let label = parse_label_row(&record, self.geometry.label_len(), self.row)?;

        self.row += 1;
        Ok(RowPair::Pair(feature, label))
    }
}

fn parse_feature_row(record: &StringRecord, expected: usize, row: usize) -> Result<Vec<f32>> {
    if record.len() != expected {
        return Err(Error::FieldCount {
            row,
            expected,
            found: record.len(),
        });
    }
    record
        .iter()
        .map(|field| {
            field.trim().parse::<f32>().map_err(|_| Error::NonNumeric {
                row,
                token: field.to_string(),
            })
        })
        .collect()
}

fn parse_label_row(record: &StringRecord, expected: usize, row: usize) -> Result<Vec<u32>> {
    if record.len() != expected {
        return Err(Error::FieldCount {
            row,
            expected,
            found: record.len(),
        });
    }
    record
        .iter()
        .map(|field| {
            field.trim().parse::<u32>().map_err(|_| Error::NonNumeric {
                row,
                token: field.to_string(),
            })
        })
        .collect()
}
