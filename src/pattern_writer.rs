// src/pattern_writer.rs

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

/// Header of the aggregate pattern file: ticker code, ticker name,
/// movement string.
pub const PATTERN_CSV_HEADER: [&str; 3] = ["股票代码", "股票名称", "涨跌字符串"];

/// One aggregate row: the caller-supplied code (not normalized), the
/// display name, and the ticker's movement string.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRecord {
    pub code: String,
    pub name: String,
    pub movement_string: String,
}

/// Per-call write disposition for the aggregate file. The first record of
/// a batch truncates and writes the header; every later record appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    FirstWrite,
    Append,
}

/// Filesystem failure while writing the aggregate file. Unlike transport
/// failures this is surfaced to the caller and aborts the batch.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to open pattern file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write pattern row: {0}")]
    Csv(#[from] csv::Error),
}

pub struct PatternWriter;

impl PatternWriter {
    /// Appends one record to the aggregate file, with the header first
    /// when this is the batch's first write. The row is flushed before
    /// returning so the file grows by whole lines only.
    pub fn append_record(
        path: &Path,
        record: &PatternRecord,
        mode: WriteMode,
    ) -> Result<(), WriteError> {
        let file = match mode {
            WriteMode::FirstWrite => File::create(path)?,
            WriteMode::Append => OpenOptions::new().append(true).create(true).open(path)?,
        };

        let mut writer = csv::Writer::from_writer(file);
        if mode == WriteMode::FirstWrite {
            writer.write_record(PATTERN_CSV_HEADER)?;
        }
        writer.write_record([&record.code, &record.name, &record.movement_string])?;
        writer.flush()?;

        Ok(())
    }

    /// Default aggregate file name: today's date followed by
    /// `_all_stocks_pattern.csv`, in the working directory.
    pub fn default_output_path() -> PathBuf {
        PathBuf::from(format!(
            "{}_all_stocks_pattern.csv",
            Local::now().format("%Y%m%d")
        ))
    }
}
