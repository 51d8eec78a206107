//! CSV landmark table writer.
//!
//! The header is written on creation and every row is flushed as soon as it
//! is written, so a session that dies mid-way leaves a valid table holding
//! every landmark located so far.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::{LandmarkError, LandmarkRecord, LandmarkResult};

/// Header row of the landmark table.
pub const LANDMARK_TABLE_HEADER: [&str; 4] = ["name", "node_id", "lat", "lon"];

/// Appends [`LandmarkRecord`]s to a CSV stream.
pub struct LandmarkWriter<W: Write> {
    inner:    Writer<W>,
    rows:     u64,
    finished: bool,
}

impl LandmarkWriter<File> {
    /// Create (or truncate) the table at `path` and write the header row.
    pub fn create(path: &Path) -> LandmarkResult<Self> {
        let file = File::create(path).map_err(|source| LandmarkError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_writer(file)
    }
}

impl<W: Write> LandmarkWriter<W> {
    /// Wrap any `Write` sink and write the header row.
    pub fn from_writer(sink: W) -> LandmarkResult<Self> {
        // Header is written by hand so it appears even if no row follows.
        let mut inner = WriterBuilder::new().has_headers(false).from_writer(sink);
        inner.write_record(LANDMARK_TABLE_HEADER)?;
        inner.flush()?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    /// Write one row and flush it.
    pub fn write_landmark(&mut self, record: &LandmarkRecord) -> LandmarkResult<()> {
        self.inner.serialize(record)?;
        self.inner.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written (header excluded).
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> LandmarkResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> LandmarkResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| LandmarkError::Io(e.into_error()))
    }
}
