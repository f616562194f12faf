//! The two extension-point contracts of the pipeline.
//!
//! [`ValueSink`] is the seam between the parser and whatever consumes
//! parsed values; [`RowSink`] is the seam between the field extractor and
//! the tabular destination. Both calls are direct and synchronous — there
//! is no buffering or reordering between a completed value and its
//! consumption, and a sink error unwinds the whole recursive parse.

use std::io;

use crate::{error::Error, value::ParsedValue};

/// Consumer of completed JSON values.
///
/// Invoked exactly once per completed value — scalar, or container close —
/// together with the dotted path active at that instant.
pub trait ValueSink {
    /// Handles one completed value. Returning an error aborts the parse.
    fn on_value(&mut self, path: &str, value: ParsedValue<'_>) -> Result<(), Error>;
}

/// Destination for flattened rows.
///
/// Called once for the header and once per expanded data row.
pub trait RowSink {
    /// Writes one row of ordered fields.
    fn write_row(&mut self, row: &[String]) -> Result<(), Error>;
}

impl<W: io::Write> RowSink for csv::Writer<W> {
    fn write_row(&mut self, row: &[String]) -> Result<(), Error> {
        self.write_record(row).map_err(Error::from)
    }
}

/// Rows collected in memory. Handy for tests and small documents.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RowBuffer {
    /// The rows written so far, header included.
    pub rows: Vec<Vec<String>>,
}

impl RowSink for RowBuffer {
    fn write_row(&mut self, row: &[String]) -> Result<(), Error> {
        self.rows.push(row.to_vec());
        Ok(())
    }
}
