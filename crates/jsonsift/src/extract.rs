//! The field extractor and row expander.
//!
//! A [`ValueSink`] implementation that matches each reported path against a
//! base array path and a set of absolute target paths, accumulates captured
//! values per target per array element, and expands one finished element
//! into one or more output rows via a Cartesian product over the targets.

use tracing::{debug, trace};

use crate::{
    error::Error,
    options::ExtractOptions,
    sink::{RowSink, ValueSink},
    value::ParsedValue,
};

/// Projects scalar fields of one base array's elements into flat rows.
///
/// The accumulator is owned exclusively by one extractor instance and is
/// re-initialized once per array element, immediately after row expansion
/// for the previous element completes.
#[derive(Debug)]
pub struct FieldExtractor<S> {
    sink: S,
    /// Relative target names, in header and expansion order.
    fields: Vec<String>,
    /// `base + "."` — the path reported when an element object finishes.
    element_path: String,
    /// One accumulator per target, aligned with `fields`.
    columns: Vec<Column>,
}

#[derive(Debug)]
struct Column {
    /// Absolute target path, resolved once at setup.
    path: String,
    /// Captured values for the current element, in document order.
    values: Vec<String>,
}

impl<S: RowSink> FieldExtractor<S> {
    /// Resolves the relative targets against the base path and wires the
    /// extractor to `sink`.
    pub fn new(sink: S, options: &ExtractOptions) -> Self {
        let columns = options
            .fields
            .iter()
            .map(|field| Column {
                path: format!("{}.{field}", options.base_path),
                values: Vec::new(),
            })
            .collect();
        Self {
            sink,
            fields: options.fields.clone(),
            element_path: format!("{}.", options.base_path),
            columns,
        }
    }

    /// Emits the single header row of target field names.
    ///
    /// Independent of the flush cycle: call once, before parsing, so the
    /// header appears exactly once per extraction run even when the base
    /// array is empty.
    pub fn write_header(&mut self) -> Result<(), Error> {
        self.sink.write_row(&self.fields)
    }

    /// Releases the underlying row sink.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Expands the accumulated values of one finished element into rows,
    /// then clears every accumulator for the next element.
    fn flush(&mut self) -> Result<(), Error> {
        let mut row = Vec::with_capacity(self.columns.len());
        let rows = self.expand(0, &mut row)?;
        debug!(rows, element = %self.element_path, "flushed element");
        for column in &mut self.columns {
            column.values.clear();
        }
        Ok(())
    }

    /// Depth-first Cartesian product over the target list: the first
    /// target varies slowest, the last fastest, each target's own values
    /// in document order. An empty accumulator contributes a single
    /// empty-string placeholder, so the row count is always the product of
    /// the accumulator sizes with zero treated as one.
    fn expand(&mut self, index: usize, row: &mut Vec<String>) -> Result<usize, Error> {
        if index == self.columns.len() {
            self.sink.write_row(row)?;
            return Ok(1);
        }

        if self.columns[index].values.is_empty() {
            row.push(String::new());
            let rows = self.expand(index + 1, row)?;
            row.pop();
            return Ok(rows);
        }

        let mut rows = 0;
        for i in 0..self.columns[index].values.len() {
            let value = self.columns[index].values[i].clone();
            row.push(value);
            rows += self.expand(index + 1, row)?;
            row.pop();
        }
        Ok(rows)
    }
}

impl<S: RowSink> ValueSink for FieldExtractor<S> {
    fn on_value(&mut self, path: &str, value: ParsedValue<'_>) -> Result<(), Error> {
        // An object that is itself an element of the base array finished.
        if path == self.element_path {
            if matches!(value, ParsedValue::Object) {
                return self.flush();
            }
            return Ok(());
        }

        // Container completions are structural; only scalars are captured.
        let Some(text) = value.render_field() else {
            return Ok(());
        };
        if let Some(column) = self.columns.iter_mut().find(|column| column.path == path) {
            trace!(path, value = %text, "captured field");
            column.values.push(text);
        }
        Ok(())
    }
}
