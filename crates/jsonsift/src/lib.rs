//! Streaming extraction of selected JSON fields into flattened CSV rows.
//!
//! `jsonsift` walks a JSON document incrementally — pulled chunk by chunk
//! from a local file or an HTTP response, never held in memory whole — and
//! projects scalar fields found under a designated base array into tabular
//! rows. Fields that repeat within one array element expand into one row
//! per combination of values.
//!
//! # Examples
//!
//! ```no_run
//! use jsonsift::{ExtractOptions, Input, json_to_csv};
//!
//! let options = ExtractOptions::new(".dataset", ["modified", "publisher.name"])?;
//! json_to_csv(
//!     &Input::Url("https://open.gsa.gov/data.json".into()),
//!     "dataset.csv".as_ref(),
//!     &options,
//! )?;
//! # Ok::<(), jsonsift::Error>(())
//! ```
//!
//! The pieces are reusable on their own: [`Parser`] reports every
//! completed value to a [`ValueSink`], and [`FieldExtractor`] is the sink
//! that turns those reports into rows for any [`RowSink`].

mod buffer;
mod convert;
mod error;
mod extract;
mod options;
mod parser;
mod path;
mod sink;
mod value;

#[cfg(test)]
mod tests;

pub use convert::{Input, extract, json_to_csv, open_input};
pub use error::{Error, SyntaxError};
pub use extract::FieldExtractor;
pub use options::ExtractOptions;
pub use parser::Parser;
pub use path::DottedPath;
pub use sink::{RowBuffer, RowSink, ValueSink};
pub use value::ParsedValue;
