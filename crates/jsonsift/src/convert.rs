//! The one-call conversion pipeline.
//!
//! Thin collaborators around the core: acquiring the byte stream (local
//! file or HTTP body), creating the destination CSV file, and wiring the
//! configuration to parser and extractor. The core treats both sources
//! identically once wrapped behind [`io::Read`].
//!
//! [`io::Read`]: std::io::Read

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::Error, extract::FieldExtractor, options::ExtractOptions, parser::Parser, sink::RowSink,
};

/// Where the JSON document comes from.
#[derive(Debug, Clone)]
pub enum Input {
    /// A local file path.
    File(PathBuf),
    /// An HTTP(S) URL, fetched with a blocking client.
    Url(String),
}

/// Opens the byte source behind `input`.
///
/// # Errors
///
/// Returns an I/O error for an unreadable file, an HTTP error for a failed
/// fetch, or [`Error::HttpStatus`] for a non-success response.
pub fn open_input(input: &Input) -> Result<Box<dyn Read>, Error> {
    match input {
        Input::File(path) => {
            debug!(path = %path.display(), "opening local file");
            Ok(Box::new(File::open(path)?))
        }
        Input::Url(url) => {
            debug!(url, "fetching remote document");
            let response = reqwest::blocking::get(url)?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    url: url.clone(),
                });
            }
            Ok(Box::new(response))
        }
    }
}

/// Runs one extraction pass from `reader` into `sink`: the header row,
/// then one or more data rows per element of the base array.
///
/// Returns the sink for the caller to flush or inspect.
///
/// # Errors
///
/// Any parse, I/O, or sink-write error aborts the whole extraction.
pub fn extract<R: Read, S: RowSink>(
    reader: R,
    sink: S,
    options: &ExtractOptions,
) -> Result<S, Error> {
    let mut extractor = FieldExtractor::new(sink, options);
    extractor.write_header()?;
    Parser::new(reader).parse(&mut extractor)?;
    debug!(base = %options.base_path, "extraction finished");
    Ok(extractor.into_inner())
}

/// Converts a JSON document into a CSV file in one call.
///
/// # Errors
///
/// Any source, parse, or output error aborts the conversion; the output
/// file may be left partially written.
pub fn json_to_csv(input: &Input, output: &Path, options: &ExtractOptions) -> Result<(), Error> {
    let reader = open_input(input)?;
    let writer = csv::Writer::from_path(output)?;
    let mut writer = extract(reader, writer, options)?;
    writer.flush()?;
    Ok(())
}
