//! Extracts fields from a data.json catalog into a CSV file.
//!
//! ```text
//! cargo run --example dataset_to_csv -- https://open.gsa.gov/data.json out.csv .dataset modified title
//! cargo run --example dataset_to_csv -- ./data.json out.csv .dataset modified title
//! ```

use std::{path::PathBuf, process::ExitCode};

use jsonsift::{ExtractOptions, Input, json_to_csv};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [source, output, base, fields @ ..] = args.as_slice() else {
        eprintln!("usage: dataset_to_csv <file-or-url> <output.csv> <base-path> <field>...");
        return ExitCode::FAILURE;
    };

    let input = if source.starts_with("http://") || source.starts_with("https://") {
        Input::Url(source.clone())
    } else {
        Input::File(PathBuf::from(source))
    };

    let options = match ExtractOptions::new(base.clone(), fields.iter().cloned()) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match json_to_csv(&input, output.as_ref(), &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("extraction failed: {err}");
            ExitCode::FAILURE
        }
    }
}
