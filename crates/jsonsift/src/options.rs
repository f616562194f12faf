//! Configuration for one extraction pass.

use crate::error::Error;

/// Where the rows come from and which fields they carry.
///
/// The base path is the absolute dotted path to the JSON array whose
/// elements become output rows; each field is a relative dotted path,
/// resolved against the base at setup.
///
/// # Examples
///
/// ```rust
/// use jsonsift::ExtractOptions;
///
/// let options = ExtractOptions::new(".dataset", ["modified", "publisher.name"])?;
/// assert_eq!(options.base_path, ".dataset");
/// # Ok::<(), jsonsift::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Absolute dot-prefixed path to the base array, e.g. `.dataset`.
    pub base_path: String,
    /// Ordered relative target field paths, dot-separated for nested
    /// fields, e.g. `publisher.name`.
    pub fields: Vec<String>,
}

impl ExtractOptions {
    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base path is not dot-prefixed,
    /// when no fields are given, or when a field is empty.
    pub fn new(
        base_path: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, Error> {
        let base_path = base_path.into();
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

        if !base_path.starts_with('.') {
            return Err(Error::Config("base path must start with '.'"));
        }
        if fields.is_empty() {
            return Err(Error::Config("at least one target field is required"));
        }
        if fields.iter().any(String::is_empty) {
            return Err(Error::Config("target fields must not be empty"));
        }

        Ok(Self { base_path, fields })
    }
}
