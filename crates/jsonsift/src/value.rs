//! JSON value kinds reported through the value sink.

/// One completed JSON value.
///
/// Containers carry no payload: their structural significance is signaled
/// purely through the path active at the moment of the report. The four
/// scalar kinds carry their decoded primitive; numbers are normalized to
/// 64-bit floats, and string payloads are the raw content between the
/// quotes with escape sequences preserved verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue<'a> {
    /// An object finished parsing.
    Object,
    /// An array finished parsing.
    Array,
    /// The `null` literal.
    Null,
    /// A `true` or `false` literal.
    Bool(bool),
    /// A number, normalized to `f64`.
    Number(f64),
    /// Raw string content, escapes uninterpreted.
    String(&'a str),
}

impl ParsedValue<'_> {
    /// Returns `true` for the two container completion kinds.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    /// Output text for one tabular field, or `None` for containers.
    ///
    /// Numbers render as canonical decimal text, booleans as
    /// `true`/`false`, and `null` as the empty string — never the literal
    /// word "null".
    #[must_use]
    pub fn render_field(&self) -> Option<String> {
        match self {
            Self::Object | Self::Array => None,
            Self::Null => Some(String::new()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::String(s) => Some((*s).to_string()),
        }
    }
}
