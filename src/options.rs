//! Options controlling how strictly date codes are decoded.

/// Decode behavior options for the `parse_*_with` functions.
///
/// The default applies exactly the documented per-era ranges. Strict mode additionally rejects
/// codes that fit those ranges but cannot name a real manufacturing period.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Rejects late-1980s codes with month 0 or a year outside 1980-1989, and 2007+ codes with
    /// week 53 in a year that only has 52.
    pub strict: bool,
}

impl ParseOptions {
    /// Creates default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
