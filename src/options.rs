//! Configuration options for INI output.
//!
//! This module provides [`ExportOptions`], a set of independent toggles
//! controlling how a document is rendered back to text:
//!
//! - whitespace around the `=` delimiter
//! - blank lines between field blocks
//! - alphabetical ordering of sections and of fields
//!
//! Parsing accepts every combination, so any choice of options round-trips.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::{ini, to_string_with_options, ExportOptions};
//!
//! let doc = ini! {
//!     ["server"] {
//!         "port" = 8080,
//!     }
//! };
//!
//! let compact = ExportOptions::new()
//!     .with_key_value_whitespace(false)
//!     .with_newline_after_section(false);
//! assert_eq!(to_string_with_options(&doc, compact), "[server]\nport=8080");
//! ```

/// Formatting toggles for rendering an [`IniDocument`](crate::IniDocument).
///
/// Each option is independent. The default enables whitespace around the
/// key/value delimiter and a blank line after each field block, which is the
/// layout most hand-written INI files use.
///
/// # Examples
///
/// ```rust
/// use inidoc::ExportOptions;
///
/// // Default layout: `key = value`, blank line between sections.
/// let options = ExportOptions::new();
/// assert!(options.key_value_whitespace);
/// assert!(options.newline_after_section);
///
/// // Deterministic output regardless of insertion order.
/// let options = ExportOptions::new()
///     .with_alphabetical_sections(true)
///     .with_alphabetical_fields(true);
/// assert!(options.alphabetical_sections);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Emit `key = value` when set, `key=value` otherwise.
    pub key_value_whitespace: bool,
    /// Emit a blank line after each section's field block, and after the
    /// global block when it is non-empty.
    pub newline_after_section: bool,
    /// Order sections by name (ordinal comparison) instead of insertion order.
    pub alphabetical_sections: bool,
    /// Order every field block by key (ordinal comparison) instead of
    /// insertion order.
    pub alphabetical_fields: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            key_value_whitespace: true,
            newline_after_section: true,
            alphabetical_sections: false,
            alphabetical_fields: false,
        }
    }
}

impl ExportOptions {
    /// Creates the default options (spaced delimiter, blank line after each
    /// field block, insertion order preserved).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the `=` delimiter is surrounded by single spaces.
    #[must_use]
    pub fn with_key_value_whitespace(mut self, enabled: bool) -> Self {
        self.key_value_whitespace = enabled;
        self
    }

    /// Sets whether a blank line follows each field block.
    #[must_use]
    pub fn with_newline_after_section(mut self, enabled: bool) -> Self {
        self.newline_after_section = enabled;
        self
    }

    /// Sets whether sections are emitted in alphabetical order.
    #[must_use]
    pub fn with_alphabetical_sections(mut self, enabled: bool) -> Self {
        self.alphabetical_sections = enabled;
        self
    }

    /// Sets whether fields are emitted in alphabetical order.
    #[must_use]
    pub fn with_alphabetical_fields(mut self, enabled: bool) -> Self {
        self.alphabetical_fields = enabled;
        self
    }

    /// Returns the key/value delimiter these options select.
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        if self.key_value_whitespace {
            " = "
        } else {
            "="
        }
    }
}
