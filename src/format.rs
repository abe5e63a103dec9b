//! INI Dialect Reference
//!
//! This module documents the INI dialect accepted on read and produced on
//! write by this library.
//!
//! # Overview
//!
//! An INI document is a sequence of lines. Fields before the first section
//! header are *global*; every later field belongs to the most recently seen
//! section. Order is significant and preserved: parsing a file and writing
//! it back keeps fields and sections where they were.
//!
//! ```text
//! title = My App          ; a global field
//!
//! [server]
//! host = localhost
//! port = 8080
//! ```
//!
//! (The `;` remark above is illustrative; see the comment rules below for
//! what is actually recognized.)
//!
//! # Line Forms
//!
//! Every line is trimmed of leading and trailing whitespace before it is
//! classified, then matched against the first form that fits:
//!
//! | Form | Shape | Effect |
//! |------|-------|--------|
//! | Blank | empty after trimming | skipped |
//! | Comment | first character is `;` | skipped |
//! | Section header | starts with `[` **and** ends with `]` | opens (or reopens) the named section |
//! | Field | contains `=` | adds a field to the current scope |
//! | Anything else | | silently dropped |
//!
//! ## Section headers
//!
//! The name is the text strictly between the brackets, trimmed:
//!
//! ```text
//! [ server ]     → section "server"
//! []             → section "" (legal, if unusual)
//! ```
//!
//! A repeated header does not start a second section; it reopens the
//! existing one, and subsequent fields merge into it. Section names are
//! case-sensitive, so `[Net]` and `[net]` are distinct.
//!
//! ## Fields
//!
//! The **first** `=` splits key from value; both sides are trimmed. Later
//! `=` characters belong to the value:
//!
//! ```text
//! conn = host=db;port=5432   → key "conn", value "host=db;port=5432"
//! ```
//!
//! Keys are case-sensitive and unique within their scope. A duplicate key
//! keeps its original position and takes the last value.
//!
//! ## Comments
//!
//! Only full-line comments exist. A `;` anywhere after the first character
//! is ordinary content:
//!
//! ```text
//! ; skipped entirely
//!    ; also skipped (lines are trimmed first)
//! path = /srv ; kept       → value "/srv ; kept"
//! ```
//!
//! # Error Tolerance
//!
//! Parsing never fails and collects no diagnostics:
//!
//! - A line that fits no form is dropped, including a lone `[` without its
//!   closing `]`. A malformed header that happens to contain `=` (such as
//!   `[Sec=tion`) is read as a field under the field rule.
//! - A missing source file is treated as empty input; the document is
//!   returned unchanged.
//!
//! Read failures other than not-found (permissions, a directory at the
//! path) are real errors and are reported.
//!
//! # Output
//!
//! Rendering walks globals first, then each section. Four independent
//! toggles control layout (see [`ExportOptions`](crate::ExportOptions)):
//!
//! | Toggle | On | Off |
//! |--------|----|-----|
//! | `key_value_whitespace` | `key = value` | `key=value` |
//! | `newline_after_section` | blank line after each field block | blocks packed tightly |
//! | `alphabetical_sections` | sections sorted by name | insertion order |
//! | `alphabetical_fields` | fields sorted by key | insertion order |
//!
//! Sorting is ordinal (byte order), applies to the output only, and never
//! reorders the document itself. The blank line after the global block is
//! emitted only when at least one global field exists. Lines end with `\n`
//! and the final output is trimmed of trailing whitespace, so rendered text
//! never ends with a newline.
//!
//! # Round-Trips
//!
//! With insertion-ordered output, `parse(render(doc))` preserves keys,
//! values, and order. Under the alphabetical toggles the re-parse comes
//! back in rendered (sorted) order instead; one render normalizes, and from
//! then on the text is a fixed point of parse-then-render. Values come back
//! exactly when they carry no surrounding whitespace of their own, since
//! parsing trims the same whitespace rendering adds.
//!
//! # Limitations
//!
//! - **No inline comments**: `;` inside a line is content, not a comment
//! - **No multi-line values**: one field per line, always
//! - **No nested sections**: `[a.b]` is just a name containing a dot
//! - **No escape sequences**: text is taken literally; a value cannot
//!   contain a line break
//! - **No duplicate keys**: later occurrences overwrite earlier ones

// This module contains only documentation; no implementation code
