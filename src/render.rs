//! Serializer from a document back to INI text.
//!
//! Layout is controlled by [`ExportOptions`](crate::ExportOptions): the
//! delimiter style, blank lines between blocks, and optional alphabetical
//! ordering of sections and fields. Global fields come first, then each
//! section under its `[name]` header. Lines end with `\n` and the final
//! output carries no trailing whitespace.

use crate::{ExportOptions, FieldMap, IniDocument, IniField, IniSection};

pub(crate) fn render(document: &IniDocument, options: ExportOptions) -> String {
    let mut out = String::with_capacity(256);

    push_fields(&mut out, document.fields(), options);
    // A separating blank line only makes sense once a global was emitted.
    if options.newline_after_section && !out.is_empty() {
        out.push('\n');
    }

    if options.alphabetical_sections {
        let mut sections: Vec<&IniSection> = document.sections().collect();
        sections.sort_by(|a, b| a.name().cmp(b.name()));
        for section in sections {
            push_section(&mut out, section, options);
        }
    } else {
        for section in document.sections() {
            push_section(&mut out, section, options);
        }
    }

    out.truncate(out.trim_end().len());
    out
}

fn push_section(out: &mut String, section: &IniSection, options: ExportOptions) {
    out.push('[');
    out.push_str(section.name());
    out.push_str("]\n");
    push_fields(out, section.fields(), options);
    if options.newline_after_section {
        out.push('\n');
    }
}

fn push_fields(out: &mut String, fields: &FieldMap, options: ExportOptions) {
    let separator = options.separator();
    if options.alphabetical_fields {
        let mut sorted: Vec<&IniField> = fields.values().collect();
        sorted.sort_by(|a, b| a.key().cmp(b.key()));
        for field in sorted {
            push_field(out, field, separator);
        }
    } else {
        for field in fields.values() {
            push_field(out, field, separator);
        }
    }
}

fn push_field(out: &mut String, field: &IniField, separator: &str) {
    out.push_str(field.key());
    out.push_str(separator);
    out.push_str(field.get());
    out.push('\n');
}
