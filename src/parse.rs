//! Line tokenizer for INI text.
//!
//! One routine handles a line; two entry points feed it. `parse_str_into`
//! splits raw text with [`str::lines`] (accepting both `\n` and `\r\n`),
//! while `parse_lines_into` takes lines the caller already split. Both merge
//! into an existing document, which is what lets file parsing layer on top
//! of an already populated [`IniDocument`](crate::IniDocument).
//!
//! Tokenizing never fails and reports nothing: blank lines and `;` comments
//! are skipped, and so is any line that is neither a `[name]` header nor
//! contains a `=`.

use crate::IniDocument;

pub(crate) fn parse_str_into(document: &mut IniDocument, text: &str) {
    parse_lines_into(document, text.lines());
}

pub(crate) fn parse_lines_into<'a, I>(document: &mut IniDocument, lines: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut current_section: Option<String> = None;

    for line in lines {
        let line = line.trim();

        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            // Both brackets are ASCII, so the byte slice stays on char
            // boundaries.
            let name = line[1..line.len() - 1].trim();
            document.create_section(name);
            current_section = Some(name.to_string());
            continue;
        }

        // The first `=` splits key from value; later ones belong to the
        // value. A line without any `=` is dropped, including unterminated
        // bracket lines.
        let (key, value) = match line.split_once('=') {
            Some(split) => split,
            None => continue,
        };
        let (key, value) = (key.trim(), value.trim());

        match &current_section {
            Some(name) => {
                document.get_section(name).add_field(key, value);
            }
            None => {
                document.add_field(key, value);
            }
        }
    }
}
