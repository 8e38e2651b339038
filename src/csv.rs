// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are skipped; an unterminated quote runs to end of input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Split parsed rows into (header, body). The first row is the header.
pub fn split_header(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    if rows.is_empty() { return (None, rows); }
    let header = rows.remove(0);
    (Some(header), rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write optional headers plus rows to any writer.
pub fn write_table<W: Write, R: AsRef<[String]>>(
    mut w: W,
    headers: Option<&[String]>,
    rows: impl IntoIterator<Item = R>,
    sep: char,
) -> io::Result<()> {
    if let Some(h) = headers {
        write_row(&mut w, h, sep)?;
    }
    for r in rows {
        write_row(&mut w, r.as_ref(), sep)?;
    }
    Ok(())
}

/// Full export text (Copy/Export share this).
pub fn to_export_string<R: AsRef<[String]>>(
    headers: Option<&[String]>,
    rows: impl IntoIterator<Item = R>,
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let headers = if include_headers { headers } else { None };
    // Writing into a Vec cannot fail.
    let _ = write_table(&mut buf, headers, rows, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_and_crlf() {
        let text = "Agency,Services Descrption\r\nDOT,\"Snow, ice \"\"removal\"\"\"\r\n\r\nDOE,Cloud\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["DOT", "Snow, ice \"removal\""]);
        assert_eq!(rows[2], vec!["DOE", "Cloud"]);
    }

    #[test]
    fn trailing_row_without_newline() {
        let rows = parse_rows("a\tb\nc\td", '\t');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn export_string_quotes_separator() {
        let headers = vec![s!("A"), s!("B")];
        let rows = vec![vec![s!("x,y"), s!("z")]];
        let with = to_export_string(Some(headers.as_slice()), &rows, true, ',');
        assert_eq!(with, "A,B\n\"x,y\",z\n");
        let without = to_export_string(Some(headers.as_slice()), &rows, false, ',');
        assert_eq!(without, "\"x,y\",z\n");
        let tsv = to_export_string(Some(headers.as_slice()), &rows, false, '\t');
        assert_eq!(tsv, "x,y\tz\n");
    }
}
