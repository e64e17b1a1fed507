//! Result rendering.
//!
//! Projects resolved entries onto a store's column spec as either a
//! borderless table or CSV. Rendering never changes the entries.

use std::borrow::Cow;
use std::io::{self, Write};

use comfy_table::{presets, ContentArrangement, Row, Table};

use crate::core::domain::{Column, ResolvedEntry};

/// Display toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Display {
    /// Include extended columns
    pub extended: bool,
    /// Comma-separated output instead of a table
    pub csv: bool,
    /// Never truncate rows to the terminal width
    pub no_truncate: bool,
    /// Omit the header row
    pub no_header: bool,
}

/// Columns shown for the given display flags.
pub fn visible<'a>(columns: &'a [Column], display: &Display) -> Vec<&'a Column> {
    columns
        .iter()
        .filter(|c| display.extended || !c.extended)
        .collect()
}

/// Render `entries` to `out`.
///
/// `width` is the terminal width when output goes to a terminal. Rows are
/// cut to one line at that width unless truncation is disabled.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render<W: Write + ?Sized>(
    entries: &[ResolvedEntry],
    columns: &[Column],
    display: &Display,
    width: Option<u16>,
    out: &mut W,
) -> io::Result<()> {
    let columns = visible(columns, display);

    if display.csv {
        return render_csv(entries, &columns, display, out);
    }

    let truncate = !display.no_truncate && width.is_some();

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);

    if !display.no_header {
        table.set_header(columns.iter().map(|c| c.header));
    }

    for entry in entries {
        let mut row = Row::from(cells(entry, &columns));
        if truncate {
            row.max_height(1);
        }
        table.add_row(row);
    }

    for column in table.column_iter_mut() {
        column.set_padding((0, 1));
    }

    match width {
        Some(width) if truncate => {
            table
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_width(width);
        }
        _ => {
            table.set_content_arrangement(ContentArrangement::Disabled);
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", table)
}

fn render_csv<W: Write + ?Sized>(
    entries: &[ResolvedEntry],
    columns: &[&Column],
    display: &Display,
    out: &mut W,
) -> io::Result<()> {
    if !display.no_header {
        let header: Vec<_> = columns.iter().map(|c| csv_field(c.header)).collect();
        writeln!(out, "{}", header.join(","))?;
    }

    for entry in entries {
        let line: Vec<_> = columns
            .iter()
            .map(|c| csv_field(entry.field(c.field).unwrap_or_default()))
            .collect();
        writeln!(out, "{}", line.join(","))?;
    }

    Ok(())
}

fn cells(entry: &ResolvedEntry, columns: &[&Column]) -> Vec<String> {
    columns
        .iter()
        .map(|c| entry.field(c.field).unwrap_or_default().to_string())
        .collect()
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
