//! Plain-text output helpers shared by the command handlers.

use std::fmt::Write as _;
use std::time::Duration;

/// Quotes a CSV field if it contains a delimiter, quote or line break
pub fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Joins already-rendered cells into one CSV line
pub fn csv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv_field(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats rows as a left-aligned table with a dashed rule under the header.
///
/// Rows shorter than the header are padded with empty cells. Trailing spaces
/// are trimmed so the last column may hold free text.
pub fn format_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }

    let mut output = String::new();
    let header_cells: Vec<&str> = headers.to_vec();
    push_row(&mut output, &widths, &header_cells);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut output, &widths, &rule);
    for row in rows {
        push_row(&mut output, &widths, row);
    }

    output.trim_end().to_string()
}

fn push_row<S: AsRef<str>>(output: &mut String, widths: &[usize], cells: &[S]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", AsRef::as_ref);
        if i > 0 {
            line.push_str("  ");
        }
        let _ = write!(line, "{cell:<width$}");
    }
    let _ = writeln!(output, "{}", line.trim_end());
}

/// Formats `label: value` pairs with the values aligned
pub fn format_details(title: &str, fields: &[(&str, String)]) -> String {
    let label_width = fields
        .iter()
        .map(|(label, _)| label.len() + 1)
        .max()
        .unwrap_or(0);

    let mut output = format!("{title}:\n");
    for (label, value) in fields {
        let label = format!("{label}:");
        let _ = writeln!(output, "  {label:<label_width$} {value}");
    }
    output.trim_end().to_string()
}

/// Renders an uptime the way `uptime` does: `6 days, 8:33`, `1 day, 0:07`, `3:02`
pub fn format_uptime(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    match days {
        0 => format!("{hours}:{minutes:02}"),
        1 => format!("1 day, {hours}:{minutes:02}"),
        _ => format!("{days} days, {hours}:{minutes:02}"),
    }
}

/// Renders `None` or an empty string as `-`
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
