/// Cells wider than this are cut with an ellipsis.
const MAX_CELL_WIDTH: usize = 60;

const SEPARATOR: &str = "  ";

/// Render left-aligned columns under a dashed header rule.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let header_line = line(headers.iter().copied(), &widths);
    let divider = "-".repeat(header_line.chars().count());
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(value, width)| {
            let value = truncate(value, *width);
            let pad = width.saturating_sub(value.chars().count());
            format!("{value}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
