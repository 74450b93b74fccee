#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
///
/// Widths are measured in terminal cells: CJK ideographs and kana take two.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false, None))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2);

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let color = if options.color { highlight(&truncated) } else { None };
                format_cell(&truncated, *width, numeric, color)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().map(char_width).sum()
}

const fn char_width(ch: char) -> usize {
    match ch as u32 {
        0x1100..=0x115F | 0x2E80..=0x303E | 0x3041..=0x33FF | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF | 0xA000..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F | 0xFF00..=0xFF60 | 0xFFE0..=0xFFE6 | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        // Shrink the widest column that is still wider than its header.
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let next = char_width(ch);
        if used + next > width - 1 {
            break;
        }
        out.push(ch);
        used += next;
    }
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool, color: Option<&str>) -> String {
    let pad = " ".repeat(width.saturating_sub(display_width(value)));
    let value = match color {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    };
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Batch tags and blank levels stand out from the data.
fn highlight(value: &str) -> Option<&'static str> {
    match value {
        "INITIAL" => Some("32"),
        "None" | "-" => Some("2"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, display_width, render_entity_table, truncate_text};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn ideographs_take_two_cells() {
        assert_eq!(display_width("明"), 2);
        assert_eq!(display_width("bright"), 6);
        assert_eq!(display_width("日; 月"), 6);
    }

    #[test]
    fn columns_align_with_mixed_scripts() {
        let headers = ["kanji", "label"];
        let rows = vec![
            vec!["明".to_string(), "bright".to_string()],
            vec!["朝".to_string(), "morning".to_string()],
        ];
        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "kanji  label");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "明     bright");
        assert_eq!(lines[3], "朝     morning");
    }

    #[test]
    fn numbers_align_right() {
        let headers = ["weight"];
        let rows = vec![vec!["5".to_string()], vec!["100".to_string()]];
        let table = render_entity_table(&headers, &rows, PLAIN);
        assert!(table.lines().any(|line| line == "     5"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["kanji", "gained"];
        let rows = vec![vec!["月".to_string(), "明, 朝, 期, 朋, 腸, 服".to_string()]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        assert!(table.lines().all(|line| display_width(line) <= 20));
        assert!(table.contains('…'));
    }

    #[test]
    fn truncation_respects_wide_chars() {
        assert_eq!(truncate_text("明朝期", 5), "明朝…");
        assert_eq!(truncate_text("day", 5), "day");
    }
}
