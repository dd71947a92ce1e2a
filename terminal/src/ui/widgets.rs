//! Small text widgets shared by the screens

use crate::app::router::NAV_ENTRIES;

const RULE_WIDTH: usize = 48;

/// Section rule with a title: `── Title ─────`
pub fn rule(title: &str) -> String {
    let used = title.chars().count() + 4;
    format!("── {} {}", title, "─".repeat(RULE_WIDTH.saturating_sub(used)))
}

/// Menu with the active entry in brackets
pub fn nav_bar(active: Option<&str>) -> String {
    NAV_ENTRIES
        .iter()
        .map(|(path, label)| {
            if Some(*path) == active {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn toast(message: &str) -> String {
    format!("» {}", message)
}

/// Render rows as left-aligned columns
pub fn table(header: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(header.iter().map(|h| h.to_string()).collect())];
    lines.extend(rows.iter().cloned().map(format_row));
    lines
}

/// `[x]` / `[ ]` for an enabled / disabled control
pub fn control(label: &str, command: &str, enabled: bool) -> String {
    let mark = if enabled { "x" } else { " " };
    format!("[{}] {} ({})", mark, label, command)
}
