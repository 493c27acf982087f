//! Plain-text rendering of page state for the terminal.

use inventario::PageVariant;
use inventario::modal::{ModalContent, ModalKind};
use inventario::status::{StatusLine, Tone};
use inventario::table::{self, TableBody};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

const SEPARATOR: &str = " | ";

/// Status line with a tone marker, or `None` when nothing is shown.
pub fn status(line: &StatusLine) -> Option<String> {
    if line.is_empty() {
        return None;
    }
    Some(match line.tone {
        Tone::Neutral => line.text.clone(),
        Tone::Success => format!("[ok] {}", line.text),
        Tone::Error => format!("[erro] {}", line.text),
    })
}

pub fn modal(content: &ModalContent) -> String {
    match content.kind {
        ModalKind::Alert => format!("[erro] {}", content.message),
        ModalKind::Info | ModalKind::Confirm => content.message.clone(),
    }
}

/// The table body as aligned text. The actions column has no terminal
/// counterpart and is left out.
pub fn table(body: &TableBody, variant: PageVariant) -> String {
    let all = table::headers(variant);
    let headers = &all[..all.len() - 1];

    if let Some(placeholder) = body.placeholder(variant) {
        return format!("{}\n{}\n", headers.join(SEPARATOR), placeholder.text);
    }

    let rows: Vec<Vec<String>> = body.items().iter().map(|item| table::row_cells(item, variant)).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells.zip(widths).map(|(cell, width)| pad(cell, *width)).collect();
    out.push_str(padded.join(SEPARATOR).trim_end());
    out.push('\n');
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}
