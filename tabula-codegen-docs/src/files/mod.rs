//! View models for every page the docs generator writes.

mod table;
mod types;

pub use table::{ColumnRow, TableView};
pub use types::{DocType, TypesView};

use tabula_codegen::CodeBuilder;
use tabula_core::GENERATED_HEADER;

/// Header comment, page heading and optional title shared by every page.
fn preamble(heading: &str, title: Option<&str>) -> CodeBuilder {
    let builder = CodeBuilder::markdown()
        .line(&format!("<!-- {} -->", GENERATED_HEADER))
        .line(&format!("# {}", heading))
        .blank();

    match title {
        Some(title) => builder.line(&format!("_{}_", title)).blank(),
        None => builder,
    }
}

/// A Markdown table with a header row.
fn table<I>(builder: CodeBuilder, headers: &[&str], rows: I) -> CodeBuilder
where
    I: IntoIterator<Item = Vec<String>>,
{
    let separator = vec!["---"; headers.len()].join(" | ");
    builder
        .line(&format!("| {} |", headers.join(" | ")))
        .line(&format!("| {} |", separator))
        .each(rows, |b, row| {
            let cells: Vec<String> = row.iter().map(|c| cell(c)).collect();
            b.line(&format!("| {} |", cells.join(" | ")))
        })
}

/// Escape a value for use inside a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Wrap a value in a code span, unless it is empty.
fn code(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("`{}`", text)
    }
}
