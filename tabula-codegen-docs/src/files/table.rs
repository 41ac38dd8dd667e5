use serde::Serialize;
use tabula_codegen::View;

use super::{code, preamble, table};

/// One row of a table page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRow {
    /// Database column name.
    pub name: String,
    /// lowerCamel name used by the code targets.
    pub field: String,
    /// Raw database type, e.g. `numeric(12,2)`.
    pub sql_type: String,
    /// Readable type, e.g. `decimal` or `list of text`.
    pub doc_type: String,
    /// Decorations such as `primary key` or `references user(id)`.
    pub attributes: Vec<String>,
    pub comment: String,
}

/// The `X.md` page for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub title: Option<String>,
    pub table_name: String,
    pub comment: String,
    pub columns: Vec<ColumnRow>,
}

const HEADERS: &[&str] = &[
    "Column",
    "Field",
    "Type",
    "SQL type",
    "Attributes",
    "Description",
];

impl View for TableView {
    const TEMPLATE: &'static str = "table";

    fn render_builtin(&self) -> String {
        let rows = self.columns.iter().map(|column| {
            vec![
                code(&column.name),
                code(&column.field),
                column.doc_type.clone(),
                code(&column.sql_type),
                column.attributes.join(", "),
                column.comment.clone(),
            ]
        });

        let builder = preamble(&self.table_name, self.title.as_deref())
            .when(!self.comment.is_empty(), |b| b.line(&self.comment).blank());
        table(builder, HEADERS, rows).build()
    }
}
