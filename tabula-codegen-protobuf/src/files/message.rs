use serde::Serialize;
use tabula_codegen::View;

use super::preamble;

/// One field of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoField {
    /// Column name in the database.
    pub column: String,
    /// Field name, e.g. `createdAt`.
    pub name: String,
    /// Full field type including `repeated`.
    pub proto_type: String,
    /// Field number: column position, starting at 1.
    pub number: usize,
    pub comment: String,
    /// Check constraint source, emitted as a trailing comment.
    pub check: Option<String>,
}

/// The `X.proto` message for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub package_name: String,
    pub java_package: Option<String>,
    pub message_name: String,
    pub comment: String,
    /// Files this message imports, e.g. `enum.proto`.
    pub imports: Vec<String>,
    pub fields: Vec<ProtoField>,
}

impl View for MessageView {
    const TEMPLATE: &'static str = "message";

    fn render_builtin(&self) -> String {
        preamble(
            &self.package_name,
            &self.imports,
            self.java_package.as_deref(),
        )
        .when(!self.comment.is_empty(), |b| b.comment(&self.comment))
        .block_with_close(
            &format!("message {} {{", self.message_name),
            "}",
            |b| {
                b.each(&self.fields, |b, field| {
                    let declaration =
                        format!("{} {} = {};", field.proto_type, field.name, field.number);
                    b.when(!field.comment.is_empty(), |b| b.comment(&field.comment))
                        .line(&match &field.check {
                            Some(check) => format!("{} // {}", declaration, check),
                            None => declaration,
                        })
                })
            },
        )
        .build()
    }
}
