use serde::Serialize;
use tabula_codegen::View;

use super::preamble;

/// One value of a proto enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoEnumValue {
    /// Value name prefixed with the enum's name, e.g. `STATUS_ACTIVE`.
    pub name: String,
    /// The literal as stored in the database.
    pub literal: String,
    pub number: i64,
}

/// One enum type inside `enum.proto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoEnum {
    pub name: String,
    /// Database type name.
    pub sql_name: String,
    pub comment: String,
    /// Values in declaration order, after a synthetic zero value if one
    /// was needed.
    pub values: Vec<ProtoEnumValue>,
    /// Whether two literals share a number.
    pub allow_alias: bool,
}

/// The aggregate `enum.proto` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumFileView {
    pub package_name: String,
    pub java_package: Option<String>,
    pub enums: Vec<ProtoEnum>,
}

impl View for EnumFileView {
    const TEMPLATE: &'static str = "enum";

    fn render_builtin(&self) -> String {
        let last = self.enums.len().saturating_sub(1);

        preamble(&self.package_name, &[], self.java_package.as_deref())
            .each(self.enums.iter().enumerate(), |b, (i, ty)| {
                b.when(!ty.comment.is_empty(), |b| b.comment(&ty.comment))
                    .block_with_close(&format!("enum {} {{", ty.name), "}", |b| {
                        b.when(ty.allow_alias, |b| b.line("option allow_alias = true;"))
                            .each(&ty.values, |b, value| {
                                b.line(&format!("{} = {};", value.name, value.number))
                            })
                    })
                    .when(i != last, |b| b.blank())
            })
            .build()
    }
}
