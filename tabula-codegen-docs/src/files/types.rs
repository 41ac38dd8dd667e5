use serde::Serialize;
use tabula_codegen::{EnumMember, View};

use super::{code, preamble, table};

/// One enum type section of `enums.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocType {
    /// Section heading, e.g. `Status`.
    pub name: String,
    /// Database type name.
    pub sql_name: String,
    pub comment: String,
    pub members: Vec<EnumMember>,
}

/// The aggregate `enums.md` page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypesView {
    pub title: Option<String>,
    pub types: Vec<DocType>,
}

const HEADERS: &[&str] = &["Member", "Literal", "Ordinal"];

impl View for TypesView {
    const TEMPLATE: &'static str = "types";

    fn render_builtin(&self) -> String {
        let last = self.types.len().saturating_sub(1);

        preamble("Enum types", self.title.as_deref())
            .when(self.types.is_empty(), |b| b.line("No enum types are defined."))
            .each(self.types.iter().enumerate(), |b, (i, ty)| {
                let rows = ty.members.iter().map(|member| {
                    vec![
                        member.name.clone(),
                        code(&member.literal),
                        member.ordinal.to_string(),
                    ]
                });

                let b = b
                    .line(&format!("## {}", ty.name))
                    .blank()
                    .when(!ty.comment.is_empty(), |b| b.line(&ty.comment).blank())
                    .line(&format!("Database type {}.", code(&ty.sql_name)))
                    .blank();
                table(b, HEADERS, rows).when(i != last, |b| b.blank())
            })
            .build()
    }
}
