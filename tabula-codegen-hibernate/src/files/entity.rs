use serde::Serialize;
use tabula_codegen::{CodeBuilder, View};

use super::preamble;
use crate::EntityMember;

/// The `X.java` entity class for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityView {
    pub package_name: String,
    pub class_name: String,
    pub table_name: String,
    pub comment: String,
    /// Imports for the member types, sorted.
    pub imports: Vec<String>,
    /// Whether any getter carries a `@Type` annotation.
    pub uses_type: bool,
    pub members: Vec<EntityMember>,
}

impl View for EntityView {
    const TEMPLATE: &'static str = "class";

    fn render_builtin(&self) -> String {
        preamble(&self.package_name)
            .when(!self.imports.is_empty(), |b| {
                b.each(&self.imports, |b, import| {
                    b.line(&format!("import {};", import))
                })
                .blank()
            })
            .line("import javax.persistence.*;")
            .when(self.uses_type, |b| {
                b.line("import org.hibernate.annotations.Type;")
            })
            .blank()
            .javadoc(&self.comment)
            .line("@Entity")
            .line(&format!("@Table(name = \"{}\")", self.table_name))
            .block_with_close(
                &format!("public class {} {{", self.class_name),
                "}",
                |b| {
                    b.each(&self.members, |b, member| {
                        b.javadoc(&member.comment).line(&format!(
                            "private {} {};",
                            member.java_type, member.field
                        ))
                    })
                    .each(&self.members, accessors)
                },
            )
            .build()
    }
}

fn accessors(builder: CodeBuilder, member: &EntityMember) -> CodeBuilder {
    builder
        .blank()
        .each(&member.annotations, |b, annotation| b.line(annotation))
        .block_with_close(
            &format!("public {} get{}() {{", member.java_type, member.accessor),
            "}",
            |b| b.line(&format!("return {};", member.field)),
        )
        .blank()
        .block_with_close(
            &format!(
                "{} void set{}({} {}) {{",
                member.setter_visibility, member.accessor, member.java_type, member.field
            ),
            "}",
            |b| {
                let b = match &member.check {
                    Some(check) => b.comment(check),
                    None => b,
                };
                b.line(&format!("this.{0} = {0};", member.field))
            },
        )
}
