use serde::Serialize;
use tabula_codegen::{EnumMember, View};

use super::{java_string, preamble};

/// The `E.java` enum for one database enum type.
///
/// Each constant carries its ordinal and its database literal, so integer
/// and text literals can be mixed in one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumView {
    pub package_name: String,
    pub class_name: String,
    /// Database type name.
    pub sql_name: String,
    pub comment: String,
    pub members: Vec<EnumMember>,
}

impl EnumView {
    fn constants(&self) -> Vec<String> {
        let last = self.members.len().saturating_sub(1);
        self.members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                format!(
                    "{}({}, {}){}",
                    member.name,
                    java_long(member.ordinal),
                    java_string(&member.literal),
                    if i == last { ";" } else { "," }
                )
            })
            .collect()
    }
}

/// Literals outside the `int` range need the `L` suffix.
fn java_long(value: i64) -> String {
    if i32::try_from(value).is_ok() {
        value.to_string()
    } else {
        format!("{}L", value)
    }
}

impl View for EnumView {
    const TEMPLATE: &'static str = "enum";

    fn render_builtin(&self) -> String {
        let name = &self.class_name;

        preamble(&self.package_name)
            .javadoc(&self.comment)
            .block_with_close(&format!("public enum {} {{", name), "}", |b| {
                b.when(self.members.is_empty(), |b| b.line(";"))
                    .each(self.constants(), |b, constant| b.line(&constant))
                    .blank()
                    .line("private final long code;")
                    .line("private final String literal;")
                    .blank()
                    .block_with_close(
                        &format!("{}(long code, String literal) {{", name),
                        "}",
                        |b| b.line("this.code = code;").line("this.literal = literal;"),
                    )
                    .blank()
                    .block_with_close("public long getCode() {", "}", |b| b.line("return code;"))
                    .blank()
                    .block_with_close("public String getLiteral() {", "}", |b| {
                        b.line("return literal;")
                    })
                    .blank()
                    .block_with_close(
                        &format!("public static {} fromLiteral(String literal) {{", name),
                        "}",
                        |b| {
                            b.block_with_close(
                                &format!("for ({} value : values()) {{", name),
                                "}",
                                |b| {
                                    b.block_with_close(
                                        "if (value.literal.equals(literal)) {",
                                        "}",
                                        |b| b.line("return value;"),
                                    )
                                },
                            )
                            .line(&format!(
                                "throw new IllegalArgumentException(\"unknown {} literal: \" + literal);",
                                name
                            ))
                        },
                    )
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use tabula_codegen::{OrdinalStrategy, enum_members};
    use tabula_schema::EnumType;

    use super::*;

    fn view(values: &[&str]) -> EnumView {
        let ty = EnumType::new("status", values.iter().copied());
        EnumView {
            package_name: "com.acme".to_string(),
            class_name: "Status".to_string(),
            sql_name: "status".to_string(),
            comment: String::new(),
            members: enum_members(&ty, OrdinalStrategy::Positional { base: 0 }),
        }
    }

    #[test]
    fn test_constants_mix_literals() {
        assert_eq!(
            view(&["1", "2", "active"]).constants(),
            ["VALUE_1(1, \"1\"),", "VALUE_2(2, \"2\"),", "ACTIVE(2, \"active\");"]
        );
    }

    #[test]
    fn test_large_literal() {
        assert_eq!(
            view(&["5000000000"]).constants(),
            ["VALUE_5000000000(5000000000L, \"5000000000\");"]
        );
    }

    #[test]
    fn test_render_enum() {
        let rendered = view(&["active", "banned"]).render_builtin();

        assert!(rendered.starts_with(
            "// Code generated by tabula. DO NOT EDIT.\npackage com.acme;\n\npublic enum Status {\n    ACTIVE(0, \"active\"),\n    BANNED(1, \"banned\");\n"
        ));
        assert!(rendered.contains("    Status(long code, String literal) {\n"));
        assert!(rendered.contains(
            "        throw new IllegalArgumentException(\"unknown Status literal: \" + literal);\n"
        ));
        assert!(rendered.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_render_empty_enum() {
        let rendered = view(&[]).render_builtin();
        assert!(rendered.contains("public enum Status {\n    ;\n\n    private final long code;"));
    }
}
