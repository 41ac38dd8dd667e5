//! View models for every file the Hibernate generator writes.

mod entity;
mod enum_class;
mod metamodel;
mod user_type;

pub use entity::EntityView;
pub use enum_class::EnumView;
pub use metamodel::MetamodelView;
pub use tabula_core::GENERATED_HEADER;
pub use user_type::UserTypeView;

use tabula_codegen::CodeBuilder;

/// Header comment and package declaration shared by every Java file.
fn preamble(package_name: &str) -> CodeBuilder {
    CodeBuilder::java()
        .comment(GENERATED_HEADER)
        .when(!package_name.is_empty(), |b| {
            b.line(&format!("package {};", package_name))
        })
        .blank()
}

/// Quote a value as a Java string literal.
fn java_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble() {
        assert_eq!(
            preamble("com.acme").build(),
            "// Code generated by tabula. DO NOT EDIT.\npackage com.acme;\n\n"
        );
        assert_eq!(
            preamble("").build(),
            "// Code generated by tabula. DO NOT EDIT.\n\n"
        );
    }

    #[test]
    fn test_java_string() {
        assert_eq!(java_string("active"), "\"active\"");
        assert_eq!(java_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(java_string("a\\b"), "\"a\\\\b\"");
    }
}
