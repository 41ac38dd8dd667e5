//! View models for every file the protobuf generator writes.

mod enum_file;
mod message;

pub use enum_file::{EnumFileView, ProtoEnum, ProtoEnumValue};
pub use message::{MessageView, ProtoField};

use tabula_codegen::CodeBuilder;
use tabula_core::GENERATED_HEADER;

/// Header, syntax, package and options shared by every proto file.
fn preamble(package_name: &str, imports: &[String], java_package: Option<&str>) -> CodeBuilder {
    let builder = CodeBuilder::protobuf()
        .comment(GENERATED_HEADER)
        .line("syntax = \"proto3\";")
        .blank()
        .when(!package_name.is_empty(), |b| {
            b.line(&format!("package {};", package_name)).blank()
        })
        .when(!imports.is_empty(), |b| {
            b.each(imports, |b, import| b.line(&format!("import \"{}\";", import)))
                .blank()
        });

    match java_package {
        Some(java_package) => builder
            .line(&format!("option java_package = \"{}\";", java_package))
            .blank(),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble() {
        let full = preamble("acme", &["enum.proto".to_string()], Some("com.acme.proto")).build();
        assert_eq!(
            full,
            "// Code generated by tabula. DO NOT EDIT.\nsyntax = \"proto3\";\n\npackage acme;\n\nimport \"enum.proto\";\n\noption java_package = \"com.acme.proto\";\n\n"
        );

        let bare = preamble("", &[], None).build();
        assert_eq!(bare, "// Code generated by tabula. DO NOT EDIT.\nsyntax = \"proto3\";\n\n");
    }
}
