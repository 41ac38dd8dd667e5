//! Java naming conventions.

use tabula_codegen::NamingConvention;
use tabula_core::{to_lower_camel, to_upper_camel, to_upper_snake};

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    to_type: to_upper_camel,
    to_field: to_lower_camel,
    to_constant: to_upper_snake,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
        "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
        "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
        "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
        "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
    ],
    escape_reserved: escape_java_reserved,
};
