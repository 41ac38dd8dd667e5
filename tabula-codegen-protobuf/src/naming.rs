//! Protocol Buffers naming conventions.

use tabula_codegen::NamingConvention;
use tabula_core::{to_lower_camel, to_upper_camel, to_upper_snake};

fn escape_proto_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Protocol Buffers naming conventions.
///
/// Field names only clash with the scalar type keywords in practice.
pub const PROTOBUF_NAMING: NamingConvention = NamingConvention {
    to_type: to_upper_camel,
    to_field: to_lower_camel,
    to_constant: to_upper_snake,
    reserved_words: &[
        "bool", "bytes", "double", "enum", "fixed32", "fixed64", "float", "import", "int32",
        "int64", "map", "message", "oneof", "option", "optional", "package", "repeated",
        "reserved", "returns", "rpc", "service", "sfixed32", "sfixed64", "sint32", "sint64",
        "string", "syntax", "uint32", "uint64",
    ],
    escape_reserved: escape_proto_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protobuf_naming() {
        assert_eq!(PROTOBUF_NAMING.type_name("audit_log"), "AuditLog");
        assert_eq!(PROTOBUF_NAMING.field_name("created_at"), "createdAt");
        assert_eq!(PROTOBUF_NAMING.constant_name("in_review"), "IN_REVIEW");
        assert_eq!(PROTOBUF_NAMING.file_name("audit_log", ".proto"), "AuditLog.proto");
    }

    #[test]
    fn test_protobuf_reserved_words() {
        assert_eq!(PROTOBUF_NAMING.field_name("message"), "message_");
        assert_eq!(PROTOBUF_NAMING.field_name("string"), "string_");
        assert_eq!(PROTOBUF_NAMING.field_name("body"), "body");
    }
}
