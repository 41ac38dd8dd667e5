//! Protocol Buffers type mapper implementation.

use tabula_codegen::TypeMapper;
use tabula_schema::EnumType;

use crate::PROTOBUF_NAMING;

/// Maps database types to proto3 scalar types.
///
/// Enum names are qualified with the package so messages in other files can
/// refer to them. Map fields cannot be repeated, so an array of documents
/// becomes `repeated string` holding each document as JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufTypeMapper<'a> {
    pub package_name: &'a str,
}

impl<'a> ProtobufTypeMapper<'a> {
    pub fn new(package_name: &'a str) -> Self {
        Self { package_name }
    }
}

impl TypeMapper for ProtobufTypeMapper<'_> {
    fn decimal(&self) -> &'static str {
        "string"
    }

    fn primitive(&self, sql_type: &str) -> Option<&'static str> {
        let ty = match sql_type {
            "text" | "varchar" | "character varying" | "character" | "char" => "string",
            "int" | "integer" | "int4" | "serial" | "smallint" | "int2" | "smallserial" => {
                "int32"
            }
            "bigint" | "int8" | "bigserial" => "int64",
            "float" | "real" | "float4" => "float",
            "double" | "double precision" | "float8" => "double",
            "numeric" | "decimal" => "string",
            "boolean" | "bool" => "bool",
            "uuid" => "string",
            "bytea" => "bytes",
            "date" | "time" | "time without time zone" => "string",
            "timestamp"
            | "timestamp without time zone"
            | "timestamp with time zone"
            | "timestamptz" => "string",
            "json" | "jsonb" => "map<string, string>",
            _ => return None,
        };
        Some(ty)
    }

    fn collection(&self, element: &str) -> String {
        if element.starts_with("map<") {
            return "repeated string".to_string();
        }
        format!("repeated {}", element)
    }

    fn enum_name(&self, ty: &EnumType) -> String {
        let name = PROTOBUF_NAMING.type_name(&ty.name);
        if self.package_name.is_empty() {
            name
        } else {
            format!("{}.{}", self.package_name, name)
        }
    }
}
