//! Hibernate type mapper implementation.

use tabula_codegen::TypeMapper;

/// Maps database types to boxed Java types.
#[derive(Debug, Clone, Copy, Default)]
pub struct HibernateTypeMapper;

impl TypeMapper for HibernateTypeMapper {
    fn decimal(&self) -> &'static str {
        "BigDecimal"
    }

    fn primitive(&self, sql_type: &str) -> Option<&'static str> {
        let ty = match sql_type {
            "text" | "varchar" | "character varying" | "character" | "char" => "String",
            "int" | "integer" | "int4" | "serial" => "Integer",
            "smallint" | "int2" | "smallserial" => "Short",
            "bigint" | "int8" | "bigserial" => "Long",
            "float" | "real" | "float4" => "Float",
            "double" | "double precision" | "float8" => "Double",
            "numeric" | "decimal" => "BigDecimal",
            "boolean" | "bool" => "Boolean",
            "uuid" => "UUID",
            "bytea" => "byte[]",
            "date" => "LocalDate",
            "time" | "time without time zone" => "LocalTime",
            "timestamp" => "Timestamp",
            "timestamp without time zone" => "LocalDateTime",
            "timestamp with time zone" | "timestamptz" => "OffsetDateTime",
            "json" | "jsonb" => "Map<String, String>",
            _ => return None,
        };
        Some(ty)
    }

    fn collection(&self, element: &str) -> String {
        format!("List<{}>", element)
    }
}
