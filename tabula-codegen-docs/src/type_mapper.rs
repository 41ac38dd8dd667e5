//! Documentation type mapper implementation.

use tabula_codegen::TypeMapper;
use tabula_schema::EnumType;

use crate::{DOCS_NAMING, TYPES_FILE, naming::anchor};

/// Maps database types to the human-readable names used in table pages.
///
/// Enum types link to their section in `enums.md`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocsTypeMapper;

impl TypeMapper for DocsTypeMapper {
    fn decimal(&self) -> &'static str {
        "decimal"
    }

    fn primitive(&self, sql_type: &str) -> Option<&'static str> {
        let ty = match sql_type {
            "text" | "varchar" | "character varying" | "character" | "char" => "text",
            "int" | "integer" | "int4" => "integer",
            "smallint" | "int2" => "smallint",
            "bigint" | "int8" => "bigint",
            "serial" => "serial",
            "smallserial" => "smallserial",
            "bigserial" => "bigserial",
            "float" | "real" | "float4" => "real",
            "double" | "double precision" | "float8" => "double precision",
            "numeric" | "decimal" => "decimal",
            "boolean" | "bool" => "boolean",
            "uuid" => "uuid",
            "bytea" => "binary",
            "date" => "date",
            "time" | "time without time zone" => "time",
            "timestamp" | "timestamp without time zone" => "timestamp",
            "timestamp with time zone" | "timestamptz" => "timestamp with time zone",
            "json" | "jsonb" => "document",
            _ => return None,
        };
        Some(ty)
    }

    fn collection(&self, element: &str) -> String {
        format!("list of {}", element)
    }

    fn enum_name(&self, ty: &EnumType) -> String {
        let name = DOCS_NAMING.type_name(&ty.name);
        format!("[{}]({}#{})", name, TYPES_FILE, anchor(&name))
    }
}

#[cfg(test)]
mod tests {
    use tabula_schema::{Column, InspectResult};

    use super::*;

    fn map(column: Column) -> String {
        let schema = InspectResult::new([], [EnumType::new("user_status", ["a"])]).unwrap();
        DocsTypeMapper.map_type(&column, &schema)
    }

    #[test]
    fn test_readable_types() {
        assert_eq!(map(Column::new("id", "bigserial")), "bigserial");
        assert_eq!(map(Column::new("n", "int4")), "integer");
        assert_eq!(map(Column::new("at", "timestamptz")), "timestamp with time zone");
        assert_eq!(map(Column::new("at", "timestamp without time zone")), "timestamp");
        assert_eq!(map(Column::new("price", "numeric(10,2)")), "decimal");
        assert_eq!(map(Column::new("code", "character(3)")), "text");
        assert_eq!(map(Column::new("blob", "bytea")), "binary");
        assert_eq!(map(Column::new("doc", "json")), "document");
    }

    #[test]
    fn test_enum_links_to_types_page() {
        assert_eq!(
            map(Column::new("s", "user_status")),
            "[UserStatus](enums.md#userstatus)"
        );
        assert_eq!(
            map(Column::new("s", "user_status[]").array()),
            "list of [UserStatus](enums.md#userstatus)"
        );
    }

    #[test]
    fn test_unknown_type_is_kept() {
        assert_eq!(map(Column::new("ip", "inet")), "inet");
        assert_eq!(map(Column::new("ips", "inet[]").array()), "list of inet[]");
    }
}
