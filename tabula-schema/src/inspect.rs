//! The introspected schema and its type lookup.

use std::collections::HashSet;

use indexmap::{IndexMap, map::Entry};
use serde::Deserialize;

use crate::{EnumType, SchemaError, Table};

/// Result of introspecting a database schema.
///
/// Tables and types keep their declaration order. Names are unique within
/// each namespace, no enum type shares a name with a table, and the values
/// of an enum type are distinct. All of this is checked on construction, so
/// every generator sees a valid model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "RawInspectResult")]
pub struct InspectResult {
    tables: IndexMap<String, Table>,
    types: IndexMap<String, EnumType>,
}

#[derive(Deserialize)]
struct RawInspectResult {
    #[serde(default)]
    tables: Vec<Table>,
    #[serde(default)]
    types: Vec<EnumType>,
}

impl TryFrom<RawInspectResult> for InspectResult {
    type Error = SchemaError;

    fn try_from(raw: RawInspectResult) -> Result<Self, Self::Error> {
        InspectResult::new(raw.tables, raw.types)
    }
}

impl InspectResult {
    /// Build a schema model, validating name uniqueness.
    pub fn new(
        tables: impl IntoIterator<Item = Table>,
        types: impl IntoIterator<Item = EnumType>,
    ) -> Result<Self, SchemaError> {
        let mut by_name = IndexMap::new();
        for table in tables {
            let mut seen = HashSet::new();
            for column in &table.columns {
                if !seen.insert(column.name.as_str()) {
                    return Err(SchemaError::DuplicateColumn {
                        table: table.name.clone(),
                        column: column.name.clone(),
                    });
                }
            }

            match by_name.entry(table.name.clone()) {
                Entry::Occupied(_) => return Err(SchemaError::DuplicateTable(table.name)),
                Entry::Vacant(slot) => {
                    slot.insert(table);
                }
            }
        }

        let mut type_index = IndexMap::new();
        for ty in types {
            if by_name.contains_key(&ty.name) {
                return Err(SchemaError::TypeShadowsTable(ty.name));
            }
            let mut values = HashSet::new();
            if let Some(value) = ty.values.iter().find(|v| !values.insert(v.as_str())) {
                return Err(SchemaError::DuplicateValue {
                    ty: ty.name.clone(),
                    value: value.clone(),
                });
            }
            match type_index.entry(ty.name.clone()) {
                Entry::Occupied(_) => return Err(SchemaError::DuplicateType(ty.name)),
                Entry::Vacant(slot) => {
                    slot.insert(ty);
                }
            }
        }

        Ok(Self {
            tables: by_name,
            types: type_index,
        })
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> {
        self.tables.values()
    }

    /// Enum types in declaration order.
    pub fn types(&self) -> impl ExactSizeIterator<Item = &EnumType> {
        self.types.values()
    }

    /// Look up a table by exact name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Look up an enum type by exact, case-sensitive name.
    pub fn find_type(&self, name: &str) -> Option<&EnumType> {
        self.types.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Column;

    fn sample() -> InspectResult {
        InspectResult::new(
            [
                Table::new("user").column(Column::new("id", "serial").primary_key()),
                Table::new("account"),
                Table::new("flyway_schema_history"),
            ],
            [
                EnumType::new("status", ["1", "2", "active"]),
                EnumType::new("role", ["admin", "member"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_preserves_declaration_order() {
        let schema = sample();
        let tables: Vec<_> = schema.tables().map(|t| t.name.as_str()).collect();
        let types: Vec<_> = schema.types().map(|t| t.name.as_str()).collect();

        assert_eq!(tables, ["user", "account", "flyway_schema_history"]);
        assert_eq!(types, ["status", "role"]);
    }

    #[test]
    fn test_find_type_is_exact() {
        let schema = sample();
        assert_eq!(
            schema.find_type("status").map(|t| t.values.len()),
            Some(3)
        );
        assert!(schema.find_type("Status").is_none());
        assert!(schema.find_type("user").is_none());
    }

    #[test]
    fn test_rejects_duplicate_tables() {
        let err = InspectResult::new([Table::new("user"), Table::new("user")], []).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateTable("user".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_types() {
        let err = InspectResult::new(
            [],
            [EnumType::new("role", ["a"]), EnumType::new("role", ["b"])],
        )
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateType("role".to_string()));
    }

    #[test]
    fn test_rejects_type_named_like_table() {
        let err = InspectResult::new([Table::new("role")], [EnumType::new("role", ["a"])])
            .unwrap_err();
        assert_eq!(err, SchemaError::TypeShadowsTable("role".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_enum_values() {
        let err = InspectResult::new([], [EnumType::new("status", ["active", "1", "active"])])
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateValue {
                ty: "status".to_string(),
                value: "active".to_string(),
            }
        );

        // Equal as numbers, distinct as literals.
        assert!(InspectResult::new([], [EnumType::new("code", ["1", "01"])]).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let table = Table::new("user")
            .column(Column::new("id", "int"))
            .column(Column::new("id", "text"));
        let err = InspectResult::new([table], []).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateColumn { .. }));
    }

    #[test]
    fn test_deserialize_validates() {
        let schema: InspectResult = serde_json::from_str(
            r#"{"tables": [{"name": "user", "columns": [{"name": "id", "data_type": "serial"}]}]}"#,
        )
        .unwrap();
        assert_eq!(schema.tables().len(), 1);
        assert_eq!(schema.types().len(), 0);

        let dup = serde_json::from_str::<InspectResult>(
            r#"{"tables": [{"name": "user"}, {"name": "user"}]}"#,
        );
        assert!(dup.unwrap_err().to_string().contains("duplicate table 'user'"));
    }
}
