use thiserror::Error;

/// A violation of the schema model's naming invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate table '{0}'")]
    DuplicateTable(String),

    #[error("duplicate enum type '{0}'")]
    DuplicateType(String),

    #[error("duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("enum type '{0}' has the same name as a table")]
    TypeShadowsTable(String),

    #[error("duplicate value '{value}' in enum type '{ty}'")]
    DuplicateValue { ty: String, value: String },
}
