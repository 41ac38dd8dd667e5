//! Tables, columns and enumerated types.

use serde::Deserialize;

/// A database table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Table {
    /// snake_case name, unique within the schema.
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            columns: Vec::new(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Look up a column by exact name.
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether any column is flagged as (part of) the primary key.
    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.primary_key)
    }
}

/// A table column as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Column {
    pub name: String,
    /// Raw type descriptor, e.g. `numeric(10,2)`, `text`, `status[]`.
    pub data_type: String,
    #[serde(default)]
    pub array: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub serial: bool,
    #[serde(default)]
    pub foreign: Option<ForeignReference>,
    #[serde(default)]
    pub check: Option<CheckConstraint>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            array: false,
            primary_key: false,
            unique: false,
            not_null: false,
            serial: false,
            foreign: None,
            check: None,
            comment: None,
        }
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn serial(mut self) -> Self {
        self.serial = true;
        self
    }

    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.foreign = Some(ForeignReference {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    pub fn check(mut self, source: impl Into<String>) -> Self {
        self.check = Some(CheckConstraint {
            kind: ConstraintKind::Check,
            source: source.into(),
        });
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The type descriptor with its array marker removed.
    pub fn base_type(&self) -> String {
        self.data_type.replacen("[]", "", 1)
    }

    /// Source text of a check constraint, if the column has one.
    pub fn check_source(&self) -> Option<&str> {
        self.check
            .as_ref()
            .filter(|c| c.kind == ConstraintKind::Check)
            .map(|c| c.source.as_str())
    }
}

/// Target of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForeignReference {
    pub table: String,
    pub column: String,
}

/// A constraint attached to a column. Only ever rendered as a comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckConstraint {
    pub kind: ConstraintKind,
    /// Raw constraint definition, e.g. `CHECK ((age >= 0))`.
    pub source: String,
}

/// Constraint type tag, following the catalog's `contype` letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ConstraintKind {
    #[serde(rename = "c", alias = "check")]
    Check,
    #[serde(other)]
    Other,
}

/// A user-defined enumerated type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumType {
    pub name: String,
    /// Distinct literals in declaration order.
    pub values: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl EnumType {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_type_strips_array_marker() {
        assert_eq!(Column::new("tags", "text[]").array().base_type(), "text");
        assert_eq!(Column::new("id", "bigint").base_type(), "bigint");
    }

    #[test]
    fn test_check_source_requires_check_kind() {
        let checked = Column::new("age", "integer").check("CHECK ((age >= 0))");
        assert_eq!(checked.check_source(), Some("CHECK ((age >= 0))"));

        let mut other = Column::new("code", "text");
        other.check = Some(CheckConstraint {
            kind: ConstraintKind::Other,
            source: "UNIQUE (code)".to_string(),
        });
        assert_eq!(other.check_source(), None);
    }

    #[test]
    fn test_has_primary_key() {
        let with_pk = Table::new("user").column(Column::new("id", "serial").primary_key());
        let without = Table::new("audit_log").column(Column::new("message", "text"));

        assert!(with_pk.has_primary_key());
        assert!(!without.has_primary_key());
        assert!(with_pk.find_column("id").is_some());
        assert!(with_pk.find_column("ID").is_none());
    }

    #[test]
    fn test_deserialize_column_defaults() {
        let column: Column = serde_json::from_str(
            r#"{"name": "score", "data_type": "numeric(10,2)", "check": {"kind": "c", "source": "CHECK (score > 0)"}}"#,
        )
        .unwrap();

        assert_eq!(column.name, "score");
        assert!(!column.array && !column.primary_key && !column.not_null);
        assert_eq!(column.check_source(), Some("CHECK (score > 0)"));
    }

    #[test]
    fn test_deserialize_unknown_constraint_kind() {
        let check: CheckConstraint =
            serde_json::from_str(r#"{"kind": "f", "source": "FOREIGN KEY (a) REFERENCES b(a)"}"#)
                .unwrap();
        assert_eq!(check.kind, ConstraintKind::Other);
    }
}
