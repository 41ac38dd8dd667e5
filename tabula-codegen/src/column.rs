//! Column trait analysis shared by all member builders.

use serde::Deserialize;
use tabula_schema::{Column, EnumType, ForeignReference, InspectResult, Table};
use tracing::warn;

use crate::mapping::is_structured;

/// Columns whose writes are restricted by configuration.
///
/// A column listed in either set is read-only for that operation; listing
/// it in both is allowed and behaves the same as listing it once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WritePolicy {
    pub not_insertable_columns: Vec<String>,
    pub not_updatable_columns: Vec<String>,
}

impl WritePolicy {
    pub fn is_insertable(&self, column: &str) -> bool {
        !self.not_insertable_columns.iter().any(|c| c == column)
    }

    pub fn is_updatable(&self, column: &str) -> bool {
        !self.not_updatable_columns.iter().any(|c| c == column)
    }
}

/// How a column value is converted to and from its target representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion<'a> {
    /// A user-defined enum type.
    Enum(&'a EnumType),
    /// A json/jsonb document.
    Structured,
}

/// Facts about a column that drive target decorations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTraits<'a> {
    pub identity: bool,
    pub generated: bool,
    pub unique: bool,
    pub nullable: bool,
    pub conversion: Option<Conversion<'a>>,
    pub collection: bool,
    pub insertable: bool,
    pub updatable: bool,
    /// Check constraint source, collapsed to one line.
    pub check: Option<String>,
    pub foreign: Option<&'a ForeignReference>,
}

impl<'a> ColumnTraits<'a> {
    pub fn analyze(column: &'a Column, schema: &'a InspectResult, policy: &WritePolicy) -> Self {
        let base = column.base_type();
        let conversion = match schema.find_type(&base) {
            Some(ty) => Some(Conversion::Enum(ty)),
            None if is_structured(&base) => Some(Conversion::Structured),
            None => None,
        };

        Self {
            identity: column.primary_key,
            generated: column.serial,
            unique: column.unique,
            nullable: !column.not_null,
            conversion,
            collection: column.array,
            insertable: policy.is_insertable(&column.name),
            updatable: policy.is_updatable(&column.name),
            check: column.check_source().map(|src| single_line(Some(src))),
            foreign: column.foreign.as_ref(),
        }
    }

    /// Whether any write to the column is restricted.
    pub fn write_restricted(&self) -> bool {
        !self.insertable || !self.updatable
    }

    pub fn enum_type(&self) -> Option<&'a EnumType> {
        match self.conversion {
            Some(Conversion::Enum(ty)) => Some(ty),
            _ => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self.conversion, Some(Conversion::Structured))
    }
}

/// Collapse multi-line text into one line. Line breaks become single
/// spaces so words on either side stay apart.
pub fn single_line(comment: Option<&str>) -> String {
    comment
        .map(|c| {
            c.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Log a warning when a table has no primary key. Generation continues.
pub fn warn_missing_primary_key(target: &str, table: &Table) {
    if !table.has_primary_key() {
        warn!(target_kind = target, table = %table.name, "table has no primary key");
    }
}
