//! Mapping raw database types to target types.
//!
//! Every target resolves a column's type in the same order:
//!
//! 1. a decimal with explicit precision (`numeric(10,2)`) maps to the target's
//!    arbitrary-precision type;
//! 2. the array marker is stripped, and array columns are wrapped in the
//!    target's collection after resolution;
//! 3. exact match in the target's primitive table;
//! 4. prefix match for parameterized types (`character varying(255)`);
//! 5. an enum type of the same name maps to its type name;
//! 6. anything else passes through verbatim, so unknown types stay visible in
//!    the generated output instead of failing the build.

use tabula_core::to_upper_camel;
use tabula_schema::{Column, EnumType, InspectResult};

/// Parameterized type prefixes, longest first.
pub const PARAMETERIZED_PREFIXES: &[&str] = &[
    "character varying",
    "character",
    "varchar",
    "char",
    "numeric",
    "decimal",
];

/// Whether a raw type descriptor is a decimal with explicit precision.
pub fn is_decimal(data_type: &str) -> bool {
    data_type.contains("numeric(") || data_type.contains("decimal(")
}

/// Whether a (stripped) type holds a structured document.
pub fn is_structured(base_type: &str) -> bool {
    matches!(base_type, "json" | "jsonb")
}

/// Which rule resolved a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSource {
    Decimal,
    Primitive,
    Parameterized,
    Enum,
    Unmapped,
}

/// A resolved element type, before collection wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeResolution {
    pub element: String,
    pub source: TypeSource,
}

/// Trait for mapping database types to target type strings.
///
/// Implement the table methods for each target; the resolution order lives
/// in the provided methods and must not be overridden.
pub trait TypeMapper {
    /// Arbitrary-precision decimal type.
    fn decimal(&self) -> &'static str;

    /// Exact match against the target's primitive table.
    fn primitive(&self, sql_type: &str) -> Option<&'static str>;

    /// Wrap an element type in the target's ordered collection.
    fn collection(&self, element: &str) -> String;

    /// Type name for a user-defined enum.
    fn enum_name(&self, ty: &EnumType) -> String {
        to_upper_camel(&ty.name)
    }

    /// Match a parameterized type such as `character(10)` by its prefix.
    fn parameterized(&self, sql_type: &str) -> Option<&'static str> {
        PARAMETERIZED_PREFIXES
            .iter()
            .find(|prefix| {
                sql_type
                    .strip_prefix(**prefix)
                    .is_some_and(|rest| rest.starts_with('('))
            })
            .and_then(|prefix| self.primitive(prefix))
    }

    /// Resolve the element type of a column.
    fn resolve(&self, column: &Column, schema: &InspectResult) -> TypeResolution {
        let resolved = |element: String, source| TypeResolution { element, source };

        if is_decimal(&column.data_type) {
            return resolved(self.decimal().to_string(), TypeSource::Decimal);
        }

        let base = column.base_type();
        if let Some(ty) = self.primitive(&base) {
            return resolved(ty.to_string(), TypeSource::Primitive);
        }
        if let Some(ty) = self.parameterized(&base) {
            return resolved(ty.to_string(), TypeSource::Parameterized);
        }
        if let Some(ty) = schema.find_type(&base) {
            return resolved(self.enum_name(ty), TypeSource::Enum);
        }

        resolved(column.data_type.clone(), TypeSource::Unmapped)
    }

    /// Map a column to its full target type, collection-wrapped for arrays.
    fn map_type(&self, column: &Column, schema: &InspectResult) -> String {
        let resolution = self.resolve(column, schema);
        if column.array {
            self.collection(&resolution.element)
        } else {
            resolution.element
        }
    }
}
