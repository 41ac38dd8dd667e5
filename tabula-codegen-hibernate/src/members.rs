//! Entity members, their annotations and metamodel attributes.

use std::collections::BTreeSet;

use serde::Serialize;
use tabula_codegen::{ColumnTraits, TypeMapper, WritePolicy, single_line};
use tabula_schema::{Column, InspectResult};

use crate::{HibernateTypeMapper, JAVA_NAMING};

/// Simple Java type names and the import each one needs.
const JAVA_IMPORTS: &[(&str, &str)] = &[
    ("BigDecimal", "java.math.BigDecimal"),
    ("LocalDate", "java.time.LocalDate"),
    ("LocalDateTime", "java.time.LocalDateTime"),
    ("LocalTime", "java.time.LocalTime"),
    ("OffsetDateTime", "java.time.OffsetDateTime"),
    ("Timestamp", "java.sql.Timestamp"),
    ("UUID", "java.util.UUID"),
    ("List", "java.util.List"),
    ("Map", "java.util.Map"),
];

/// Sorted, de-duplicated imports needed by a set of Java types.
pub fn imports_for<'a>(types: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut imports = BTreeSet::new();
    for ty in types {
        for token in ty.split(|c: char| !c.is_ascii_alphanumeric()) {
            if let Some((_, import)) = JAVA_IMPORTS.iter().find(|(name, _)| *name == token) {
                imports.insert(import.to_string());
            }
        }
    }
    imports.into_iter().collect()
}

/// One field of an entity class with its accessor pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityMember {
    /// Column name in the database.
    pub column: String,
    /// Field name, e.g. `createdAt`.
    pub field: String,
    /// Accessor suffix, e.g. `CreatedAt` for `getCreatedAt`.
    pub accessor: String,
    pub java_type: String,
    pub comment: String,
    /// Getter annotations, in emission order.
    pub annotations: Vec<String>,
    /// `public`, or `private` when writes to the column are restricted.
    pub setter_visibility: &'static str,
    /// Check constraint source, emitted as a comment in the setter.
    pub check: Option<String>,
}

/// One static attribute of a metamodel class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetamodelAttribute {
    /// `SingularAttribute`, `ListAttribute` or `MapAttribute`.
    pub kind: &'static str,
    pub field: String,
    /// Type arguments after the owning class, e.g. `String, String`.
    pub type_args: String,
}

pub(crate) struct MemberBuilder<'a> {
    pub schema: &'a InspectResult,
    pub package_name: &'a str,
    pub policy: &'a WritePolicy,
}

impl MemberBuilder<'_> {
    pub fn member(&self, column: &Column) -> EntityMember {
        let traits = ColumnTraits::analyze(column, self.schema, self.policy);
        let resolution = HibernateTypeMapper.resolve(column, self.schema);

        let mut annotations = Vec::new();
        if traits.identity {
            annotations.push("@Id".to_string());
        }
        if traits.generated {
            annotations.push("@GeneratedValue(strategy=GenerationType.IDENTITY)".to_string());
        }
        if traits.collection {
            annotations.push(format!(
                "@Type(type = \"{}ArrayUserType\")",
                array_type_prefix(&resolution.element)
            ));
        } else if let Some(ty) = traits.enum_type() {
            annotations.push(format!(
                "@Type(type = \"{}\")",
                self.qualified(&format!("{}UserType", JAVA_NAMING.type_name(&ty.name)))
            ));
        } else if traits.is_structured() {
            annotations.push("@Type(type = \"JsonUserType\")".to_string());
        }
        annotations.push(column_annotation(column, &traits));

        EntityMember {
            column: column.name.clone(),
            field: JAVA_NAMING.field_name(&column.name),
            accessor: JAVA_NAMING.type_name(&column.name),
            java_type: HibernateTypeMapper.map_type(column, self.schema),
            comment: single_line(column.comment.as_deref()),
            annotations,
            setter_visibility: if traits.write_restricted() {
                "private"
            } else {
                "public"
            },
            check: traits.check,
        }
    }

    pub fn attribute(&self, column: &Column) -> MetamodelAttribute {
        let traits = ColumnTraits::analyze(column, self.schema, self.policy);
        let element = HibernateTypeMapper.resolve(column, self.schema).element;

        let (kind, type_args) = if traits.is_structured() {
            ("MapAttribute", "String, String".to_string())
        } else if traits.collection {
            ("ListAttribute", element)
        } else {
            ("SingularAttribute", element)
        };

        MetamodelAttribute {
            kind,
            field: JAVA_NAMING.field_name(&column.name),
            type_args,
        }
    }

    fn qualified(&self, name: &str) -> String {
        if self.package_name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.package_name, name)
        }
    }
}

fn column_annotation(column: &Column, traits: &ColumnTraits<'_>) -> String {
    let mut args = vec![
        format!("name=\"{}\"", column.name),
        format!("nullable={}", traits.nullable),
    ];
    if traits.unique {
        args.push("unique=true".to_string());
    }
    if !traits.insertable {
        args.push("insertable=false".to_string());
    }
    if !traits.updatable {
        args.push("updatable=false".to_string());
    }
    format!("@Column({})", args.join(", "))
}

/// `String` -> `String`, `byte[]` -> `Byte`, `Map<String, String>` -> `MapStringString`.
fn array_type_prefix(element: &str) -> String {
    let mut chars = element.chars().filter(|c| c.is_ascii_alphanumeric());
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.collect::<String>(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use tabula_codegen::testing::{fixture_schema, user_schema};

    use super::*;

    fn builder<'a>(schema: &'a InspectResult, policy: &'a WritePolicy) -> MemberBuilder<'a> {
        MemberBuilder {
            schema,
            package_name: "com.acme",
            policy,
        }
    }

    fn column<'a>(schema: &'a InspectResult, table: &str, name: &str) -> &'a Column {
        schema.table(table).unwrap().find_column(name).unwrap()
    }

    #[test]
    fn test_identity_member() {
        let schema = user_schema();
        let policy = WritePolicy::default();
        let member = builder(&schema, &policy).member(column(&schema, "user", "id"));

        assert_eq!(member.java_type, "Integer");
        assert_eq!(
            member.annotations,
            [
                "@Id",
                "@GeneratedValue(strategy=GenerationType.IDENTITY)",
                "@Column(name=\"id\", nullable=false)",
            ]
        );
        assert_eq!(member.setter_visibility, "public");
    }

    #[test]
    fn test_not_insertable_member() {
        let schema = user_schema();
        let policy = WritePolicy {
            not_insertable_columns: vec!["created_at".into()],
            ..Default::default()
        };
        let member = builder(&schema, &policy).member(column(&schema, "user", "created_at"));

        assert_eq!(member.field, "createdAt");
        assert_eq!(member.accessor, "CreatedAt");
        assert_eq!(member.java_type, "OffsetDateTime");
        assert_eq!(
            member.annotations,
            ["@Column(name=\"created_at\", nullable=false, insertable=false)"]
        );
        assert_eq!(member.setter_visibility, "private");
    }

    #[test]
    fn test_conversions() {
        let schema = fixture_schema();
        let policy = WritePolicy::default();
        let builder = builder(&schema, &policy);

        let status = builder.member(column(&schema, "user", "status"));
        assert_eq!(status.annotations[0], "@Type(type = \"com.acme.StatusUserType\")");

        let roles = builder.member(column(&schema, "user", "roles"));
        assert_eq!(roles.java_type, "List<Role>");
        assert_eq!(roles.annotations[0], "@Type(type = \"RoleArrayUserType\")");

        let settings = builder.member(column(&schema, "account", "settings"));
        assert_eq!(settings.annotations[0], "@Type(type = \"JsonUserType\")");

        let email = builder.member(column(&schema, "user", "email"));
        assert_eq!(
            email.annotations,
            ["@Column(name=\"email\", nullable=false, unique=true)"]
        );
        assert_eq!(email.comment, "Login name");
    }

    #[test]
    fn test_check_constraint() {
        let schema = fixture_schema();
        let policy = WritePolicy::default();
        let member = builder(&schema, &policy).member(column(&schema, "account", "age"));
        assert_eq!(member.check.as_deref(), Some("CHECK ((age >= 0))"));
    }

    #[test]
    fn test_metamodel_attributes() {
        let schema = fixture_schema();
        let policy = WritePolicy::default();
        let builder = builder(&schema, &policy);

        let attr = |table, name| builder.attribute(column(&schema, table, name));
        assert_eq!(attr("user", "id").kind, "SingularAttribute");
        assert_eq!(attr("user", "id").type_args, "Integer");
        assert_eq!(attr("user", "roles").kind, "ListAttribute");
        assert_eq!(attr("user", "roles").type_args, "Role");
        assert_eq!(attr("account", "settings").kind, "MapAttribute");
        assert_eq!(attr("account", "settings").type_args, "String, String");
    }

    #[test]
    fn test_imports_for() {
        assert_eq!(
            imports_for(["List<OffsetDateTime>", "Map<String, String>", "Integer", "UUID"]),
            [
                "java.time.OffsetDateTime",
                "java.util.List",
                "java.util.Map",
                "java.util.UUID",
            ]
        );
        assert!(imports_for(["String", "Status"]).is_empty());
    }

    #[test]
    fn test_array_type_prefix() {
        assert_eq!(array_type_prefix("String"), "String");
        assert_eq!(array_type_prefix("byte[]"), "Byte");
        assert_eq!(array_type_prefix("Map<String, String>"), "MapStringString");
    }
}
