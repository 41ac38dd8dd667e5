//! Documentation naming conventions.

use tabula_codegen::NamingConvention;
use tabula_core::{to_lower_camel, to_upper_camel, to_upper_snake};

fn verbatim(name: &str) -> String {
    name.to_string()
}

/// Page and anchor names. Field names are the lowerCamel form the code
/// targets use, shown next to the database column name.
pub const DOCS_NAMING: NamingConvention = NamingConvention {
    to_type: to_upper_camel,
    to_field: to_lower_camel,
    to_constant: to_upper_snake,
    reserved_words: &[],
    escape_reserved: verbatim,
};

/// The GitHub-style anchor of a heading that is a single UpperCamel word.
pub(crate) fn anchor(heading: &str) -> String {
    heading.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_naming() {
        assert_eq!(DOCS_NAMING.file_name("audit_log", ".md"), "AuditLog.md");
        assert_eq!(DOCS_NAMING.field_name("created_at"), "createdAt");
        assert_eq!(DOCS_NAMING.field_name("class"), "class");
        assert_eq!(anchor("UserStatus"), "userstatus");
    }
}
