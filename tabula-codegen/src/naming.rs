//! Naming conventions for target languages.

/// Target-specific naming conventions.
///
/// Defines how schema identifiers become type, field and constant names,
/// and how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a table or type name to a type name (e.g., "user_role" -> "UserRole")
    pub to_type: fn(&str) -> String,
    /// Transform a column name to a field name (e.g., "created_at" -> "createdAt")
    pub to_field: fn(&str) -> String,
    /// Transform an identifier to a constant name (e.g., "in_review" -> "IN_REVIEW")
    pub to_constant: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_" in Java)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a table or type name to a type name.
    pub fn type_name(&self, name: &str) -> String {
        (self.to_type)(name)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.to_field)(name);
        self.safe_name(&transformed)
    }

    /// Transform an identifier to a constant name.
    pub fn constant_name(&self, name: &str) -> String {
        (self.to_constant)(name)
    }

    /// Output file name: the type name plus a fixed suffix (e.g., "User" + ".java").
    pub fn file_name(&self, name: &str, suffix: &str) -> String {
        format!("{}{}", self.type_name(name), suffix)
    }
}
