//! Identifier normalization for generated code.
//!
//! Every function here takes a snake_case database identifier and is total:
//! empty segments produced by leading, trailing or doubled underscores are
//! dropped rather than rejected.

fn segments(s: &str) -> impl Iterator<Item = &str> {
    s.split('_').filter(|part| !part.is_empty())
}

/// Convert a snake_case identifier to UpperCamelCase (e.g., "user_role" -> "UserRole")
pub fn to_upper_camel(s: &str) -> String {
    segments(s)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a snake_case identifier to lowerCamelCase (e.g., "created_at" -> "createdAt")
pub fn to_lower_camel(s: &str) -> String {
    let upper = to_upper_camel(s);
    let mut chars = upper.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a snake_case identifier to UPPER_SNAKE_CASE (e.g., "in_review" -> "IN_REVIEW")
pub fn to_upper_snake(s: &str) -> String {
    segments(s)
        .map(|part| part.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Whether an enum literal is an integer, in which case it carries its own ordinal.
pub fn is_integer_literal(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_upper_camel() {
        assert_eq!(to_upper_camel("user"), "User");
        assert_eq!(to_upper_camel("user_role"), "UserRole");
        assert_eq!(to_upper_camel("flyway_schema_history"), "FlywaySchemaHistory");
        assert_eq!(to_upper_camel("address_v2"), "AddressV2");
        assert_eq!(to_upper_camel(""), "");
    }

    #[test]
    fn test_to_lower_camel() {
        assert_eq!(to_lower_camel("id"), "id");
        assert_eq!(to_lower_camel("created_at"), "createdAt");
        assert_eq!(to_lower_camel("last_login_ip"), "lastLoginIp");
        assert_eq!(to_lower_camel(""), "");
    }

    #[test]
    fn test_to_upper_snake() {
        assert_eq!(to_upper_snake("active"), "ACTIVE");
        assert_eq!(to_upper_snake("in_review"), "IN_REVIEW");
        assert_eq!(to_upper_snake("42"), "42");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(to_upper_camel("_user__role_"), "UserRole");
        assert_eq!(to_lower_camel("__created_at"), "createdAt");
        assert_eq!(to_upper_snake("a__b"), "A_B");
    }

    #[test]
    fn test_camel_forms_differ_only_in_first_char() {
        for ident in ["id", "user_id", "created_at", "a_b_c", "x1_y2", "order_2024_q1"] {
            let upper = to_upper_camel(ident);
            let lower = to_lower_camel(ident);

            assert!(upper.starts_with(|c: char| c.is_ascii_uppercase()));
            assert!(lower.starts_with(|c: char| c.is_ascii_lowercase()));
            assert_eq!(upper[1..], lower[1..]);
            assert!(upper[..1].eq_ignore_ascii_case(&lower[..1]));
        }
    }

    #[test]
    fn test_is_integer_literal() {
        assert!(is_integer_literal("1"));
        assert!(is_integer_literal("-7"));
        assert!(!is_integer_literal("1.5"));
        assert!(!is_integer_literal("active"));
        assert!(!is_integer_literal(""));
    }
}
