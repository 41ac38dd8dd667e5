//! Enum member naming and ordinal assignment.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tabula_core::{is_integer_literal, to_upper_snake};
use tabula_schema::EnumType;

/// How literals without an explicit number get their ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalStrategy {
    /// `base + index` in declaration order. Ordinals may repeat.
    Positional { base: i64 },
    /// Smallest ordinal `>= base` not yet taken, in declaration order.
    /// Explicit integer literals are reserved first.
    NextFree { base: i64 },
}

/// One member of a generated enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Constant name, e.g. `ACTIVE` or `VALUE_1`.
    pub name: String,
    /// The literal as stored in the database.
    pub literal: String,
    pub ordinal: i64,
    /// Whether the ordinal was parsed from an integer literal.
    pub explicit: bool,
}

/// Build the members of an enum type in declaration order.
///
/// Distinct literals can share a constant name (`1` and `value_1` are both
/// `VALUE_1`); later ones get the first free `_2`, `_3`, ... suffix.
pub fn enum_members(ty: &EnumType, strategy: OrdinalStrategy) -> Vec<EnumMember> {
    let explicit: Vec<Option<i64>> = ty.values.iter().map(|v| v.parse::<i64>().ok()).collect();
    let mut taken: BTreeSet<i64> = explicit.iter().flatten().copied().collect();
    let mut names = HashSet::new();

    ty.values
        .iter()
        .zip(explicit)
        .enumerate()
        .map(|(index, (literal, parsed))| {
            let ordinal = match (parsed, strategy) {
                (Some(n), _) => n,
                (None, OrdinalStrategy::Positional { base }) => base + index as i64,
                (None, OrdinalStrategy::NextFree { base }) => {
                    let mut candidate = base;
                    while taken.contains(&candidate) {
                        candidate += 1;
                    }
                    taken.insert(candidate);
                    candidate
                }
            };

            EnumMember {
                name: unique_name(member_name(literal), &mut names),
                literal: literal.clone(),
                ordinal,
                explicit: parsed.is_some(),
            }
        })
        .collect()
}

fn unique_name(name: String, used: &mut HashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{}_{}", name, n);
        n += 1;
    }
    candidate
}

/// Constant name for a literal.
fn member_name(literal: &str) -> String {
    if is_integer_literal(literal) {
        return match literal.strip_prefix('-') {
            Some(digits) => format!("VALUE_NEG_{}", digits),
            None => format!("VALUE_{}", literal.trim_start_matches('+')),
        };
    }

    let sanitized: String = literal
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let name = to_upper_snake(&sanitized);

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("VALUE_{}", name)
    } else {
        name
    }
}
