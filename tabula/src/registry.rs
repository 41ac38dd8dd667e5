//! Generator registry.
//!
//! Maps each configured `type` to the constructor of its target.

use std::path::Path;

use serde_json::Value;
use tabula_codegen::{Generator, GeneratorKind};
use tabula_codegen_docs::DocsGenerator;
use tabula_codegen_hibernate::HibernateGenerator;
use tabula_codegen_protobuf::ProtobufGenerator;
use tabula_config::GeneratorEntry;
use tabula_core::Result;

/// Builds a configured generator from the configuration root and its raw
/// options.
pub type Constructor = fn(&Path, &Value) -> Result<Box<dyn Generator>>;

fn hibernate(root: &Path, raw: &Value) -> Result<Box<dyn Generator>> {
    Ok(Box::new(HibernateGenerator::new(root, raw)?))
}

fn protobuf(root: &Path, raw: &Value) -> Result<Box<dyn Generator>> {
    Ok(Box::new(ProtobufGenerator::new(root, raw)?))
}

fn docs(root: &Path, raw: &Value) -> Result<Box<dyn Generator>> {
    Ok(Box::new(DocsGenerator::new(root, raw)?))
}

pub fn constructor(kind: GeneratorKind) -> Constructor {
    match kind {
        GeneratorKind::Hibernate => hibernate,
        GeneratorKind::Protobuf => protobuf,
        GeneratorKind::Docs => docs,
    }
}

/// Construct every configured generator, in order. The first configuration
/// error aborts.
pub fn configure(root: &Path, entries: &[GeneratorEntry]) -> Result<Vec<Box<dyn Generator>>> {
    entries
        .iter()
        .map(|entry| constructor(entry.kind)(root, &entry.options))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tabula_core::ErrorCategory;
    use tempfile::TempDir;

    use super::*;

    fn entry(kind: GeneratorKind, options: Value) -> GeneratorEntry {
        GeneratorEntry { kind, options }
    }

    #[test]
    fn test_constructor_matches_kind() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();
        let options = json!({"output": "out", "package_name": "acme"});

        for kind in GeneratorKind::ALL {
            let generator = constructor(kind)(temp.path(), &options).unwrap();
            assert_eq!(generator.kind(), kind);
            assert_eq!(generator.output_dir(), temp.path().join("out"));
        }
    }

    #[test]
    fn test_configure_keeps_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();

        let generators = configure(
            temp.path(),
            &[
                entry(GeneratorKind::Docs, json!({"output": "out"})),
                entry(GeneratorKind::Protobuf, json!({"output": "out"})),
            ],
        )
        .unwrap();

        let kinds: Vec<_> = generators.iter().map(|g| g.kind()).collect();
        assert_eq!(kinds, [GeneratorKind::Docs, GeneratorKind::Protobuf]);
    }

    #[test]
    fn test_configure_fails_on_first_bad_entry() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();

        let err = configure(
            temp.path(),
            &[
                entry(GeneratorKind::Docs, json!({"output": "out"})),
                entry(GeneratorKind::Hibernate, json!({"output": "missing", "package_name": "p"})),
            ],
        )
        .err()
        .unwrap();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().starts_with("invalid hibernate configuration"));
    }
}
