use serde::Serialize;
use tabula_codegen::View;

use super::preamble;
use crate::MetamodelAttribute;

/// The `X_.java` static metamodel companion of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetamodelView {
    pub package_name: String,
    pub class_name: String,
    /// Imports for attribute type arguments, sorted.
    pub imports: Vec<String>,
    /// Distinct attribute kinds used, sorted.
    pub attribute_kinds: Vec<String>,
    pub attributes: Vec<MetamodelAttribute>,
}

impl View for MetamodelView {
    const TEMPLATE: &'static str = "metamodel";

    fn render_builtin(&self) -> String {
        preamble(&self.package_name)
            .when(!self.imports.is_empty(), |b| {
                b.each(&self.imports, |b, import| {
                    b.line(&format!("import {};", import))
                })
                .blank()
            })
            .each(&self.attribute_kinds, |b, kind| {
                b.line(&format!("import javax.persistence.metamodel.{};", kind))
            })
            .line("import javax.persistence.metamodel.StaticMetamodel;")
            .blank()
            .line(&format!("@StaticMetamodel({}.class)", self.class_name))
            .block_with_close(
                &format!("public abstract class {}_ {{", self.class_name),
                "}",
                |b| {
                    b.each(&self.attributes, |b, attr| {
                        b.line(&format!(
                            "public static volatile {}<{}, {}> {};",
                            attr.kind, self.class_name, attr.type_args, attr.field
                        ))
                    })
                },
            )
            .build()
    }
}
