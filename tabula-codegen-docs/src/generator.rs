use std::path::Path;

use serde::Deserialize;
use tabula_codegen::{
    ColumnTraits, Conversion, DiskEmitter, Emitter, GenerateResult, Generator, GeneratorKind,
    OrdinalStrategy, OutputOptions, OutputTarget, PreviewEmitter, PreviewFile, Renderer,
    Templates, TypeMapper, View, WritePolicy, enum_members, parse_options, single_line,
    warn_missing_primary_key,
};
use tabula_core::{Result, ResultExt};
use tabula_schema::{Column, InspectResult, Table};

use crate::{
    DOCS_NAMING, DocsTypeMapper,
    files::{ColumnRow, DocType, TableView, TypesView},
};

/// Name of the aggregate enum page.
pub const TYPES_FILE: &str = "enums.md";

const TEMPLATES: &[&str] = &[TableView::TEMPLATE, TypesView::TEMPLATE];

/// Configuration of the docs target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocsOptions {
    #[serde(flatten)]
    pub output: OutputOptions,
    /// Shown under the heading of every page.
    #[serde(default)]
    pub title: Option<String>,
    /// Documented as `not insertable` / `not updatable`.
    #[serde(flatten)]
    pub policy: WritePolicy,
}

/// Generates Markdown pages describing the schema.
#[derive(Debug)]
pub struct DocsGenerator<R = Templates> {
    target: OutputTarget<R>,
    options: DocsOptions,
}

impl DocsGenerator {
    /// Configure from a raw configuration entry. Relative paths resolve
    /// against `root`.
    pub fn new(root: &Path, raw: &serde_json::Value) -> Result<Self> {
        let options = parse_options(GeneratorKind::Docs, raw)?;
        Self::from_options(root, options)
    }

    pub fn from_options(root: &Path, options: DocsOptions) -> Result<Self> {
        let target = OutputTarget::open(GeneratorKind::Docs, root, &options.output, TEMPLATES)?;
        Ok(Self { target, options })
    }
}

impl<R: Renderer> DocsGenerator<R> {
    /// Render with a different renderer.
    pub fn with_renderer<S: Renderer>(self, renderer: S) -> DocsGenerator<S> {
        DocsGenerator {
            target: self.target.with_renderer(renderer),
            options: self.options,
        }
    }

    pub fn options(&self) -> &DocsOptions {
        &self.options
    }

    /// Emit every table page, then `enums.md`, stopping at the first failure.
    pub fn generate_into<E: Emitter>(&self, schema: &InspectResult, emitter: &mut E) -> Result<()> {
        let renderer = self.target.renderer();

        for table in self.target.tables(schema) {
            let view = self.table_view(table, schema);
            emitter
                .emit(&DOCS_NAMING.file_name(&table.name, ".md"), || {
                    renderer.render(&view)
                })
                .in_table(&table.name)?;
        }

        let view = self.types_view(schema);
        emitter.emit(TYPES_FILE, || renderer.render(&view))
    }

    pub fn table_view(&self, table: &Table, schema: &InspectResult) -> TableView {
        warn_missing_primary_key(GeneratorKind::Docs.as_str(), table);

        TableView {
            title: self.options.title.clone(),
            table_name: table.name.clone(),
            comment: single_line(table.comment.as_deref()),
            columns: table.columns.iter().map(|c| self.row(c, schema)).collect(),
        }
    }

    fn row(&self, column: &Column, schema: &InspectResult) -> ColumnRow {
        let traits = ColumnTraits::analyze(column, schema, &self.options.policy);

        ColumnRow {
            name: column.name.clone(),
            field: DOCS_NAMING.field_name(&column.name),
            sql_type: column.data_type.clone(),
            doc_type: DocsTypeMapper.map_type(column, schema),
            attributes: attributes(&traits),
            comment: single_line(column.comment.as_deref()),
        }
    }

    pub fn types_view(&self, schema: &InspectResult) -> TypesView {
        TypesView {
            title: self.options.title.clone(),
            types: schema
                .types()
                .map(|ty| DocType {
                    name: DOCS_NAMING.type_name(&ty.name),
                    sql_name: ty.name.clone(),
                    comment: single_line(ty.comment.as_deref()),
                    members: enum_members(ty, OrdinalStrategy::Positional { base: 0 }),
                })
                .collect(),
        }
    }
}

/// Attribute list of a column, in a fixed order.
fn attributes(traits: &ColumnTraits<'_>) -> Vec<String> {
    let flags = [
        (traits.identity, "primary key"),
        (traits.generated, "serial"),
        (traits.unique, "unique"),
        (!traits.nullable, "not null"),
    ];
    let mut attributes: Vec<String> = flags
        .into_iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| name.to_string())
        .collect();

    if let Some(foreign) = traits.foreign {
        attributes.push(format!("references {}({})", foreign.table, foreign.column));
    }
    match traits.conversion {
        Some(Conversion::Enum(_)) => attributes.push("enum".to_string()),
        Some(Conversion::Structured) => attributes.push("json".to_string()),
        None => {}
    }
    if traits.collection {
        attributes.push("array".to_string());
    }
    if !traits.insertable {
        attributes.push("not insertable".to_string());
    }
    if !traits.updatable {
        attributes.push("not updatable".to_string());
    }
    if let Some(check) = &traits.check {
        attributes.push(format!("check: {}", check));
    }

    attributes
}

impl<R: Renderer> Generator for DocsGenerator<R> {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Docs
    }

    fn output_dir(&self) -> &Path {
        self.target.output_dir()
    }

    fn build(&self, schema: &InspectResult) -> Result<GenerateResult> {
        self.target.log_start();

        let mut emitter = DiskEmitter::new(self.output_dir());
        self.generate_into(schema, &mut emitter)?;

        Ok(GenerateResult {
            kind: self.kind(),
            output: self.output_dir().to_path_buf(),
            files: emitter.into_written(),
        })
    }

    fn preview(&self, schema: &InspectResult) -> Result<Vec<PreviewFile>> {
        let mut emitter = PreviewEmitter::new(self.output_dir());
        self.generate_into(schema, &mut emitter)?;
        Ok(emitter.into_files())
    }
}
