use std::path::Path;

use serde::Deserialize;
use tabula_codegen::{
    DiskEmitter, Emitter, GenerateResult, Generator, GeneratorKind, OrdinalStrategy,
    OutputOptions, OutputTarget, PreviewEmitter, PreviewFile, Renderer, Templates, View,
    WritePolicy, enum_members, parse_options, single_line, warn_missing_primary_key,
};
use tabula_core::{Result, ResultExt};
use tabula_schema::{Column, EnumType, InspectResult, Table};

use crate::{
    JAVA_NAMING, imports_for,
    files::{EntityView, EnumView, MetamodelView, UserTypeView},
    members::MemberBuilder,
};

/// Templates a template directory must provide.
const TEMPLATES: &[&str] = &[
    EntityView::TEMPLATE,
    MetamodelView::TEMPLATE,
    EnumView::TEMPLATE,
    UserTypeView::TEMPLATE,
];

/// Configuration of the Hibernate target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HibernateOptions {
    #[serde(flatten)]
    pub output: OutputOptions,
    /// Java package of the generated classes.
    pub package_name: String,
    #[serde(flatten)]
    pub policy: WritePolicy,
    /// Columns left out of every entity, by exact name.
    #[serde(default)]
    pub ignore_columns: Vec<String>,
}

/// Generates Hibernate entities, metamodels and enum user types.
#[derive(Debug)]
pub struct HibernateGenerator<R = Templates> {
    target: OutputTarget<R>,
    options: HibernateOptions,
}

impl HibernateGenerator {
    /// Configure from a raw configuration entry. Relative paths resolve
    /// against `root`.
    pub fn new(root: &Path, raw: &serde_json::Value) -> Result<Self> {
        let options = parse_options(GeneratorKind::Hibernate, raw)?;
        Self::from_options(root, options)
    }

    pub fn from_options(root: &Path, options: HibernateOptions) -> Result<Self> {
        let target =
            OutputTarget::open(GeneratorKind::Hibernate, root, &options.output, TEMPLATES)?;
        Ok(Self { target, options })
    }
}

impl<R: Renderer> HibernateGenerator<R> {
    /// Render with a different renderer.
    pub fn with_renderer<S: Renderer>(self, renderer: S) -> HibernateGenerator<S> {
        HibernateGenerator {
            target: self.target.with_renderer(renderer),
            options: self.options,
        }
    }

    pub fn options(&self) -> &HibernateOptions {
        &self.options
    }

    /// Emit every file for `schema`, stopping at the first failure.
    pub fn generate_into<E: Emitter>(&self, schema: &InspectResult, emitter: &mut E) -> Result<()> {
        for table in self.target.tables(schema) {
            self.generate_table(table, schema, emitter).in_table(&table.name)?;
        }
        for ty in schema.types() {
            self.generate_type(ty, emitter).in_type(&ty.name)?;
        }
        Ok(())
    }

    fn generate_table<E: Emitter>(
        &self,
        table: &Table,
        schema: &InspectResult,
        emitter: &mut E,
    ) -> Result<()> {
        let renderer = self.target.renderer();

        let entity = self.entity_view(table, schema);
        emitter.emit(&JAVA_NAMING.file_name(&table.name, ".java"), || {
            renderer.render(&entity)
        })?;

        let metamodel = self.metamodel_view(table, schema);
        emitter.emit(&JAVA_NAMING.file_name(&table.name, "_.java"), || {
            renderer.render(&metamodel)
        })
    }

    fn generate_type<E: Emitter>(&self, ty: &EnumType, emitter: &mut E) -> Result<()> {
        let renderer = self.target.renderer();

        let view = self.enum_view(ty);
        emitter.emit(&JAVA_NAMING.file_name(&ty.name, ".java"), || renderer.render(&view))?;

        let view = self.user_type_view(ty);
        emitter.emit(&JAVA_NAMING.file_name(&ty.name, "UserType.java"), || {
            renderer.render(&view)
        })
    }

    fn columns<'a>(&'a self, table: &'a Table) -> impl Iterator<Item = &'a Column> {
        table
            .columns
            .iter()
            .filter(|c| !self.options.ignore_columns.contains(&c.name))
    }

    fn members<'a>(&'a self, schema: &'a InspectResult) -> MemberBuilder<'a> {
        MemberBuilder {
            schema,
            package_name: &self.options.package_name,
            policy: &self.options.policy,
        }
    }

    pub fn entity_view(&self, table: &Table, schema: &InspectResult) -> EntityView {
        warn_missing_primary_key(GeneratorKind::Hibernate.as_str(), table);

        let builder = self.members(schema);
        let members: Vec<_> = self.columns(table).map(|c| builder.member(c)).collect();

        EntityView {
            package_name: self.options.package_name.clone(),
            class_name: JAVA_NAMING.type_name(&table.name),
            table_name: table.name.clone(),
            comment: single_line(table.comment.as_deref()),
            imports: imports_for(members.iter().map(|m| m.java_type.as_str())),
            uses_type: members
                .iter()
                .flat_map(|m| &m.annotations)
                .any(|a| a.starts_with("@Type")),
            members,
        }
    }

    pub fn metamodel_view(&self, table: &Table, schema: &InspectResult) -> MetamodelView {
        let builder = self.members(schema);
        let attributes: Vec<_> = self.columns(table).map(|c| builder.attribute(c)).collect();

        let mut attribute_kinds: Vec<String> =
            attributes.iter().map(|a| a.kind.to_string()).collect();
        attribute_kinds.sort();
        attribute_kinds.dedup();

        MetamodelView {
            package_name: self.options.package_name.clone(),
            class_name: JAVA_NAMING.type_name(&table.name),
            imports: imports_for(attributes.iter().map(|a| a.type_args.as_str())),
            attribute_kinds,
            attributes,
        }
    }

    pub fn enum_view(&self, ty: &EnumType) -> EnumView {
        EnumView {
            package_name: self.options.package_name.clone(),
            class_name: JAVA_NAMING.type_name(&ty.name),
            sql_name: ty.name.clone(),
            comment: single_line(ty.comment.as_deref()),
            members: enum_members(ty, OrdinalStrategy::Positional { base: 0 }),
        }
    }

    pub fn user_type_view(&self, ty: &EnumType) -> UserTypeView {
        UserTypeView {
            package_name: self.options.package_name.clone(),
            class_name: JAVA_NAMING.type_name(&ty.name),
            sql_name: ty.name.clone(),
        }
    }
}

impl<R: Renderer> Generator for HibernateGenerator<R> {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Hibernate
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
