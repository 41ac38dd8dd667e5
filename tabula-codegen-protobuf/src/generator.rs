use std::{collections::HashSet, path::Path};

use serde::Deserialize;
use tabula_codegen::{
    ColumnTraits, DiskEmitter, Emitter, GenerateResult, Generator, GeneratorKind,
    OrdinalStrategy, OutputOptions, OutputTarget, PreviewEmitter, PreviewFile, Renderer,
    Templates, TypeMapper, TypeSource, View, WritePolicy, enum_members, parse_options,
    single_line, warn_missing_primary_key,
};
use tabula_core::{EntityKind, Error, Result, ResultExt};
use tabula_schema::{EnumType, InspectResult, Table};

use crate::{
    PROTOBUF_NAMING, ProtobufTypeMapper,
    files::{EnumFileView, MessageView, ProtoEnum, ProtoEnumValue, ProtoField},
};

/// Name of the aggregate enum file.
pub const ENUM_FILE: &str = "enum.proto";

const TEMPLATES: &[&str] = &[MessageView::TEMPLATE, EnumFileView::TEMPLATE];

/// Configuration of the protobuf target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProtobufOptions {
    #[serde(flatten)]
    pub output: OutputOptions,
    /// Proto package; also qualifies enum type references.
    #[serde(default)]
    pub package_name: String,
    /// Value of the `java_package` file option, if any.
    #[serde(default)]
    pub java_package: Option<String>,
}

/// Generates proto3 messages and enums.
#[derive(Debug)]
pub struct ProtobufGenerator<R = Templates> {
    target: OutputTarget<R>,
    options: ProtobufOptions,
}

impl ProtobufGenerator {
    /// Configure from a raw configuration entry. Relative paths resolve
    /// against `root`.
    pub fn new(root: &Path, raw: &serde_json::Value) -> Result<Self> {
        let options = parse_options(GeneratorKind::Protobuf, raw)?;
        Self::from_options(root, options)
    }

    pub fn from_options(root: &Path, options: ProtobufOptions) -> Result<Self> {
        let target = OutputTarget::open(GeneratorKind::Protobuf, root, &options.output, TEMPLATES)?;
        Ok(Self { target, options })
    }
}

impl<R: Renderer> ProtobufGenerator<R> {
    /// Render with a different renderer.
    pub fn with_renderer<S: Renderer>(self, renderer: S) -> ProtobufGenerator<S> {
        ProtobufGenerator {
            target: self.target.with_renderer(renderer),
            options: self.options,
        }
    }

    pub fn options(&self) -> &ProtobufOptions {
        &self.options
    }

    /// Emit every message, then `enum.proto`, stopping at the first failure.
    ///
    /// `enum.proto` is written even when the schema has no enum types.
    pub fn generate_into<E: Emitter>(&self, schema: &InspectResult, emitter: &mut E) -> Result<()> {
        let renderer = self.target.renderer();

        for table in self.target.tables(schema) {
            let view = self.message_view(table, schema);
            emitter
                .emit(&PROTOBUF_NAMING.file_name(&table.name, ".proto"), || {
                    renderer.render(&view)
                })
                .in_table(&table.name)?;
        }

        let view = self.enum_file_view(schema)?;
        emitter.emit(ENUM_FILE, || renderer.render(&view))
    }

    fn mapper(&self) -> ProtobufTypeMapper<'_> {
        ProtobufTypeMapper::new(&self.options.package_name)
    }

    pub fn message_view(&self, table: &Table, schema: &InspectResult) -> MessageView {
        warn_missing_primary_key(GeneratorKind::Protobuf.as_str(), table);

        let mapper = self.mapper();
        let policy = WritePolicy::default();
        let mut uses_enum = false;

        let fields = table
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let traits = ColumnTraits::analyze(column, schema, &policy);
                uses_enum |= mapper.resolve(column, schema).source == TypeSource::Enum;

                ProtoField {
                    column: column.name.clone(),
                    name: PROTOBUF_NAMING.field_name(&column.name),
                    proto_type: mapper.map_type(column, schema),
                    number: i + 1,
                    comment: single_line(column.comment.as_deref()),
                    check: traits.check,
                }
            })
            .collect();

        MessageView {
            package_name: self.options.package_name.clone(),
            java_package: self.options.java_package.clone(),
            message_name: PROTOBUF_NAMING.type_name(&table.name),
            comment: single_line(table.comment.as_deref()),
            imports: if uses_enum {
                vec![ENUM_FILE.to_string()]
            } else {
                Vec::new()
            },
            fields,
        }
    }

    /// Fails when an enum value does not fit a proto3 enum number.
    pub fn enum_file_view(&self, schema: &InspectResult) -> Result<EnumFileView> {
        Ok(EnumFileView {
            package_name: self.options.package_name.clone(),
            java_package: self.options.java_package.clone(),
            enums: schema.types().map(proto_enum).collect::<Result<_>>()?,
        })
    }
}

/// Build one proto enum, keeping declaration order.
///
/// proto3 needs a zero value, so `<PREFIX>_UNSPECIFIED = 0` is prepended
/// when no member takes 0. Numbers repeat only when two integer literals
/// parse to the same value, which turns on `allow_alias`.
fn proto_enum(ty: &EnumType) -> Result<ProtoEnum> {
    let prefix = PROTOBUF_NAMING.constant_name(&ty.name);

    let mut values = Vec::with_capacity(ty.values.len() + 1);
    for member in enum_members(ty, OrdinalStrategy::NextFree { base: 0 }) {
        if i32::try_from(member.ordinal).is_err() {
            let message = format!("value '{}' is outside the int32 range", member.literal);
            let err = Error::render(EnumFileView::TEMPLATE, message);
            return Err(err.within(EntityKind::Type, &ty.name));
        }
        values.push(ProtoEnumValue {
            name: format!("{}_{}", prefix, member.name),
            literal: member.literal,
            number: member.ordinal,
        });
    }

    if !values.iter().any(|v| v.number == 0) {
        values.insert(
            0,
            ProtoEnumValue {
                name: format!("{}_UNSPECIFIED", prefix),
                literal: String::new(),
                number: 0,
            },
        );
    }

    let mut seen = HashSet::new();
    let allow_alias = !values.iter().all(|v| seen.insert(v.number));

    Ok(ProtoEnum {
        name: PROTOBUF_NAMING.type_name(&ty.name),
        sql_name: ty.name.clone(),
        comment: single_line(ty.comment.as_deref()),
        values,
        allow_alias,
    })
}

impl<R: Renderer> Generator for ProtobufGenerator<R> {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Protobuf
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
