//! End-to-end tests for the docs generator.

use serde_json::json;
use tabula_codegen::testing::{
    FailingRenderer, TestOutput, fixture_schema, multiline_check_schema, user_schema,
};
use tabula_codegen_docs::{DocsGenerator, Generator, TYPES_FILE};
use tabula_core::{EntityKind, ErrorCategory};

fn generator(output: &TestOutput, extra: serde_json::Value) -> DocsGenerator {
    let mut raw = json!({"output": "out", "ignore_tables": ["flyway_schema_history"]});
    if let (Some(raw), Some(extra)) = (raw.as_object_mut(), extra.as_object()) {
        raw.extend(extra.clone());
    }
    DocsGenerator::new(output.root(), &raw).unwrap()
}

#[test]
fn test_user_page() {
    let output = TestOutput::new();
    generator(&output, json!({"not_insertable_columns": ["created_at"]}))
        .build(&fixture_schema())
        .unwrap();

    insta::assert_snapshot!(output.read("User.md"), @r"
    <!-- Code generated by tabula. DO NOT EDIT. -->
    # user

    Application users

    | Column | Field | Type | SQL type | Attributes | Description |
    | --- | --- | --- | --- | --- | --- |
    | `id` | `id` | serial | `serial` | primary key, serial, not null |  |
    | `email` | `email` | text | `character varying(255)` | unique, not null | Login name |
    | `created_at` | `createdAt` | timestamp with time zone | `timestamptz` | not null, not insertable |  |
    | `status` | `status` | [Status](enums.md#status) | `status` | enum |  |
    | `roles` | `roles` | list of [Role](enums.md#role) | `role[]` | enum, array |  |
    ");
}

#[test]
fn test_account_page() {
    let output = TestOutput::new();
    generator(&output, json!({"title": "Acme"}))
        .build(&fixture_schema())
        .unwrap();

    let account = output.read("Account.md");
    assert!(account.contains("# account\n\n_Acme_\n\nBilling account One per user\n\n"));
    assert!(account.contains(
        "| `user_id` | `userId` | bigint | `bigint` | not null, references user(id) |  |\n"
    ));
    assert!(account.contains(
        "| `balance` | `balance` | decimal | `numeric(12,2)` | not null |  |\n"
    ));
    assert!(account.contains("| `settings` | `settings` | document | `jsonb` | json |  |\n"));
    assert!(account.contains(
        "| `age` | `age` | integer | `integer` | check: CHECK ((age >= 0)) |  |\n"
    ));

    let audit = output.read("AuditLog.md");
    assert!(audit.contains(
        "| `location` | `location` | geometry(Point,4326) | `geometry(Point,4326)` |  |  |\n"
    ));
}

#[test]
fn test_multiline_check_stays_in_its_row() {
    let output = TestOutput::new();
    generator(&output, json!({}))
        .build(&multiline_check_schema())
        .unwrap();

    let reading = output.read("Reading.md");
    assert!(reading.contains(
        "| `value` | `value` | integer | `integer` | not null, check: CHECK ( (value >= 0) AND (value < 100) ) |  |\n"
    ));
    assert!(reading.lines().all(|l| l.is_empty() || l.starts_with(['|', '#', '<'])));
}

#[test]
fn test_types_page() {
    let output = TestOutput::new();
    generator(&output, json!({})).build(&fixture_schema()).unwrap();

    let types = output.read(TYPES_FILE);
    assert!(types.contains(
        "## Status\n\nDatabase type `status`.\n\n| Member | Literal | Ordinal |\n| --- | --- | --- |\n| VALUE_1 | `1` | 1 |\n| VALUE_2 | `2` | 2 |\n| ACTIVE | `active` | 2 |\n\n## Role\n"
    ));
    assert!(types.contains("## Role\n\nAccess role\n\n"));
}

#[test]
fn test_files_in_schema_order() {
    let output = TestOutput::new();
    let result = generator(&output, json!({})).build(&fixture_schema()).unwrap();

    assert_eq!(
        result.files,
        ["User.md", "Account.md", "AuditLog.md", TYPES_FILE]
    );
    assert!(!output.files().contains(&"FlywaySchemaHistory.md".to_string()));
}

#[test]
fn test_build_is_idempotent() {
    let output = TestOutput::new();
    let generator = generator(&output, json!({}));
    let schema = fixture_schema();

    generator.build(&schema).unwrap();
    let first: Vec<_> = output.files().iter().map(|f| output.read(f)).collect();

    generator.build(&schema).unwrap();
    let second: Vec<_> = output.files().iter().map(|f| output.read(f)).collect();

    assert_eq!(first, second);
}

#[test]
fn test_preview_matches_build() {
    let output = TestOutput::new();
    let generator = generator(&output, json!({}));
    let schema = user_schema();

    let preview = generator.preview(&schema).unwrap();
    assert!(output.files().is_empty());

    generator.build(&schema).unwrap();
    for file in preview {
        let name = file.path.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(output.read(&name), file.content, "{}", name);
    }
}

#[test]
fn test_first_failure_aborts() {
    let output = TestOutput::new();
    let generator =
        generator(&output, json!({})).with_renderer(FailingRenderer { fail_on: "table" });

    let err = generator.build(&fixture_schema()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Render);
    assert_eq!(err.entity(), Some((EntityKind::Table, "user")));
    assert_eq!(output.files(), ["User.md"]);
}

#[test]
fn test_template_directory() {
    let output = TestOutput::new();
    output.template(
        "table",
        "{{ table_name | upper_camel }}:{% for c in columns %} {{ c.name }}/{{ c.field }}({{ c.attributes | join(\",\") }}){% endfor %};\n",
    );
    output.template("types", "{{ types | length }} types\n");

    generator(&output, json!({"templates": "templates"}))
        .build(&user_schema())
        .unwrap();

    assert_eq!(
        output.read("User.md"),
        "User: id/id(primary key,serial,not null) created_at/createdAt(not null);\n"
    );
    assert_eq!(output.read(TYPES_FILE), "0 types\n");
}
