//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tabula_core::{Error, Result};
use tabula_schema::{Column, EnumType, InspectResult, Table};
use tempfile::TempDir;

use crate::{Renderer, View};

/// A schema exercising every decoration the targets know about.
///
/// - `user`: serial key, parameterized text, timestamptz, enum and enum array
/// - `account`: foreign key, decimal, text array, jsonb, check constraint
/// - `audit_log`: no primary key
/// - `flyway_schema_history`: the table usually ignored
/// - types `status` (mixed integer and text literals) and `role`
pub fn fixture_schema() -> InspectResult {
    let user = Table::new("user")
        .comment("Application users")
        .column(Column::new("id", "serial").primary_key().serial())
        .column(
            Column::new("email", "character varying(255)")
                .not_null()
                .unique()
                .comment("Login name"),
        )
        .column(Column::new("created_at", "timestamptz").not_null())
        .column(Column::new("status", "status"))
        .column(Column::new("roles", "role[]").array());

    let account = Table::new("account")
        .comment("Billing account\nOne per user")
        .column(Column::new("id", "bigserial").primary_key().serial())
        .column(Column::new("user_id", "bigint").not_null().references("user", "id"))
        .column(Column::new("balance", "numeric(12,2)").not_null())
        .column(Column::new("tags", "text[]").array())
        .column(Column::new("settings", "jsonb"))
        .column(Column::new("age", "integer").check("CHECK ((age >= 0))"));

    let audit_log = Table::new("audit_log")
        .column(Column::new("message", "text"))
        .column(Column::new("location", "geometry(Point,4326)"));

    let flyway = Table::new("flyway_schema_history")
        .column(Column::new("version", "character varying(50)").primary_key())
        .column(Column::new("description", "text"));

    let types = [
        EnumType::new("status", ["1", "2", "active"]),
        EnumType::new("role", ["admin", "member"]).comment("Access role"),
    ];

    // Fixture names are unique by construction.
    InspectResult::new([user, account, audit_log, flyway], types).expect("valid fixture")
}

/// The minimal `user(id serial pk, created_at timestamptz)` schema.
pub fn user_schema() -> InspectResult {
    let user = Table::new("user")
        .column(Column::new("id", "serial").primary_key().serial())
        .column(Column::new("created_at", "timestamptz").not_null());
    InspectResult::new([user], []).expect("valid fixture")
}

/// A `reading` table whose check constraint spans several lines, as
/// `pg_get_constraintdef` prints long expressions.
pub fn multiline_check_schema() -> InspectResult {
    let reading = Table::new("reading")
        .column(Column::new("id", "bigserial").primary_key().serial())
        .column(
            Column::new("value", "integer")
                .not_null()
                .check("CHECK (\n  (value >= 0)\n  AND (value < 100)\n)"),
        );
    InspectResult::new([reading], []).expect("valid fixture")
}

/// Renders with the built-in layouts except for one template, which fails.
#[derive(Debug, Clone, Copy)]
pub struct FailingRenderer {
    pub fail_on: &'static str,
}

impl Renderer for FailingRenderer {
    fn render<V: View>(&self, view: &V) -> Result<String> {
        if V::TEMPLATE == self.fail_on {
            Err(Error::render(V::TEMPLATE, "forced failure"))
        } else {
            Ok(view.render_builtin())
        }
    }
}

/// A temporary configuration root with an empty `out` directory.
#[derive(Debug)]
pub struct TestOutput {
    root: TempDir,
}

impl TestOutput {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        fs::create_dir(root.path().join("out")).expect("create output dir");
        Self { root }
    }

    /// The directory relative paths are resolved against.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn out(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Write a template file under `<root>/templates`.
    pub fn template(&self, name: &str, source: &str) {
        let dir = self.root.path().join("templates");
        fs::create_dir_all(&dir).expect("create template dir");
        fs::write(dir.join(format!("{}.tmpl", name)), source).expect("write template");
    }

    /// Read a generated file.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.out().join(name))
            .unwrap_or_else(|e| panic!("read {}: {}", name, e))
    }

    /// Names of the generated files, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.out())
            .expect("read output dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestOutput {
    fn default() -> Self {
        Self::new()
    }
}
