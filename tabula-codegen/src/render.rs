//! View models and the renderers that turn them into text.
//!
//! Every artifact kind has a typed view struct implementing [`View`]. A view
//! knows its template name and how to render itself with the built-in
//! [`CodeBuilder`](crate::CodeBuilder) output. A [`TemplateRenderer`] instead
//! feeds the serialized view to a user-supplied template of the same name.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use tabula_core::{Error, Result, to_lower_camel, to_upper_camel, to_upper_snake};

/// A typed renderer input for one artifact kind.
pub trait View: Serialize {
    /// Template name, also the file stem looked up in a template directory.
    const TEMPLATE: &'static str;

    /// Render with the built-in layout.
    fn render_builtin(&self) -> String;
}

/// Turns a view model into file content.
pub trait Renderer {
    fn render<V: View>(&self, view: &V) -> Result<String>;

    /// Directory templates are loaded from, if any.
    fn template_dir(&self) -> Option<&Path> {
        None
    }
}

/// The renderer a generator is configured with.
#[derive(Debug, Default)]
pub enum Templates {
    /// Built-in layouts.
    #[default]
    Builtin,
    /// Templates loaded from a directory.
    Directory(TemplateRenderer),
}

impl Templates {
    /// Built-in layouts unless a template directory is configured.
    pub fn load(target: &str, dir: Option<&Path>, required: &[&str]) -> Result<Self> {
        match dir {
            Some(dir) => TemplateRenderer::load(target, dir, required).map(Templates::Directory),
            None => Ok(Templates::Builtin),
        }
    }
}

impl Renderer for Templates {
    fn render<V: View>(&self, view: &V) -> Result<String> {
        match self {
            Templates::Builtin => Ok(view.render_builtin()),
            Templates::Directory(renderer) => renderer.render(view),
        }
    }

    fn template_dir(&self) -> Option<&Path> {
        match self {
            Templates::Builtin => None,
            Templates::Directory(renderer) => Some(renderer.dir()),
        }
    }
}

/// Renders views with `*.tmpl` files from a directory.
///
/// All templates are loaded and compiled once, when the generator is
/// configured, so a broken template fails before any file is written.
pub struct TemplateRenderer {
    dir: PathBuf,
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Load every `*.tmpl` file in `dir`. The file stem is the template name.
    ///
    /// Fails if the directory cannot be read, a template does not compile, or
    /// any of the `required` templates is missing.
    pub fn load(target: &str, dir: &Path, required: &[&str]) -> Result<Self> {
        let unreadable = |e: std::io::Error| {
            Error::configuration(
                target,
                format!("cannot read template directory '{}': {}", dir.display(), e),
            )
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "tmpl") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("upper_camel", |value: String| to_upper_camel(&value));
        env.add_filter("lower_camel", |value: String| to_lower_camel(&value));
        env.add_filter("upper_snake", |value: String| to_upper_snake(&value));

        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let name = name.to_string();
            let source = std::fs::read_to_string(&path).map_err(|e| {
                Error::configuration(
                    target,
                    format!("cannot read template '{}': {}", path.display(), e),
                )
            })?;
            env.add_template_owned(name.clone(), source).map_err(|e| {
                Error::configuration(target, format!("invalid template '{}': {}", name, e))
            })?;
        }

        if let Some(missing) = required.iter().find(|name| env.get_template(name).is_err()) {
            return Err(Error::configuration(
                target,
                format!(
                    "template directory '{}' has no '{}.tmpl'",
                    dir.display(),
                    missing
                ),
            ));
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            env,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of the loaded templates, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.env.templates().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }
}

impl Renderer for TemplateRenderer {
    fn render<V: View>(&self, view: &V) -> Result<String> {
        let template = self
            .env
            .get_template(V::TEMPLATE)
            .map_err(|e| Error::render(V::TEMPLATE, e.to_string()))?;
        template
            .render(view)
            .map_err(|e| Error::render(V::TEMPLATE, e.to_string()))
    }

    fn template_dir(&self) -> Option<&Path> {
        Some(&self.dir)
    }
}

impl fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("dir", &self.dir)
            .field("templates", &self.names())
            .finish()
    }
}
