//! Template registry for embedded and on-disk page templates.
//!
//! The page templates ship inside the binary. A template directory can be
//! layered on top: any file in it shadows the embedded template with the
//! same name, so a site can restyle one component without copying the rest.
//!
//! # Template Resolution
//!
//! 1. **Override files** from the template directory win
//! 2. **Embedded templates** are used otherwise
//! 3. Names can be given with or without extension: both `"component/page"`
//!    and `"component/page.j2"` resolve
//!
//! # Supported Extensions
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.j2` |
//! | 2 | `.jinja` |
//! | 3 (lowest) | `.html` |
//!
//! If `card.j2` and `card.html` sit in the same directory, `"card"` resolves
//! to `card.j2`. Both stay reachable by their full names.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".j2", ".jinja", ".html"];

/// A template file found while walking an override directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Resolution name without extension (e.g. "component/page")
    pub name: String,
    /// Resolution name with extension (e.g. "component/page.j2")
    pub name_with_ext: String,
    pub absolute_path: PathBuf,
}

impl TemplateFile {
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
        }
    }

    /// Returns the extension priority (lower is higher priority).
    ///
    /// Returns `usize::MAX` if the extension is not recognized.
    pub fn extension_priority(&self) -> usize {
        TEMPLATE_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(ext))
            .unwrap_or(usize::MAX)
    }
}

/// How a template's content is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    /// Content compiled into the binary.
    Embedded(&'static str),
    /// Content read from disk when the template is first loaded.
    File(PathBuf),
}

/// Error type for template registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No template with this name exists.
    NotFound { name: String },

    /// A template file or directory could not be read.
    ReadError { path: PathBuf, message: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound { name } => {
                write!(f, "Template not found: \"{}\"", name)
            }
            RegistryError::ReadError { path, message } => {
                write!(
                    f,
                    "Failed to read template \"{}\": {}",
                    path.display(),
                    message
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry mapping template names to their content source.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    embedded: HashMap<String, ResolvedTemplate>,
    overrides: HashMap<String, ResolvedTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an embedded template under its full name and, when the name
    /// carries a recognized extension, its extensionless name.
    pub fn add_embedded(&mut self, name_with_ext: &str, content: &'static str) {
        let resolved = ResolvedTemplate::Embedded(content);
        if let Some(name) = strip_template_extension(name_with_ext) {
            self.embedded.insert(name.to_string(), resolved.clone());
        }
        self.embedded.insert(name_with_ext.to_string(), resolved);
    }

    /// Registers override files discovered by [`walk_template_dir`].
    ///
    /// Higher-priority extensions claim the extensionless name first.
    pub fn add_overrides(&mut self, files: Vec<TemplateFile>) {
        let mut sorted_files = files;
        sorted_files.sort_by_key(|f| f.extension_priority());

        for file in sorted_files {
            let resolved = ResolvedTemplate::File(file.absolute_path.clone());
            self.overrides
                .entry(file.name.clone())
                .or_insert_with(|| resolved.clone());
            self.overrides.insert(file.name_with_ext, resolved);
        }
    }

    /// Walks `dir` and registers every template in it as an override.
    pub fn add_override_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), RegistryError> {
        let dir = dir.as_ref();
        let files = walk_template_dir(dir).map_err(|e| RegistryError::ReadError {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        self.add_overrides(files);
        Ok(())
    }

    /// Looks up a template by name, overrides first.
    pub fn get(&self, name: &str) -> Result<&ResolvedTemplate, RegistryError> {
        self.overrides
            .get(name)
            .or_else(|| self.embedded.get(name))
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Gets the content of a template, reading from disk if necessary.
    pub fn get_content(&self, name: &str) -> Result<String, RegistryError> {
        match self.get(name)? {
            ResolvedTemplate::Embedded(content) => Ok((*content).to_string()),
            ResolvedTemplate::File(path) => {
                std::fs::read_to_string(path).map_err(|e| RegistryError::ReadError {
                    path: path.clone(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Returns true if `name` is served from an override file.
    pub fn is_overridden(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// Returns all registered names, with and without extension.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.overrides
            .keys()
            .chain(self.embedded.keys().filter(|k| !self.overrides.contains_key(*k)))
            .map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names().count()
    }

    pub fn is_empty(&self) -> bool {
        self.embedded.is_empty() && self.overrides.is_empty()
    }
}

fn strip_template_extension(name: &str) -> Option<&str> {
    TEMPLATE_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
}

/// Recursively collects template files under `root`.
pub fn walk_template_dir(root: impl AsRef<Path>) -> Result<Vec<TemplateFile>, std::io::Error> {
    let root_canonical = root.as_ref().canonicalize()?;
    let mut files = Vec::new();
    walk_dir_recursive(&root_canonical, &root_canonical, &mut files)?;
    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<TemplateFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();

        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if path.is_file() {
            if let Some(template_file) = try_parse_template_file(&path, root) {
                files.push(template_file);
            }
        }
    }

    Ok(())
}

fn try_parse_template_file(path: &Path, root: &Path) -> Option<TemplateFile> {
    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let name = strip_template_extension(&name_with_ext)?.to_string();

    Some(TemplateFile::new(name, name_with_ext, path))
}
