//! Idempotent materialisation of the documentation tree.
//!
//! Directories are created when missing, category descriptors are always
//! rewritten, and content documents and placeholders are only written when
//! absent so hand-edited prose is never overwritten.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::PLACEHOLDER_CONTENT;
use crate::error::{Error, Result};
use crate::generators::{category_descriptor, ContentGenerator};
use crate::layout::{EntryKind, Plan};
use crate::preview::DisplayOptions;
use crate::tree::DocTree;

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::filesystem(path, e))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::filesystem(path, e))
}

/// What happened to one planned entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    /// An existing category descriptor was rewritten.
    Updated,
    /// An existing document or placeholder was left untouched.
    Skipped,
    /// The directory was already there.
    Existing,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::Created => "Created",
            Action::Updated => "Updated",
            Action::Skipped => "Skipped (exists)",
            Action::Existing => "Exists",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRecord {
    pub action: Action,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Everything one build did, in the order it did it.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub section_path: PathBuf,
    pub records: Vec<BuildRecord>,
}

impl BuildReport {
    pub fn count(&self, action: Action) -> usize {
        self.records.iter().filter(|r| r.action == action).count()
    }

    pub fn action_for<P: AsRef<Path>>(&self, path: P) -> Option<Action> {
        let path = path.as_ref();
        self.records
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.action)
    }

    /// Prints one line per written or skipped file, then a closing summary.
    pub fn print(&self, display: &DisplayOptions, out: &mut dyn Write) -> Result<()> {
        for record in self.records.iter().filter(|r| !r.is_dir) {
            let line = format!("{}: {}", record.action, record.path.display());
            let line = match record.action {
                Action::Created => display.success(&line),
                Action::Skipped => display.warning(&line),
                Action::Updated | Action::Existing => line,
            };
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            display.success(&format!(
                "✅ Documentation structure created successfully in {}",
                self.section_path.display()
            ))
        )?;
        writeln!(
            out,
            "   {} created, {} updated, {} kept",
            self.count(Action::Created),
            self.count(Action::Updated),
            self.count(Action::Skipped)
        )?;
        Ok(())
    }
}

/// Writes a [`Plan`] to disk.
#[derive(Debug, Clone, Default)]
pub struct StructureBuilder {
    generator: ContentGenerator,
}

impl StructureBuilder {
    pub fn new(generator: ContentGenerator) -> Self {
        Self { generator }
    }

    /// Plans `tree` under `base_path` and builds it.
    pub fn build_structure<P: AsRef<Path>>(
        &self,
        tree: &DocTree,
        base_path: P,
    ) -> Result<BuildReport> {
        let plan = Plan::new(tree, base_path.as_ref());
        self.build(&plan)
    }

    /// Executes every entry of `plan` in order.
    ///
    /// # Errors
    /// * `Error::Filesystem` on the first I/O failure; entries already
    ///   written stay on disk
    pub fn build(&self, plan: &Plan) -> Result<BuildReport> {
        let mut report = BuildReport {
            section_path: plan.section_path.clone(),
            records: Vec::with_capacity(plan.len()),
        };

        for entry in plan.iter() {
            let path = entry.path.as_path();
            let action = match entry.kind {
                EntryKind::RootDir | EntryKind::ContainerDir | EntryKind::AssetsDir => {
                    let existed = path.is_dir();
                    create_dir_all(path)?;
                    if existed {
                        Action::Existing
                    } else {
                        Action::Created
                    }
                }
                EntryKind::Category {
                    kind,
                    container,
                    rank,
                } => {
                    let existed = path.exists();
                    write_file(path, &category_descriptor(kind, container, rank)?)?;
                    if existed {
                        Action::Updated
                    } else {
                        Action::Created
                    }
                }
                EntryKind::Document { node, rank } => {
                    write_if_absent(path, || self.generator.document(node, rank))?
                }
                EntryKind::Placeholder => {
                    write_if_absent(path, || PLACEHOLDER_CONTENT.to_string())?
                }
            };
            debug!("{}: {}", action, path.display());
            report.records.push(BuildRecord {
                action,
                path: entry.path.clone(),
                is_dir: entry.is_dir(),
            });
        }

        Ok(report)
    }
}

fn write_if_absent(path: &Path, content: impl FnOnce() -> String) -> Result<Action> {
    if path.exists() {
        return Ok(Action::Skipped);
    }
    write_file(path, &content())?;
    Ok(Action::Created)
}
