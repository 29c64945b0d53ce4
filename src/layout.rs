//! Flattens the ordered outline into the list of filesystem entries it maps to.
//!
//! The preview and the builder both consume the same [`Plan`], so what the
//! operator confirms is exactly what gets written, in the same order.

use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{ASSETS_DIR, CATEGORY_FILE, DOCUMENT_EXTENSION, PLACEHOLDER_FILE};
use crate::naming::numbered_name;
use crate::tree::{Container, ContainerKind, DocTree, Node};

/// What a planned entry is and what the builder does with it.
#[derive(Debug, Clone, Copy)]
pub enum EntryKind<'a> {
    /// The `section_name` directory under the base path.
    RootDir,
    /// A numbered section or subsection directory.
    ContainerDir,
    /// `_category_.json`, rewritten on every run.
    Category {
        kind: ContainerKind,
        container: &'a Container,
        rank: usize,
    },
    /// A numbered `.mdx` document, written only when absent.
    Document { node: &'a Node, rank: usize },
    /// An `assets/` directory of a container or of a single document.
    AssetsDir,
    /// `__placeholder__` inside an assets directory, written only when absent.
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct PlanEntry<'a> {
    pub kind: EntryKind<'a>,
    pub path: PathBuf,
    /// Name shown in the preview, relative to the parent entry.
    pub display_name: String,
    /// Nesting level below the root directory.
    pub depth: usize,
}

impl PlanEntry<'_> {
    pub fn is_dir(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::RootDir | EntryKind::ContainerDir | EntryKind::AssetsDir
        )
    }
}

/// Every directory and file one run touches, in build order.
#[derive(Debug, Clone)]
pub struct Plan<'a> {
    pub section_path: PathBuf,
    pub entries: Vec<PlanEntry<'a>>,
}

impl<'a> Plan<'a> {
    /// Walks `tree` rooted at `base_path/section_name`.
    pub fn new(tree: &'a DocTree, base_path: &Path) -> Self {
        let section_path = base_path.join(&tree.section_name);
        let mut plan = Plan {
            section_path: section_path.clone(),
            entries: Vec::new(),
        };
        plan.push(
            EntryKind::RootDir,
            section_path.clone(),
            format!("{}/", tree.section_name),
            0,
        );
        for (i, section) in tree.sections.iter().enumerate() {
            plan.push_node(section, i + 1, &section_path, 1);
        }
        debug!(
            "Planned {} entries under {}",
            plan.entries.len(),
            plan.section_path.display()
        );
        plan
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanEntry<'a>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, kind: EntryKind<'a>, path: PathBuf, display_name: String, depth: usize) {
        self.entries.push(PlanEntry {
            kind,
            path,
            display_name,
            depth,
        });
    }

    fn push_node(&mut self, node: &'a Node, rank: usize, parent: &Path, depth: usize) {
        match node.as_container() {
            Some((kind, container)) => self.push_container(kind, container, rank, parent, depth),
            None => self.push_document(node, rank, parent, depth),
        }
    }

    fn push_container(
        &mut self,
        kind: ContainerKind,
        container: &'a Container,
        rank: usize,
        parent: &Path,
        depth: usize,
    ) {
        let dir_name = numbered_name(rank, &container.title, "");
        let dir = parent.join(&dir_name);
        self.push(
            EntryKind::ContainerDir,
            dir.clone(),
            format!("{dir_name}/"),
            depth,
        );
        self.push(
            EntryKind::Category {
                kind,
                container,
                rank,
            },
            dir.join(CATEGORY_FILE),
            CATEGORY_FILE.to_string(),
            depth + 1,
        );
        for (i, child) in container.children.iter().enumerate() {
            self.push_node(child, i + 1, &dir, depth + 1);
        }
        if container.create_assets {
            self.push_assets(dir.join(ASSETS_DIR), format!("{ASSETS_DIR}/"), depth + 1);
        }
    }

    fn push_document(&mut self, node: &'a Node, rank: usize, parent: &Path, depth: usize) {
        let basename = numbered_name(rank, node.title(), "");
        let filename = format!("{basename}{DOCUMENT_EXTENSION}");
        self.push(
            EntryKind::Document { node, rank },
            parent.join(&filename),
            filename,
            depth,
        );
        if node.create_assets() {
            self.push_assets(
                parent.join(ASSETS_DIR).join(&basename),
                format!("{ASSETS_DIR}/{basename}/"),
                depth + 1,
            );
        }
    }

    fn push_assets(&mut self, dir: PathBuf, display_name: String, depth: usize) {
        let placeholder = dir.join(PLACEHOLDER_FILE);
        self.push(EntryKind::AssetsDir, dir, display_name, depth);
        self.push(
            EntryKind::Placeholder,
            placeholder,
            PLACEHOLDER_FILE.to_string(),
            depth + 1,
        );
    }
}
