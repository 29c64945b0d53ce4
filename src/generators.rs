//! Text generation for the documentation tree.
//!
//! Everything here is pure: a node and its rank go in, text comes out.

use serde::Serialize;

use crate::constants::SECTION_CLASS_NAME;
use crate::error::Result;
use crate::naming::slug;
use crate::tree::{Container, ContainerKind, Node};

/// Position reported for `node`: the declared one, else its rank.
pub fn effective_position(node_position: Option<u32>, rank: usize) -> usize {
    node_position.map_or(rank, |p| p as usize)
}

/// Builds the front matter block of a content document.
///
/// Field order is fixed: `id`, `title`, `description`, `sidebar_position`.
pub fn front_matter(node: &Node, rank: usize) -> String {
    let title = node.title();
    let id = node.id().map_or_else(|| slug(title), str::to_string);
    let description = node.description().unwrap_or(title);
    let position = effective_position(node.position(), rank);
    [
        "---".to_string(),
        format!("id: {id}"),
        format!("title: {title}"),
        format!("description: {description}"),
        format!("sidebar_position: {position}"),
        "---".to_string(),
    ]
    .join("\n")
}

/// `_category_.json` payload. Keys serialise in declaration order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryDescriptor<'a> {
    label: &'a str,
    position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<&'a str>,
    collapsible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
}

/// Renders the category descriptor of a section or subsection.
///
/// Sections are never collapsible and carry the sidebar header class.
/// Subsections are collapsible and collapsed unless the node says otherwise.
pub fn category_descriptor(
    kind: ContainerKind,
    container: &Container,
    rank: usize,
) -> Result<String> {
    let position = effective_position(container.position, rank);
    let descriptor = match kind {
        ContainerKind::Section => CategoryDescriptor {
            label: &container.label,
            position,
            class_name: Some(SECTION_CLASS_NAME),
            collapsible: false,
            collapsed: None,
        },
        ContainerKind::Subsection => CategoryDescriptor {
            label: &container.label,
            position,
            class_name: None,
            collapsible: container.collapsible.unwrap_or(true),
            collapsed: Some(container.collapsed.unwrap_or(true)),
        },
    };
    Ok(serde_json::to_string_pretty(&descriptor)?)
}

/// Assembles full content documents around a fixed imports block.
#[derive(Debug, Clone, Default)]
pub struct ContentGenerator {
    imports: String,
}

impl ContentGenerator {
    /// `custom_imports`, when present, follows the global template on a new line.
    pub fn new(imports_template: &str, custom_imports: &str) -> Self {
        let mut imports = imports_template.to_string();
        if !custom_imports.is_empty() {
            imports.push('\n');
            imports.push_str(custom_imports);
        }
        Self { imports }
    }

    pub fn imports(&self) -> &str {
        &self.imports
    }

    /// Front matter, a blank line, the imports, a blank line and the H1 title.
    /// Files may append their `initial_content` after another blank line.
    pub fn document(&self, node: &Node, rank: usize) -> String {
        let mut lines = vec![
            front_matter(node, rank),
            String::new(),
            self.imports.clone(),
            String::new(),
            format!("# {}", node.title()),
        ];
        if let Node::File(file) = node {
            if let Some(initial) = &file.initial_content {
                lines.push(String::new());
                lines.push(initial.clone());
            }
        }
        lines.join("\n")
    }
}
