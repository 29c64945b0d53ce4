//! The validated documentation outline.
//!
//! A [`DocTree`] is produced by the validator and is already ordered: the
//! children of every container appear exactly in the order they are
//! materialised, so their 1-based index is their rank.

/// Which kind of container a directory represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Section,
    Subsection,
}

/// A content document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileNode {
    pub title: String,
    pub position: Option<u32>,
    pub id: Option<String>,
    pub description: Option<String>,
    pub create_assets: bool,
    pub initial_content: Option<String>,
}

/// A section or subsection directory with its ordered children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub title: String,
    pub label: String,
    pub position: Option<u32>,
    pub create_assets: bool,
    pub collapsible: Option<bool>,
    pub collapsed: Option<bool>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub children: Vec<Node>,
}

/// One node of the outline.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File(FileNode),
    Section(Container),
    Subsection(Container),
}

impl Node {
    pub fn title(&self) -> &str {
        match self {
            Node::File(f) => &f.title,
            Node::Section(c) | Node::Subsection(c) => &c.title,
        }
    }

    /// The explicitly declared position, if any.
    pub fn position(&self) -> Option<u32> {
        match self {
            Node::File(f) => f.position,
            Node::Section(c) | Node::Subsection(c) => c.position,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Node::File(f) => f.id.as_deref(),
            Node::Section(c) | Node::Subsection(c) => c.id.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Node::File(f) => f.description.as_deref(),
            Node::Section(c) | Node::Subsection(c) => c.description.as_deref(),
        }
    }

    pub fn create_assets(&self) -> bool {
        match self {
            Node::File(f) => f.create_assets,
            Node::Section(c) | Node::Subsection(c) => c.create_assets,
        }
    }

    /// Returns the container and its kind, or `None` for files.
    pub fn as_container(&self) -> Option<(ContainerKind, &Container)> {
        match self {
            Node::File(_) => None,
            Node::Section(c) => Some((ContainerKind::Section, c)),
            Node::Subsection(c) => Some((ContainerKind::Subsection, c)),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }
}

/// The whole outline rooted at `section_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocTree {
    pub section_name: String,
    /// Top-level sections, ordered. Every element is a [`Node::Section`].
    pub sections: Vec<Node>,
}

/// Merges the children of one container into build order.
///
/// Without declared positions files come first, then subsections, each group
/// in document order. With declared positions the merged sequence is sorted
/// by position; the sort is stable so ties keep that same default order.
pub fn order_children(files: Vec<Node>, subsections: Vec<Node>) -> Vec<Node> {
    let mut items = files;
    items.extend(subsections);
    order_nodes(items)
}

/// Sorts nodes by declared position when any of them declares one.
pub fn order_nodes(mut items: Vec<Node>) -> Vec<Node> {
    if items.iter().any(|n| n.position().is_some()) {
        items.sort_by_key(|n| n.position());
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(title: &str, position: Option<u32>) -> Node {
        Node::File(FileNode {
            title: title.into(),
            position,
            ..Default::default()
        })
    }

    fn sub(title: &str, position: Option<u32>) -> Node {
        Node::Subsection(Container {
            title: title.into(),
            label: title.into(),
            position,
            ..Default::default()
        })
    }

    fn titles(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::title).collect()
    }

    #[test]
    fn files_come_before_subsections_without_positions() {
        let ordered = order_children(
            vec![file("a", None), file("b", None)],
            vec![sub("x", None), sub("y", None)],
        );
        assert_eq!(titles(&ordered), ["a", "b", "x", "y"]);
    }

    #[test]
    fn declared_positions_interleave_files_and_subsections() {
        let ordered = order_children(
            vec![file("a", Some(3)), file("b", Some(1))],
            vec![sub("x", Some(2)), sub("y", Some(4))],
        );
        assert_eq!(titles(&ordered), ["b", "x", "a", "y"]);
    }

    #[test]
    fn order_nodes_leaves_undeclared_sequence_untouched() {
        let ordered = order_nodes(vec![sub("z", None), sub("a", None)]);
        assert_eq!(titles(&ordered), ["z", "a"]);
    }
}
