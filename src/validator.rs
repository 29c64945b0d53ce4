//! Structural validation of the configuration document.
//!
//! Validation never stops at the first problem. Every violation is collected
//! into a [`ValidationReport`] so the operator can fix them in one pass. When
//! the document is clean, the same walk yields the ordered [`DocTree`].

use std::collections::BTreeSet;

use log::debug;

use crate::config::{Config, RawContainer, RawFile};
use crate::error::{Error, Result, ValidationReport};
use crate::tree::{order_children, order_nodes, Container, ContainerKind, DocTree, FileNode, Node};

/// One sibling taking part in a position consistency check.
struct Positioned<'a> {
    kind: &'static str,
    title: &'a str,
    position: Option<i64>,
}

/// Accumulating validator for [`Config`] documents.
#[derive(Debug, Default)]
pub struct ConfigValidator {
    report: ValidationReport,
}

impl ConfigValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `config` and builds the ordered outline.
    ///
    /// # Errors
    /// * `Error::Validation` carrying every diagnostic found
    pub fn validate(&mut self, config: &Config) -> Result<DocTree> {
        self.report = ValidationReport::new();

        let section_name = non_empty(&config.section_name);
        if section_name.is_none() {
            self.report
                .push("Configuration must include 'section_name'");
        }
        if config.sections.is_empty() {
            self.report
                .push("Configuration must include at least one section");
        }

        let top_level: Vec<Positioned> = config
            .sections
            .iter()
            .map(|s| Positioned {
                kind: "Section",
                title: non_empty(&s.title).unwrap_or("Unknown"),
                position: s.position,
            })
            .collect();
        self.check_positions("Sections", &top_level, ("section", "sections"));

        let sections = config
            .sections
            .iter()
            .enumerate()
            .map(|(i, raw)| self.container(raw, i + 1, "Section", ContainerKind::Section))
            .collect();

        if !self.report.is_empty() {
            return Err(Error::Validation(std::mem::take(&mut self.report)));
        }
        debug!("Configuration is valid");
        Ok(DocTree {
            section_name: section_name.unwrap_or_default().to_string(),
            sections: order_nodes(sections),
        })
    }

    fn container(
        &mut self,
        raw: &RawContainer,
        index: usize,
        context: &str,
        kind: ContainerKind,
    ) -> Node {
        let ctx = format!("{context} {index}");
        let title = non_empty(&raw.title);
        if title.is_none() {
            self.report
                .push(format!("{ctx} missing required 'title' field"));
        }
        let label = non_empty(&raw.label);
        if label.is_none() {
            self.report
                .push(format!("{ctx} missing required 'label' field"));
        }
        let named = format!("{ctx} '{}'", title.unwrap_or("Unknown"));

        let siblings: Vec<Positioned> = raw
            .files
            .iter()
            .map(|f| Positioned {
                kind: "File",
                title: non_empty(&f.title).unwrap_or("Unknown"),
                position: f.position,
            })
            .chain(raw.subsections.iter().map(|s| Positioned {
                kind: "Subsection",
                title: non_empty(&s.title).unwrap_or("Unknown"),
                position: s.position,
            }))
            .collect();
        self.check_positions(
            &named,
            &siblings,
            ("file or subsection", "files and subsections"),
        );

        let files = raw
            .files
            .iter()
            .enumerate()
            .map(|(i, f)| self.file(f, i + 1, &named))
            .collect();
        let nested = format!("{ctx} -> Subsection");
        let subsections = raw
            .subsections
            .iter()
            .enumerate()
            .map(|(i, s)| self.container(s, i + 1, &nested, ContainerKind::Subsection))
            .collect();

        let container = Container {
            title: title.unwrap_or_default().to_string(),
            label: label.unwrap_or_default().to_string(),
            position: to_rank(raw.position),
            create_assets: raw.create_assets,
            collapsible: raw.collapsible,
            collapsed: raw.collapsed,
            description: raw.description.clone(),
            id: raw.id.clone(),
            children: order_children(files, subsections),
        };
        match kind {
            ContainerKind::Section => Node::Section(container),
            ContainerKind::Subsection => Node::Subsection(container),
        }
    }

    fn file(&mut self, raw: &RawFile, index: usize, parent: &str) -> Node {
        let title = non_empty(&raw.title);
        if title.is_none() {
            self.report.push(format!(
                "{parent}: File {index} missing required 'title' field"
            ));
        }
        Node::File(FileNode {
            title: title.unwrap_or_default().to_string(),
            position: to_rank(raw.position),
            id: raw.id.clone(),
            description: raw.description.clone(),
            create_assets: raw.create_assets,
            initial_content: raw.initial_content.clone(),
        })
    }

    /// Either no sibling declares a position, or all of them do and the
    /// declared values are exactly `1..=N`.
    ///
    /// Independent problems (non-positive values, duplicates, out-of-range
    /// sets) are all reported; there is no precedence between them.
    fn check_positions(&mut self, context: &str, items: &[Positioned], members: (&str, &str)) {
        let declared = items.iter().filter(|i| i.position.is_some()).count();
        if declared == 0 {
            return;
        }
        if declared < items.len() {
            let (any, all) = members;
            self.report.push(format!(
                "{context}: mixed position declaration; if any {any} has 'position', \
                 ALL {all} must have 'position'"
            ));
            return;
        }

        let positions: Vec<i64> = items.iter().filter_map(|i| i.position).collect();
        for item in items {
            if item.position.is_some_and(|p| p < 1) {
                self.report.push(format!(
                    "{context}: {} '{}' position must be a positive integer",
                    item.kind, item.title
                ));
            }
        }

        let actual: BTreeSet<i64> = positions.iter().copied().collect();
        if actual.len() != positions.len() {
            self.report
                .push(format!("{context}: Duplicate position values found"));
        }

        let total = items.len() as i64;
        let expected: BTreeSet<i64> = (1..=total).collect();
        if actual != expected {
            let missing: Vec<i64> = expected.difference(&actual).copied().collect();
            let extra: Vec<i64> = actual.difference(&expected).copied().collect();
            let mut message = format!("{context}: Position values must be 1-{total}");
            if !missing.is_empty() {
                message.push_str(&format!(", missing: {missing:?}"));
            }
            if !extra.is_empty() {
                message.push_str(&format!(", invalid: {extra:?}"));
            }
            self.report.push(message);
        }
    }
}

/// Validates `config` with a fresh [`ConfigValidator`].
pub fn validate(config: &Config) -> Result<DocTree> {
    ConfigValidator::new().validate(config)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn to_rank(position: Option<i64>) -> Option<u32> {
    position.and_then(|p| u32::try_from(p).ok())
}
