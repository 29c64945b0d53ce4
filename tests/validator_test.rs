use doc_init::config::Config;
use doc_init::error::{Error, ValidationReport};
use doc_init::tree::{DocTree, Node};
use doc_init::validator::{validate, ConfigValidator};

fn parse(yaml: &str) -> Config {
    Config::from_yaml(yaml, "outline.yaml").unwrap()
}

fn report(yaml: &str) -> ValidationReport {
    match validate(&parse(yaml)) {
        Err(Error::Validation(report)) => report,
        other => panic!("Expected validation failure, got {other:?}"),
    }
}

fn tree(yaml: &str) -> DocTree {
    validate(&parse(yaml)).unwrap()
}

fn child_titles(node: &Node) -> Vec<&str> {
    let (_, container) = node.as_container().unwrap();
    container.children.iter().map(Node::title).collect()
}

#[test]
fn test_minimal_outline_is_valid() {
    let tree = tree(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    files:
      - title: Welcome
"#,
    );
    assert_eq!(tree.section_name, "guide");
    assert_eq!(tree.sections.len(), 1);
    assert!(matches!(tree.sections[0], Node::Section(_)));
    assert_eq!(child_titles(&tree.sections[0]), ["Welcome"]);
}

#[test]
fn test_empty_document_reports_root_problems() {
    let report = report("custom_imports_file: extra.mdx\n");
    assert_eq!(
        report.errors(),
        [
            "Configuration must include 'section_name'",
            "Configuration must include at least one section",
        ]
    );
}

#[test]
fn test_empty_section_name_is_rejected() {
    let report = report("section_name: ''\nsections:\n  - title: A\n    label: A\n");
    assert_eq!(
        report.errors(),
        ["Configuration must include 'section_name'"]
    );
}

#[test]
fn test_missing_title_and_label_are_both_reported() {
    let report = report(
        r#"
section_name: guide
sections:
  - label: Only label
  - title: Only title
    subsections:
      - title: Nested
        label: Nested
      - title: Nested without label
"#,
    );
    assert_eq!(
        report.errors(),
        [
            "Section 1 missing required 'title' field",
            "Section 2 missing required 'label' field",
            "Section 2 -> Subsection 2 missing required 'label' field",
        ]
    );
}

#[test]
fn test_file_without_title_names_its_container() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    files:
      - title: Welcome
      - description: no title here
"#,
    );
    assert_eq!(
        report.errors(),
        ["Section 1 'Intro': File 2 missing required 'title' field"]
    );
}

#[test]
fn test_mixed_position_declaration_names_section() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    files:
      - title: Welcome
        position: 1
      - title: Setup
"#,
    );
    assert_eq!(report.len(), 1);
    let first = &report.errors()[0];
    assert!(first.starts_with("Section 1 'Intro': mixed position declaration"));
}

#[test]
fn test_duplicates_and_range_are_reported_together() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    files:
      - title: A
        position: 1
      - title: B
        position: 1
    subsections:
      - title: C
        label: C
        position: 2
"#,
    );
    assert_eq!(
        report.errors(),
        [
            "Section 1 'Intro': Duplicate position values found",
            "Section 1 'Intro': Position values must be 1-3, missing: [3]",
        ]
    );
}

#[test]
fn test_out_of_range_positions_list_missing_and_invalid() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    files:
      - title: A
        position: 1
      - title: B
        position: 5
      - title: C
        position: 7
"#,
    );
    assert_eq!(
        report.errors(),
        ["Section 1 'Intro': Position values must be 1-3, missing: [2, 3], invalid: [5, 7]"]
    );
}

#[test]
fn test_non_positive_position_is_rejected() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    files:
      - title: A
        position: 0
      - title: B
        position: 1
"#,
    );
    assert_eq!(
        report.errors(),
        [
            "Section 1 'Intro': File 'A' position must be a positive integer",
            "Section 1 'Intro': Position values must be 1-2, missing: [2], invalid: [0]",
        ]
    );
}

#[test]
fn test_negative_positions_are_named_as_invalid() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    position: -1
  - title: Usage
    label: Usage
    position: 2
"#,
    );
    assert_eq!(
        report.errors(),
        [
            "Sections: Section 'Intro' position must be a positive integer",
            "Sections: Position values must be 1-2, missing: [1], invalid: [-1]",
        ]
    );
}

#[test]
fn test_whitespace_title_is_accepted() {
    let tree = tree("section_name: guide\nsections:\n  - title: ' '\n    label: A\n");
    assert_eq!(tree.sections[0].title(), " ");
}

#[test]
fn test_validation_recurses_into_deep_subsections() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    subsections:
      - title: Level One
        label: Level One
        subsections:
          - title: Level Two
            label: Level Two
            files:
              - title: A
                position: 2
              - title: B
"#,
    );
    assert_eq!(report.len(), 1);
    let first = &report.errors()[0];
    assert!(first.starts_with(
        "Section 1 -> Subsection 1 -> Subsection 1 'Level Two': mixed position declaration"
    ));
}

#[test]
fn test_all_violations_are_accumulated() {
    let report = report(
        r#"
sections:
  - title: First
    files:
      - title: A
        position: 1
      - title: B
  - title: Second
    label: Second
    subsections:
      - title: Deep
        label: Deep
        files:
          - title: X
            position: 2
"#,
    );
    assert!(report.mentions("Configuration must include 'section_name'"));
    assert!(report.mentions("Section 1 missing required 'label' field"));
    assert!(report.mentions("Section 1 'First': mixed position declaration"));
    assert!(report.mentions("Section 2 -> Subsection 1 'Deep': Position values must be 1-1"));
    assert_eq!(report.len(), 4);
}

#[test]
fn test_top_level_sections_follow_position_rules() {
    let report = report(
        r#"
section_name: guide
sections:
  - title: A
    label: A
    position: 2
  - title: B
    label: B
"#,
    );
    assert_eq!(report.len(), 1);
    let first = &report.errors()[0];
    assert!(first.starts_with("Sections: mixed position declaration"));
}

#[test]
fn test_sections_are_ordered_by_position() {
    let tree = tree(
        r#"
section_name: guide
sections:
  - title: Later
    label: Later
    position: 2
  - title: First
    label: First
    position: 1
"#,
    );
    let titles: Vec<&str> = tree.sections.iter().map(Node::title).collect();
    assert_eq!(titles, ["First", "Later"]);
}

#[test]
fn test_default_order_puts_files_before_subsections() {
    let tree = tree(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    subsections:
      - title: Sub A
        label: Sub A
      - title: Sub B
        label: Sub B
    files:
      - title: File A
      - title: File B
"#,
    );
    assert_eq!(
        child_titles(&tree.sections[0]),
        ["File A", "File B", "Sub A", "Sub B"]
    );
}

#[test]
fn test_declared_positions_interleave_children() {
    let tree = tree(
        r#"
section_name: guide
sections:
  - title: Intro
    label: Intro
    files:
      - title: File A
        position: 3
      - title: File B
        position: 1
    subsections:
      - title: Sub A
        label: Sub A
        position: 2
"#,
    );
    assert_eq!(
        child_titles(&tree.sections[0]),
        ["File B", "Sub A", "File A"]
    );
}

#[test]
fn test_validator_can_be_reused() {
    let mut validator = ConfigValidator::new();
    assert!(validator.validate(&parse("sections: []\n")).is_err());

    let ok = parse("section_name: guide\nsections:\n  - title: A\n    label: A\n");
    assert!(validator.validate(&ok).is_ok());
}
