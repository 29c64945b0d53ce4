use clap::Parser;
use doc_init::cli::{Args, ColorChoice};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("doc-init")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["outline.yaml", "imports.mdx"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config_path, PathBuf::from("outline.yaml"));
    assert_eq!(parsed.imports_path, PathBuf::from("imports.mdx"));
    assert_eq!(parsed.base_docs_path, PathBuf::from("docs"));
    assert!(!parsed.verbose);
    assert_eq!(parsed.color, ColorChoice::Auto);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--verbose",
        "--base-docs-path",
        "site/docs",
        "--color",
        "never",
        "outline.yaml",
        "imports.mdx",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.base_docs_path, PathBuf::from("site/docs"));
    assert_eq!(parsed.color, ColorChoice::Never);
    assert!(!parsed.display_options().color);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "outline.yaml", "imports.mdx"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
}

#[test]
fn test_color_always() {
    let args = make_args(&["--color", "always", "outline.yaml", "imports.mdx"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.display_options().color);
}

#[test]
fn test_missing_args() {
    let args = make_args(&["outline.yaml"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["outline.yaml", "imports.mdx", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_invalid_color() {
    let args = make_args(&["--color", "sometimes", "outline.yaml", "imports.mdx"]);
    assert!(Args::try_parse_from(args).is_err());
}
