//! Tests for argument parsing, configuration layering and file output.

use clap::Parser;
use jsxsugar_cli::args::CliArgs;
use jsxsugar_cli::config::{config_from_args, resolve_config};
use jsxsugar_cli::driver::{render, run};
use jsxsugar_cli::tracing_config::LogFormat;
use std::path::{Path, PathBuf};

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("jsxsugar").chain(args.iter().copied()))
}

#[test]
fn test_parse_flags() {
    let args = parse(&[
        "--factory",
        "h",
        "--no-array-children",
        "--extensions",
        "jsx,.mjs",
        "--emit-map",
        "a.jsx",
        "b.js",
    ]);
    assert_eq!(args.factory.as_deref(), Some("h"));
    assert!(args.no_array_children);
    assert!(args.emit_map);
    assert_eq!(
        args.extensions,
        Some(vec!["jsx".to_string(), ".mjs".to_string()])
    );
    assert_eq!(args.files, vec![PathBuf::from("a.jsx"), PathBuf::from("b.js")]);
}

#[test]
fn test_files_are_required() {
    assert!(CliArgs::try_parse_from(["jsxsugar", "--factory", "h"]).is_err());
}

#[test]
fn test_unset_switches_do_not_override() {
    let config = config_from_args(&parse(&["x.jsx"]));
    assert_eq!(config.pass_unknown_tags_to_factory, None);
    assert_eq!(config.unknown_tags_as_string, None);
    assert_eq!(config.array_children, None);
    assert_eq!(config.factory, None);
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "jsxsugar.json",
        r#"{ "factory": "React.createElement", "spreadFn": "merge", "arrayChildren": "false" }"#,
    );
    let config = config.to_str().unwrap();

    let resolved = resolve_config(&parse(&["-c", config, "x.jsx"])).unwrap();
    assert_eq!(resolved.options.factory, "React.createElement");
    assert_eq!(resolved.options.spread_fn, "merge");
    assert!(!resolved.options.array_children);

    let resolved = resolve_config(&parse(&["-c", config, "--factory", "h", "x.jsx"])).unwrap();
    assert_eq!(resolved.options.factory, "h");
    assert_eq!(resolved.options.spread_fn, "merge");
}

#[test]
fn test_missing_factory_is_reported() {
    let err = resolve_config(&parse(&["x.jsx"])).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("--factory"), "{message}");
    assert!(message.contains("missing options.factory"), "{message}");
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(dir.path(), "broken.json", "{ factory: ");
    let err = resolve_config(&parse(&["-c", config.to_str().unwrap(), "x.jsx"])).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config"));
}

#[test]
fn test_run_transforms_and_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let app = write_file(dir.path(), "app.jsx", "var a = <b>hi</b>;\n");
    let css = write_file(dir.path(), "site.css", "a < b {}\n");

    let args = parse(&[
        "--factory",
        "h",
        app.to_str().unwrap(),
        css.to_str().unwrap(),
    ]);
    let outputs = run(&args).unwrap();
    assert_eq!(outputs.len(), 2);
    assert!(outputs[0].transformed());
    assert!(!outputs[1].transformed());

    let rendered = String::from_utf8(render(&outputs, false).unwrap()).unwrap();
    assert_eq!(rendered, "var a = h('b',null,[\"hi\"]);\na < b {}\n");
}

#[test]
fn test_run_respects_extension_list() {
    let dir = tempfile::tempdir().unwrap();
    let app = write_file(dir.path(), "app.jsx", "<b/>");
    let args = parse(&["--factory", "h", "--extensions", "js", app.to_str().unwrap()]);
    let outputs = run(&args).unwrap();
    assert_eq!(outputs[0].bytes, b"<b/>".to_vec());
    assert!(outputs[0].map.is_none());
}

#[test]
fn test_run_reports_parse_errors_with_file() {
    let dir = tempfile::tempdir().unwrap();
    let app = write_file(dir.path(), "bad.jsx", "<a>");
    let err = run(&parse(&["--factory", "h", app.to_str().unwrap()])).unwrap_err();
    assert!(format!("{err:#}").contains("failed to transform"));
}

#[test]
fn test_emit_map_report() {
    let dir = tempfile::tempdir().unwrap();
    let app = write_file(dir.path(), "app.jsx", "<b/>");
    let outputs = run(&parse(&["--factory", "h", "--emit-map", app.to_str().unwrap()])).unwrap();

    let report: serde_json::Value = serde_json::from_slice(&render(&outputs, true).unwrap()).unwrap();
    let file = &report[0];
    assert_eq!(file["transformed"], true);
    assert_eq!(file["code"], "h('b',null)");
    let map = file["map"].as_array().unwrap();
    assert!(!map.is_empty());
    assert_eq!(map[0]["source"], "app.jsx");
    assert_eq!(map[0]["original"]["line"], 1);
}

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("other"), LogFormat::Text);
}
