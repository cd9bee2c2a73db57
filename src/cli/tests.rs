use super::{run, Cli};
use crate::config::HelperConfig;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

const ROUTES: &str = r#"
prefix: /api/:version
versions: v1
routes:
  - { method: GET, path: "/cats(.json)", namespace: /cats }
  - { method: GET, path: "/cats/:id(.json)", namespace: "/cats/:id" }
  - { method: POST, path: "/cats(.json)", namespace: /cats }
"#;

fn routes_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(ROUTES.as_bytes()).unwrap();
    file
}

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    run(&cli, &HelperConfig::default(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_list_prints_one_line_per_helper() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();
    let output = run_args(&["route-helpers", "list", "--routes", path]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "api_v1_cats_path GET /api/:version/cats(.json) args=[]",
            "api_v1_cats_path GET /api/:version/cats/:id(.json) args=[id]",
        ]
    );
}

#[test]
fn test_list_json() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();
    let output = run_args(&["route-helpers", "list", "--routes", path, "--json"]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    assert_eq!(parsed[0]["name"], "api_v1_cats_path");
    assert_eq!(parsed[0]["version"], "v1");
    assert_eq!(parsed[1]["arguments"], serde_json::json!(["id"]));
}

#[test]
fn test_resolve_picks_overload_from_args() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();
    let output = run_args(&[
        "route-helpers",
        "resolve",
        "--routes",
        path,
        "--helper",
        "api_v1_cats_path",
        "--arg",
        "id=7",
    ])
    .unwrap();
    assert_eq!(output, "/api/v1/cats/7.json\n");
}

#[test]
fn test_resolve_with_args_format_and_params() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();
    let output = run_args(&[
        "route-helpers",
        "resolve",
        "--routes",
        path,
        "--helper",
        "api_v1_cats_path",
        "--param",
        "foo=bar",
        "--param",
        "baz=zot",
        "--format",
        "xml",
    ])
    .unwrap();
    assert_eq!(output, "/api/v1/cats.xml?foo=bar&baz=zot\n");
}

#[test]
fn test_resolve_unknown_helper_lists_available() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();
    let err = run_args(&["route-helpers", "resolve", "--routes", path, "--helper", "dogs_path"])
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("dogs_path"));
    assert!(msg.contains("api_v1_cats_path"));
}

#[test]
fn test_bad_pair_is_rejected_by_parser() {
    let result = Cli::try_parse_from([
        "route-helpers",
        "resolve",
        "--routes",
        "x.yaml",
        "--helper",
        "a_path",
        "--arg",
        "novalue",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_params_raw_conflicts_with_param() {
    let result = Cli::try_parse_from([
        "route-helpers",
        "resolve",
        "--routes",
        "x.yaml",
        "--helper",
        "a_path",
        "--param",
        "a=b",
        "--params-raw",
        "1",
    ]);
    assert!(result.is_err());
}
