mod common;

use std::fs;

use assert_cmd::Command;
use common::{TestWorkspace, fixture_path};
use predicates::prelude::*;
use predicates::str::contains;

fn gene_matcher() -> Command {
    Command::cargo_bin("gene-matcher").expect("binary exists")
}

#[test]
fn match_writes_results_next_to_input() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("genes.csv", "first,second\nA,B\nB,B\nA,D\nC,\n");

    gene_matcher()
        .args(["match", "-i", input.to_str().unwrap()])
        .assert()
        .success();

    let results = fs::read_to_string(workspace.path().join("results.csv")).expect("read results");
    assert_eq!(results, "Gene,Column 1,Column 2\nB,[3],\"[2, 3]\"\n");
}

#[test]
fn match_keeps_tab_layout_for_tsv_input() {
    let workspace = TestWorkspace::new();
    let input = workspace.path().join("genes.tsv");
    fs::copy(fixture_path("genes.tsv"), &input).expect("copy fixture");

    gene_matcher()
        .args(["match", "-i", input.to_str().unwrap()])
        .assert()
        .success();

    let results = fs::read_to_string(workspace.path().join("results.tsv")).expect("read results");
    assert_eq!(results, "Gene\tColumn 1\tColumn 2\nMYC\t[2, 3]\t[3]\n");
}

#[test]
fn match_to_stdout_with_explicit_output() {
    gene_matcher()
        .args([
            "match",
            "-i",
            fixture_path("genes.csv").to_str().unwrap(),
            "-o",
            "-",
        ])
        .assert()
        .success()
        .stdout(contains("TP53,\"[3, 5]\",[2]"))
        .stdout(contains("10,[4],[5]"));
}

#[test]
fn match_emits_json() {
    let output = gene_matcher()
        .args([
            "match",
            "-i",
            fixture_path("genes.csv").to_str().unwrap(),
            "-o",
            "-",
            "--format",
            "json",
        ])
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value[0]["Gene"], "BRCA1");
    assert_eq!(value[1]["Column 1"], serde_json::json!([3, 5]));
}

#[test]
fn match_reads_stdin() {
    gene_matcher()
        .args(["match", "-i", "-"])
        .write_stdin("x,y\nKRAS,MYC\nMYC,KRAS\n")
        .assert()
        .success()
        .stdout(contains("KRAS,[2],[3]"))
        .stdout(contains("MYC,[3],[2]"));
}

#[test]
fn config_file_and_flags_control_placeholders() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("genes.csv", "a,b\nNA,NA\nBLANK,BLANK\nTP53,TP53\n");
    let config = workspace.write("config.yml", "placeholder_tokens:\n  - NA\n");

    gene_matcher()
        .args([
            "match",
            "-i",
            input.to_str().unwrap(),
            "-o",
            "-",
            "-c",
            config.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("BLANK,[3],[3]"))
        .stdout(contains("NA,").not());

    gene_matcher()
        .args([
            "match",
            "-i",
            input.to_str().unwrap(),
            "-o",
            "-",
            "--placeholder",
            "TP53",
        ])
        .assert()
        .success()
        .stdout(contains("NA,[2],[2]"))
        .stdout(contains("TP53").not())
        .stdout(contains("BLANK").not());
}

#[test]
fn missing_numeric_policy_is_selectable() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("genes.csv", "a,b\n1,0\n,5\n");

    gene_matcher()
        .args(["match", "-i", input.to_str().unwrap(), "-o", "-"])
        .assert()
        .success()
        .stdout("Gene,Column 1,Column 2\n");

    gene_matcher()
        .args([
            "match",
            "-i",
            input.to_str().unwrap(),
            "-o",
            "-",
            "--missing-numeric",
            "zero-fill",
        ])
        .assert()
        .success()
        .stdout(contains("0,[3],[2]"));
}

#[test]
fn single_column_input_fails_without_results() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("genes.csv", "only\nA\nB\n");

    gene_matcher()
        .args(["match", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("at least two columns"));

    assert!(!workspace.path().join("results.csv").exists());
}

#[test]
fn spreadsheet_binaries_are_reported_as_unsupported() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("genes.ods", "binary");

    gene_matcher()
        .args(["match", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("unsupported file format '.ods'"));
}

#[test]
fn table_flag_keeps_stdout_results_parseable() {
    let output = gene_matcher()
        .args([
            "match",
            "-i",
            fixture_path("genes.tsv").to_str().unwrap(),
            "-o",
            "-",
            "--format",
            "json",
            "--table",
        ])
        .output()
        .expect("run gene-matcher");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value[0]["Gene"], "MYC");
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Gene  Column 1  Column 2"));
    assert!(stderr.contains("MYC   [2, 3]    [3]"));
}

#[test]
fn table_flag_prints_to_stdout_when_results_go_to_a_file() {
    let workspace = TestWorkspace::new();
    let results = workspace.path().join("out.csv");

    gene_matcher()
        .args([
            "match",
            "-i",
            fixture_path("genes.tsv").to_str().unwrap(),
            "-o",
            results.to_str().unwrap(),
            "--table",
        ])
        .assert()
        .success()
        .stdout(contains("MYC   [2, 3]    [3]"));

    let written = fs::read_to_string(&results).expect("read results");
    assert_eq!(written, "Gene,Column 1,Column 2\nMYC,\"[2, 3]\",[3]\n");
}

#[test]
fn preview_shows_roles_and_tokens() {
    gene_matcher()
        .args([
            "preview",
            "-i",
            fixture_path("genes.csv").to_str().unwrap(),
            "--rows",
            "4",
        ])
        .assert()
        .success()
        .stdout(contains("Set 1 token"))
        .stdout(contains("\"10\""))
        .stdout(contains("\"BRCA1\"").count(2));
}
