use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

const S4_GROUP: &str = r#"{
  "kind": "permutation",
  "degree": 4,
  "generators": ["a", "r"],
  "elements": {
    "a": "(0 1)",
    "b": "(0 1 2)",
    "c": "(2 3)",
    "r": "(0 1 2 3)",
    "z": "(0 1)(2 3)",
    "w": "(0 2)(1 3)",
    "d": "(0 1)",
    "p": "(0 1 2 3)",
    "x": "(1 2)",
    "y": "(2 3)",
    "l": [1, 2, 0, 3],
    "t": "(1 2 3)"
  }
}"#;

const PASSING_CERTIFICATE: &str = r#"
name: s3-in-s4
claims:
  - name: order-b
    claim: order
    expr: b
    order: 3
  - name: a-inverts-b
    claim: equal
    lhs: b^a
    rhs: b^-1
"#;

const FAILING_CERTIFICATE: &str = r#"
name: wrong-order
claims:
  - name: order-r
    claim: order
    expr: r
    order: 3
"#;

fn mgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mgen"))
        .args(args)
        .output()
        .expect("run mgen")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn version_prints_the_crate_version() {
    let output = mgen(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn parse_prints_canonical_words() {
    let output = mgen(&["parse", "M< l_2 * t_1 >", "M<>"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["M<l_2*t_1>", "M<1>"]);

    assert!(!mgen(&["parse", "l_2"]).status.success());
}

#[test]
fn catalogue_literals_validate() {
    let output = mgen(&["catalog", "--validate"]);
    assert!(output.status.success());

    let output = mgen(&["catalog", "--section", "psl2-29-2"]);
    assert!(output.status.success());
    let rows = stdout_json(&output);
    let names: Vec<&str> = rows
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|row| row["name"].as_str())
        .collect();
    assert_eq!(names, vec!["a", "b"]);

    assert!(!mgen(&["catalog", "--section", "4fi24"]).status.success());
}

#[test]
fn closure_reports_order_and_found_orders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let group = write(dir.path(), "s4.json", S4_GROUP);
    let output = mgen(&["closure", "--group", arg(&group), "--find-orders", "3,5"]);
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["order"], 24);
    assert_eq!(report["found_orders"]["3"], true);
    assert_eq!(report["found_orders"]["5"], false);

    let out = dir.path().join("reports").join("klein.json");
    let output = mgen(&[
        "closure",
        "--group",
        arg(&group),
        "--generators",
        "z,w",
        "--out",
        arg(&out),
    ]);
    assert!(output.status.success());
    let report: Value =
        serde_json::from_slice(&std::fs::read(&out).expect("report written")).expect("JSON");
    assert_eq!(report["order"], 4);
}

#[test]
fn subsets_detect_dependence_and_resume_from_checkpoints() {
    let dir = tempfile::tempdir().expect("tempdir");
    let group = write(dir.path(), "s4.json", S4_GROUP);

    let output = mgen(&["subsets", "--group", arg(&group), "--elements", "z,w"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["outcome"], "independent");

    let output = mgen(&["subsets", "--group", arg(&group), "--elements", "z,w,z"]);
    assert!(!output.status.success());
    assert_eq!(stdout_json(&output)["outcome"], "dependent");

    let checkpoint = dir.path().join("subsets.json");
    let output = mgen(&[
        "subsets",
        "--group",
        arg(&group),
        "--elements",
        "z,w",
        "--budget",
        "1",
        "--checkpoint",
        arg(&checkpoint),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["outcome"], "interrupted");
    assert!(checkpoint.exists());

    let output = mgen(&[
        "subsets",
        "--group",
        arg(&group),
        "--elements",
        "z,w",
        "--checkpoint",
        arg(&checkpoint),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["outcome"], "independent");
}

#[test]
fn search_finds_requested_orders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let group = write(dir.path(), "s4.json", S4_GROUP);
    let output = mgen(&[
        "search",
        "--group",
        arg(&group),
        "--orders",
        "2,4",
        "--seed",
        "7",
    ]);
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["seed"], 7);
    assert!(report["hits"]["2"]["expression"].is_string());
    assert!(report["hits"]["4"]["expression"].is_string());
}

#[test]
fn verify_exits_non_zero_on_failed_claims() {
    let dir = tempfile::tempdir().expect("tempdir");
    let group = write(dir.path(), "s4.json", S4_GROUP);
    let passing = write(dir.path(), "pass.yaml", PASSING_CERTIFICATE);
    let failing = write(dir.path(), "fail.yaml", FAILING_CERTIFICATE);

    let output = mgen(&["verify", "--group", arg(&group), "--certificate", arg(&passing)]);
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["certificate"], "s3-in-s4");
    assert_eq!(report["checks"].as_array().map(Vec::len), Some(2));

    let output = mgen(&["verify", "--group", arg(&group), "--certificate", arg(&failing)]);
    assert!(!output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["checks"][0]["observed"], "4");
}

#[test]
fn verify_runs_catalogue_sections_through_tag_elements() {
    let dir = tempfile::tempdir().expect("tempdir");
    let group = write(dir.path(), "s4.json", S4_GROUP);
    let output = mgen(&["verify", "--group", arg(&group), "--section", "2B"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("oracle-required"));
}

#[test]
fn sections_list_every_construction() {
    let output = mgen(&["sections"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    for id in ["standard-g", "pgl2-13-centraliser", "3fi24", "psl2-29-2"] {
        assert!(text.contains(id), "{id} missing");
    }

    let output = mgen(&["sections", "--id", "s3-th"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["title"].as_str().map(|t| t.is_empty()), Some(false));
}

const ORACLE: &str = r#"
large: [b, z]
small: [z, w]
characters:
  - order: 3
    values: [1, 2, 3, 4]
involutions:
  - class: 2
    element: z
"#;

const ORACLE_CERTIFICATE: &str = r#"
name: a4-inside-s4
claims:
  - name: b-in-large
    claim: in_maximal2_local
    expr: b
  - name: a-outside-large
    claim: order
    expr: a
    order: 2
  - name: zw-in-small
    claim: in_extraspecial
    expr: z*w
  - name: class-b
    claim: character
    expr: b
    index: 1
    value: 2
  - name: w-class
    claim: involution_class
    expr: w
    class: 2
"#;

#[test]
fn verify_builds_a_class_oracle_from_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let group = write(dir.path(), "s4.json", S4_GROUP);
    let certificate = write(dir.path(), "a4.yaml", ORACLE_CERTIFICATE);
    let oracle = write(dir.path(), "oracle.yaml", ORACLE);

    let output = mgen(&["verify", "--group", arg(&group), "--certificate", arg(&certificate)]);
    assert!(!output.status.success());

    let out = dir.path().join("report.json");
    let output = mgen(&[
        "verify",
        "--group",
        arg(&group),
        "--certificate",
        arg(&certificate),
        "--oracle",
        arg(&oracle),
        "--out",
        arg(&out),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: Value =
        serde_json::from_slice(&std::fs::read(&out).expect("report written")).expect("JSON");
    assert_eq!(report["checks"].as_array().map(Vec::len), Some(5));
}

#[cfg(unix)]
#[test]
fn ctrl_c_saves_a_checkpoint() {
    use std::io::{BufRead, BufReader, Read};
    use std::process::Stdio;

    let count = 24;
    let elements: Vec<String> = (0..count)
        .map(|i| format!("\"s{i}\": \"({} {})\"", 2 * i, 2 * i + 1))
        .collect();
    let group_json = format!(
        "{{\"kind\": \"permutation\", \"degree\": {}, \"generators\": [\"s0\"], \"elements\": {{{}}}}}",
        2 * count,
        elements.join(", ")
    );
    let names: Vec<String> = (0..count).map(|i| format!("s{i}")).collect();

    let dir = tempfile::tempdir().expect("tempdir");
    let group = write(dir.path(), "disjoint.json", &group_json);
    let checkpoint = dir.path().join("subsets.json");
    let mut child = Command::new(env!("CARGO_BIN_EXE_mgen"))
        .args([
            "--log",
            "info",
            "subsets",
            "--group",
            arg(&group),
            "--elements",
            &names.join(","),
            "--progress-every",
            "1000",
            "--checkpoint",
            arg(&checkpoint),
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn mgen");

    let mut stderr = BufReader::new(child.stderr.take().expect("stderr"));
    let mut line = String::new();
    loop {
        line.clear();
        assert!(stderr.read_line(&mut line).expect("read stderr") > 0, "no progress");
        if line.contains("subsets checked") {
            break;
        }
    }
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("send SIGINT");
    assert!(status.success());
    let mut rest = String::new();
    stderr.read_to_string(&mut rest).expect("drain stderr");

    let output = child.wait_with_output().expect("wait for mgen");
    assert!(output.status.success(), "{rest}");
    assert_eq!(stdout_json(&output)["outcome"], "interrupted");
    let saved: Value =
        serde_json::from_slice(&std::fs::read(&checkpoint).expect("checkpoint written"))
            .expect("JSON");
    assert!(saved["checked"].as_u64().is_some_and(|checked| checked >= 1000));
    assert_eq!(saved["element_count"], count);
}
