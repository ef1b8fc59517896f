//! End-to-end tests of the include-code binary.

use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn include_code() -> Command {
    Command::new(env!("CARGO_BIN_EXE_include-code"))
}

#[test]
fn test_missing_document_exits_with_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.md");

    let output = include_code().arg(&missing).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{} is not a file\n", missing.display())
    );
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = tempdir().unwrap();

    let output = include_code().arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_prints_updated_document() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("lib.rs"),
        "// example-start: 3 {name=\"demo\"}\nfn demo() {}\n// example-end: 3\n",
    )
    .unwrap();
    let doc = dir.path().join("README.md");
    fs::write(&doc, "<!-- include-code: lib.rs§3 -->\n```rust\nold\n```\n").unwrap();

    let output = include_code().arg(&doc).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "<!-- include-code: lib.rs§3 -->\n```rust +line_numbers name=\"demo\"\nfn demo() {}\n```\n"
    );
    // The document itself is left untouched.
    assert!(fs::read_to_string(&doc).unwrap().contains("old"));
}

#[test]
fn test_second_run_is_identical() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("main.rs"),
        "fn main() {\n    // example-start: 1\n    run();\n    // example-end: 1\n}\n",
    )
    .unwrap();
    let doc = dir.path().join("guide.md");
    fs::write(&doc, "# Guide\n<!-- include-code: main.rs§1 -->\n```rust\n```\nEnd\n").unwrap();

    let first = include_code().arg(&doc).output().unwrap();
    fs::write(&doc, &first.stdout).unwrap();
    let second = include_code().arg(&doc).output().unwrap();

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_source_fails() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("README.md");
    fs::write(&doc, "<!-- include-code: nowhere.rs§1 -->\n").unwrap();

    let output = include_code().arg(&doc).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nowhere.rs"));
}

#[test]
fn test_config_changes_fence_language() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("include-code.toml"),
        "[markers]\ncomment = \"#\"\n\n[fence]\nlanguage = \"python\"\nattributes = \"\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("demo.py"),
        "# example-start: 1\nprint('hi')\n# example-end: 1\n",
    )
    .unwrap();
    let doc = dir.path().join("README.md");
    fs::write(&doc, "<!-- include-code: demo.py§1 -->\n").unwrap();

    let output = include_code().arg(&doc).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "<!-- include-code: demo.py§1 -->\n```python\nprint('hi')\n```\n"
    );
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("include-code.toml"), "[fence\nlanguage = \"rust\"\n").unwrap();
    let doc = dir.path().join("README.md");
    fs::write(&doc, "# Title\n").unwrap();

    let output = include_code().arg(&doc).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: TOML parse error"), "stderr: {}", stderr);
}
