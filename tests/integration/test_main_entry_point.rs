// バイナリのエントリーポイントのテスト

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::SourceTree;
use std::process::{Command, Output};

fn engine_cmd(tree: &SourceTree, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_engine_cmd"))
        .args(args)
        .current_dir(tree.root())
        .env_remove("LLVM_ROOT")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_no_arguments_lists_commands() {
    let tree = SourceTree::new();
    let temp = tree.file("src/x.cpp~1.TMP", "");

    let output = engine_cmd(&tree, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Available commands:"));
    assert!(stdout.contains(" - autoformat : Run autoformatting script"));
    // 一覧表示では何も実行しない
    assert!(temp.exists());
}

#[test]
fn test_unknown_command_fails_without_side_effects() {
    let tree = SourceTree::new();
    let temp = tree.file("src/x.cpp~1.TMP", "");

    let output = engine_cmd(&tree, &["foo"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("foo"));
    assert!(stderr.contains("autoformat"));
    assert!(output.stdout.is_empty());
    assert!(temp.exists());
}

#[test]
fn test_autoformat_uses_config_in_working_directory() {
    let tree = SourceTree::new();
    tree.file("src/a.cpp", "int a;\n");
    let temp = tree.file("src/x.cpp~1.TMP", "");
    tree.write_config("engine_cmd.json", &["src"], None);

    let output = engine_cmd(&tree, &["autoformat"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Running autoformat ..."));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("clang-format not found"));
    assert!(!temp.exists());
    assert_eq!(tree.read("src/a.cpp"), "int a;\n");
}

#[cfg(unix)]
#[test]
fn test_autoformat_with_explicit_config_and_summary() {
    let tree = SourceTree::new();
    let source = tree.file("src/a.cpp", "int a;\n");
    let formatter = tree.fake_formatter(None);
    tree.write_config("tools/format.json", &["src"], Some(&formatter));

    let output = engine_cmd(
        &tree,
        &[
            "autoformat",
            "--config",
            "tools/format.json",
            "--summary",
            "summary.json",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // 整形前にファイルパスを表示する
    assert!(stdout.contains(&source.to_string_lossy().into_owned()));
    assert_eq!(tree.read("src/a.cpp"), "int a;\n// formatted\n");

    let summary: serde_json::Value = serde_json::from_str(&tree.read("summary.json")).unwrap();
    assert_eq!(summary["formatted_files"], 1);
    assert_eq!(summary["formatter"], &*formatter.to_string_lossy());
}

#[test]
fn test_invalid_config_exits_with_error() {
    let tree = SourceTree::new();
    tree.file("engine_cmd.json", "{ \"roots\": [] }");

    let output = engine_cmd(&tree, &["autoformat"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("roots"));
}

#[test]
fn test_cli_help() {
    let tree = SourceTree::new();

    let output = engine_cmd(&tree, &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("engine_cmd"));
    assert!(stdout.contains("--config"));
}

#[cfg(unix)]
#[test]
fn test_spawn_failure_reports_os_error() {
    use std::os::unix::fs::PermissionsExt;

    let tree = SourceTree::new();
    tree.file("src/a.cpp", "int a;\n");
    let formatter = tree.file("bin/fmt", "not a program");
    std::fs::set_permissions(&formatter, std::fs::Permissions::from_mode(0o644)).unwrap();
    tree.write_config("engine_cmd.json", &["src"], Some(&formatter));

    let output = engine_cmd(&tree, &["autoformat"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to execute"));
    // 文脈の下に隠れたOSエラーまで表示する
    assert!(stderr.contains("os error 13"));
}
