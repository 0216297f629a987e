// エラーハンドリングの統合テスト

#[path = "../fixtures/mod.rs"]
mod fixtures;

use engine_cmd::cli::{execute_autoformat, execute_autoformat_with_config, AutoformatOptions};
use engine_cmd::config::FormatterConfig;
use engine_cmd::core::{AutoformatError, ConfigError, DispatchError};
use engine_cmd::reporting::ConsoleProgressReporter;
use engine_cmd::{AutoformatConfig, Command, CommandRegistry, SystemAutoformatter};
use fixtures::SourceTree;

fn quiet() -> AutoformatOptions {
    AutoformatOptions {
        quiet: true,
        ..AutoformatOptions::default()
    }
}

fn without_formatter(config: AutoformatConfig) -> AutoformatConfig {
    config.with_formatter(FormatterConfig {
        install_paths: Vec::new(),
        env_var: None,
        program: None,
        ..FormatterConfig::default()
    })
}

#[test]
fn test_root_that_is_a_file_is_traversal_error() {
    let tree = SourceTree::new();
    let not_a_dir = tree.file("src", "not a directory");

    let config = without_formatter(AutoformatConfig::new().with_roots([not_a_dir]));
    let result = SystemAutoformatter::system(config, ConsoleProgressReporter::quiet()).run();

    assert!(matches!(result, Err(AutoformatError::Traversal { .. })));
}

#[cfg(unix)]
#[test]
fn test_non_executable_formatter_is_spawn_error() {
    use std::os::unix::fs::PermissionsExt;

    let tree = SourceTree::new();
    tree.file("src/a.cpp", "");
    let temp = tree.file("src/a.cpp~1.TMP", "");
    let formatter = tree.file("bin/clang-format", "not a program");
    std::fs::set_permissions(&formatter, std::fs::Permissions::from_mode(0o644)).unwrap();

    let config = AutoformatConfig::new()
        .with_roots([tree.path("src")])
        .with_formatter(FormatterConfig {
            install_paths: vec![formatter],
            env_var: None,
            program: None,
            ..FormatterConfig::default()
        });
    let result = SystemAutoformatter::system(config, ConsoleProgressReporter::quiet()).run();

    assert!(matches!(result, Err(AutoformatError::Spawn { .. })));
    // 起動失敗で中断するため一時ファイルは残る
    assert!(temp.exists());
}

#[test]
fn test_summary_write_failure_is_reported() {
    let tree = SourceTree::new();
    tree.file("src/a.cpp", "");

    let config = without_formatter(AutoformatConfig::new().with_roots([tree.path("src")]));
    let options = AutoformatOptions {
        summary: Some(tree.path("missing_dir/summary.json")),
        ..quiet()
    };

    let error = execute_autoformat_with_config(config, &options).unwrap_err();
    assert!(error.to_string().contains("Failed to write summary"));
}

#[test]
fn test_broken_config_file() {
    let tree = SourceTree::new();
    let config_path = tree.file("engine_cmd.json", "{ \"roots\": ");

    let options = AutoformatOptions {
        config_path: Some(config_path),
        ..quiet()
    };
    let error = execute_autoformat(&options).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_action_error_surfaces_through_dispatch() {
    let tree = SourceTree::new();
    let not_a_dir = tree.file("src", "");
    let config = without_formatter(AutoformatConfig::new().with_roots([not_a_dir]));

    let registry = CommandRegistry::new()
        .with_command(Command::new("autoformat", "Run autoformatting script", move || {
            execute_autoformat_with_config(config.clone(), &quiet()).map(|_| ())
        }))
        .unwrap();

    let mut out = Vec::new();
    let error = registry.dispatch(Some("autoformat"), &mut out).unwrap_err();

    assert!(matches!(error, DispatchError::ActionFailed { .. }));
    assert_eq!(error.exit_code(), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "Running autoformat ...\n");
}
