use crate::autoformat::Autoformatter;
use crate::config::AutoformatConfig;
use crate::core::{AutoformatOutcome, RunSummary};
use crate::reporting::ConsoleProgressReporter;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// autoformatコマンドの実行オプション
#[derive(Debug, Clone, Default)]
pub struct AutoformatOptions {
    /// 設定ファイル（Noneならカレントのengine_cmd.json、なければデフォルト）
    pub config_path: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub quiet: bool,
}

/// 設定ファイルを読み込んで自動整形を実行する
///
/// 設定は実行時に読み込むため、一覧表示や未登録コマンドでは設定の誤りが影響しない
pub fn execute_autoformat(options: &AutoformatOptions) -> Result<AutoformatOutcome> {
    let config = AutoformatConfig::load(options.config_path.as_deref())?;
    execute_autoformat_with_config(config, options)
}

/// 実ファイルシステム・実プロセスで自動整形を実行する
pub fn execute_autoformat_with_config(
    config: AutoformatConfig,
    options: &AutoformatOptions,
) -> Result<AutoformatOutcome> {
    let reporter = if options.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    let action = Autoformatter::system(config, reporter);
    let outcome = action.run()?;

    if let Some(summary_path) = &options.summary {
        write_summary(summary_path, &outcome)?;
    }

    Ok(outcome)
}

fn write_summary(path: &Path, outcome: &AutoformatOutcome) -> Result<()> {
    let summary = RunSummary::from_outcome(outcome);
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(path, json).with_context(|| format!("Failed to write summary: {}", path.display()))
}
