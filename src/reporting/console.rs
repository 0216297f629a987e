// 進捗報告の具象実装

use super::ProgressReporter;
use crate::core::{AutoformatOutcome, FormatOutcome};
use std::path::Path;

/// コンソール出力による進捗報告実装
///
/// quietモードでもフォーマッタ未検出などの警告は標準エラーに出力する
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report_missing_root(&self, root: &Path) {
        eprintln!("⚠️  Root directory not found, skipping: {}", root.display());
    }

    fn report_formatter_missing(&self) {
        eprintln!("⚠️  clang-format not found, formatting skipped");
    }

    fn report_formatter_found(&self, formatter: &Path) {
        if !self.quiet {
            println!("🔧 Using formatter: {}", formatter.display());
        }
    }

    fn report_formatting(&self, file: &Path) {
        if !self.quiet {
            println!("{}", file.display());
        }
    }

    fn report_format_failed(&self, file: &Path, code: Option<i32>) {
        match code {
            Some(code) => eprintln!("❌ Formatter failed on {} (exit code {code})", file.display()),
            None => eprintln!("❌ Formatter terminated on {}", file.display()),
        }
    }

    fn report_removed(&self, file: &Path) {
        if !self.quiet {
            println!("🗑️  Removed {}", file.display());
        }
    }

    fn report_completed(&self, outcome: &AutoformatOutcome) {
        if self.quiet {
            return;
        }
        match &outcome.formatting {
            FormatOutcome::Skipped => println!(
                "✅ Completed! Formatting skipped, removed temp files: {}",
                outcome.removed_temp_files.len()
            ),
            FormatOutcome::Ran {
                formatted, failed, ..
            } => println!(
                "✅ Completed! Formatted: {formatted}, Failed: {}, Removed temp files: {}",
                failed.len(),
                outcome.removed_temp_files.len()
            ),
        }
    }
}

/// 何もしない進捗報告実装（テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NoOpProgressReporter {
    fn report_missing_root(&self, _root: &Path) {}

    fn report_formatter_missing(&self) {}

    fn report_formatter_found(&self, _formatter: &Path) {}

    fn report_formatting(&self, _file: &Path) {}

    fn report_format_failed(&self, _file: &Path, _code: Option<i32>) {}

    fn report_removed(&self, _file: &Path) {}

    fn report_completed(&self, _outcome: &AutoformatOutcome) {}
}
