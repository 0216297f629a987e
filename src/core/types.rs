// 自動整形に関連するデータ型定義

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// 整形フェーズの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// フォーマッタが見つからず整形をスキップした
    Skipped,
    /// フォーマッタを実行した
    Ran {
        formatter: PathBuf,
        formatted: usize,
        /// 非ゼロ終了したファイル
        failed: Vec<PathBuf>,
    },
}

impl FormatOutcome {
    pub fn was_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// 成功扱いで整形されたファイル数
    pub fn succeeded(&self) -> usize {
        match self {
            Self::Skipped => 0,
            Self::Ran {
                formatted, failed, ..
            } => formatted - failed.len(),
        }
    }
}

/// 自動整形アクション全体の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoformatOutcome {
    pub formatting: FormatOutcome,
    pub removed_temp_files: Vec<PathBuf>,
}

/// ディスパッチ結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// コマンド一覧を表示した
    Listed,
    /// 指定コマンドを実行した
    Executed(String),
}

/// JSON出力用の実行サマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub finished_at: DateTime<Utc>,
    pub formatter: Option<PathBuf>,
    pub formatted_files: usize,
    pub failed_files: Vec<PathBuf>,
    pub removed_temp_files: Vec<PathBuf>,
}

impl RunSummary {
    pub fn from_outcome(outcome: &AutoformatOutcome) -> Self {
        let (formatter, formatted_files, failed_files) = match &outcome.formatting {
            FormatOutcome::Skipped => (None, 0, Vec::new()),
            FormatOutcome::Ran {
                formatter,
                formatted,
                failed,
            } => (Some(formatter.clone()), *formatted, failed.clone()),
        };

        Self {
            finished_at: Utc::now(),
            formatter,
            formatted_files,
            failed_files,
            removed_temp_files: outcome.removed_temp_files.clone(),
        }
    }
}
