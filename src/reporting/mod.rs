// 進捗報告
//
// ユーザー向けのコンソール出力はこのトレイト経由で行う。
// 診断用の詳細ログはtracingで出力する。

use crate::core::AutoformatOutcome;
use mockall::automock;
use std::path::Path;

pub mod console;

pub use console::{ConsoleProgressReporter, NoOpProgressReporter};

/// 自動整形の進捗報告を抽象化するトレイト
#[automock]
pub trait ProgressReporter {
    /// 設定されたルートが存在しない
    fn report_missing_root(&self, root: &Path);

    /// フォーマッタが見つからなかった（整形はスキップされる）
    fn report_formatter_missing(&self);

    /// フォーマッタを決定した
    fn report_formatter_found(&self, formatter: &Path);

    /// ファイルの整形を開始する
    fn report_formatting(&self, file: &Path);

    /// フォーマッタが非ゼロで終了した
    fn report_format_failed(&self, file: &Path, code: Option<i32>);

    /// 一時ファイルを削除した
    fn report_removed(&self, file: &Path);

    /// 処理完了
    fn report_completed(&self, outcome: &AutoformatOutcome);
}
