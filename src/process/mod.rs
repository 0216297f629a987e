// 外部プロセスと実行環境の抽象化

use anyhow::Result;
use mockall::automock;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub mod local;

/// 子プロセスの終了状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub success: bool,
    /// シグナル終了時はNone
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failure(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

/// 子プロセス実行のトレイト
#[automock]
pub trait ProcessRunner {
    /// `program`を起動し、終了まで待機する
    ///
    /// 起動できなかった場合のみErrを返す。非ゼロ終了はExitOutcomeで表す。
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ExitOutcome>;
}

/// 実行環境（環境変数・検索パス）のトレイト
#[automock]
pub trait Environment {
    /// 環境変数の値を取得
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// 実行ファイルの検索パス（PATH）を取得
    fn search_paths(&self) -> Vec<PathBuf>;
}
