// コマンドディスパッチと自動整形のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// コマンドディスパッチのエラー型
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("未登録のコマンド: {name} (利用可能: {})", .available.join(", "))]
    UnknownCommand {
        name: String,
        available: Vec<String>,
    },

    #[error("コマンド実行エラー: {name} - {source}")]
    ActionFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("出力エラー: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    /// 未登録コマンドエラーの作成
    pub fn unknown_command(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::UnknownCommand {
            name: name.into(),
            available,
        }
    }

    /// アクション失敗エラーの作成
    pub fn action_failed(name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ActionFailed {
            name: name.into(),
            source,
        }
    }

    /// プロセス終了コードを取得
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCommand { .. } => 2,
            Self::ActionFailed { .. } | Self::Output { .. } => 1,
        }
    }

    /// 表示用メッセージ
    ///
    /// 途中の文脈で隠れた最深部の原因（OSエラーなど）を末尾に付加する
    pub fn detailed_message(&self) -> String {
        let message = self.to_string();

        let mut cause: &(dyn std::error::Error + 'static) = self;
        while let Some(source) = std::error::Error::source(cause) {
            cause = source;
        }

        let cause = cause.to_string();
        if message.contains(&cause) {
            message
        } else {
            format!("{message}: {cause}")
        }
    }
}

impl From<std::io::Error> for DispatchError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

/// コマンド登録時のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("コマンドが重複しています: {name}")]
    DuplicateCommand { name: String },

    #[error("コマンド名が空です")]
    EmptyName,
}

/// 自動整形アクションのエラー型
#[derive(Error, Debug)]
pub enum AutoformatError {
    #[error("走査エラー: {root} - {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("一時ファイル削除エラー: {path} - {source}")]
    Removal {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("フォーマッタ起動エラー: {formatter} ({file}) - {source}")]
    Spawn {
        formatter: PathBuf,
        file: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl AutoformatError {
    /// 走査エラーの作成
    pub fn traversal(root: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::Traversal {
            root: root.as_ref().to_path_buf(),
            source,
        }
    }

    /// 削除エラーの作成
    pub fn removal(path: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::Removal {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 起動エラーの作成
    pub fn spawn(formatter: impl AsRef<Path>, file: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::Spawn {
            formatter: formatter.as_ref().to_path_buf(),
            file: file.as_ref().to_path_buf(),
            source,
        }
    }
}

/// 設定ファイルのエラー型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {path} - {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイル解析エラー: {path} - {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("設定エラー: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    /// バリデーションエラーの作成
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// 自動整形の結果型
pub type AutoformatResult<T> = std::result::Result<T, AutoformatError>;
