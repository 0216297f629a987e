use anyhow::Result;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;

/// ファイルシステム操作のトレイト
///
/// 走査・存在確認・削除を抽象化し、フィルタリングのロジックを
/// 実ファイルなしでテストできるようにする
#[automock]
pub trait FileSystem {
    /// `root`以下のディレクトリ以外のエントリを再帰的に列挙する
    ///
    /// 各ディレクトリ内ではファイルを先に、ファイル名順で返す
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// パスが存在するかチェック
    fn exists(&self, path: &Path) -> bool;

    /// パスがディレクトリかチェック
    fn is_dir(&self, path: &Path) -> bool;

    /// ファイルを削除する
    fn remove_file(&self, path: &Path) -> Result<()>;
}
