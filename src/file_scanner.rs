use crate::core::{AutoformatError, AutoformatResult};
use crate::storage::FileSystem;
use std::path::{Path, PathBuf};

/// ファイル名のマッチ規則
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMatcher {
    /// `*.<ext>`
    Source { extensions: Vec<String> },
    /// `*.<ext>~*<suffix>`（フォーマッタが残す一時ファイル）
    Temp {
        extensions: Vec<String>,
        suffix: String,
    },
}

impl FileMatcher {
    pub fn source<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Source {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn temp<I, S>(extensions: I, suffix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Temp {
            extensions: extensions.into_iter().map(Into::into).collect(),
            suffix: suffix.into(),
        }
    }

    /// ファイル名が規則に一致するか（大文字小文字は区別する）
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Self::Source { extensions } => extensions
                .iter()
                .any(|ext| file_name.ends_with(&format!(".{ext}"))),
            Self::Temp { extensions, suffix } => match file_name.strip_suffix(suffix.as_str()) {
                Some(stem) => extensions
                    .iter()
                    .any(|ext| stem.contains(&format!(".{ext}~"))),
                None => false,
            },
        }
    }

    fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.matches(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

/// ルートディレクトリの走査と除外マーカーによるフィルタリング
pub struct FileScanner<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> FileScanner<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// 全ルートを順に走査し、一致したパスを発見順に返す
    ///
    /// 存在しないルートはスキップする。ルートが重なる場合の重複は取り除かない。
    pub fn scan(&self, roots: &[PathBuf], matcher: &FileMatcher) -> AutoformatResult<Vec<PathBuf>> {
        let mut file_paths = Vec::new();

        for root in roots {
            if !self.fs.exists(root) {
                tracing::debug!(root = %root.display(), "root does not exist, skipping");
                continue;
            }

            let files = self
                .fs
                .list_files(root)
                .map_err(|e| AutoformatError::traversal(root, e))?;

            file_paths.extend(files.into_iter().filter(|path| matcher.matches_path(path)));
        }

        Ok(file_paths)
    }

    /// 親ディレクトリに`marker`が存在するパスを除外する（順序は維持）
    pub fn filter_ignored(&self, paths: Vec<PathBuf>, marker: &str) -> Vec<PathBuf> {
        paths
            .into_iter()
            .filter(|path| !self.is_ignored(path, marker))
            .collect()
    }

    pub fn is_ignored(&self, path: &Path, marker: &str) -> bool {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        self.fs.exists(&parent.join(marker))
    }

    /// 走査とフィルタリングをまとめて行う
    pub fn scan_filtered(
        &self,
        roots: &[PathBuf],
        matcher: &FileMatcher,
        marker: &str,
    ) -> AutoformatResult<Vec<PathBuf>> {
        let found = self.scan(roots, matcher)?;
        Ok(self.filter_ignored(found, marker))
    }
}
