// フォーマッタ実行ファイルの探索

use crate::process::Environment;
use crate::storage::FileSystem;
use std::fmt;
use std::path::{Path, PathBuf};

/// フォーマッタの探索候補
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterCandidate {
    /// 固定のインストールパス
    InstallPath(PathBuf),
    /// 環境変数の値 + 固定サフィックス
    EnvRelative { var: String, suffix: PathBuf },
    /// PATH上のプログラム名
    SearchPath(String),
}

impl fmt::Display for FormatterCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstallPath(path) => write!(f, "{}", path.display()),
            Self::EnvRelative { var, suffix } => write!(f, "${var}/{}", suffix.display()),
            Self::SearchPath(program) => write!(f, "{program} (PATH)"),
        }
    }
}

/// 候補を優先順に調べ、最初に存在したものを採用する
pub struct FormatterLocator<'a, F: FileSystem, E: Environment> {
    fs: &'a F,
    env: &'a E,
}

impl<'a, F: FileSystem, E: Environment> FormatterLocator<'a, F, E> {
    pub fn new(fs: &'a F, env: &'a E) -> Self {
        Self { fs, env }
    }

    pub fn resolve(&self, candidates: &[FormatterCandidate]) -> Option<PathBuf> {
        candidates.iter().find_map(|candidate| {
            let found = self.probe(candidate);
            tracing::debug!(%candidate, found = found.is_some(), "probed formatter candidate");
            found
        })
    }

    fn probe(&self, candidate: &FormatterCandidate) -> Option<PathBuf> {
        match candidate {
            FormatterCandidate::InstallPath(path) => self.existing(path.clone()),
            FormatterCandidate::EnvRelative { var, suffix } => {
                let base = self.env.var_os(var).filter(|value| !value.is_empty())?;
                self.existing(PathBuf::from(base).join(suffix))
            }
            FormatterCandidate::SearchPath(program) => {
                let file_name = executable_name(program);
                self.env
                    .search_paths()
                    .into_iter()
                    .find_map(|dir| self.existing(dir.join(&file_name)))
            }
        }
    }

    fn existing(&self, path: PathBuf) -> Option<PathBuf> {
        (self.fs.exists(&path) && !self.fs.is_dir(&path)).then_some(path)
    }
}

/// プラットフォームの実行ファイル拡張子を補う
fn executable_name(program: &str) -> String {
    let suffix = std::env::consts::EXE_SUFFIX;
    if suffix.is_empty() || Path::new(program).extension().is_some() {
        program.to_string()
    } else {
        format!("{program}{suffix}")
    }
}
