use super::FileSystem;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// ローカルファイルシステム実装
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            anyhow::bail!("Not a directory: {}", root.display());
        }

        let mut file_paths = Vec::new();

        // 各ディレクトリ内はファイルを先に、それぞれファイル名順で並べる
        let walker = WalkDir::new(root).sort_by(|a, b| {
            is_directory(a)
                .cmp(&is_directory(b))
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

        for entry in walker {
            let entry =
                entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;

            // シンボリックリンクはリンク先がディレクトリでなければファイル扱い
            if !is_directory(&entry) {
                file_paths.push(entry.into_path());
            }
        }

        Ok(file_paths)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to delete file: {}", path.display()))
    }
}

fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
