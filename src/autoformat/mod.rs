// 自動整形アクション
//
// 1. ルート以下のソースファイルを走査し、除外マーカーのあるディレクトリを除く
// 2. フォーマッタを探索し、見つかれば各ファイルをインプレースで整形する
// 3. フォーマッタが残した一時ファイルを同じ規則で探して削除する
//
// 3はフォーマッタの有無に関係なく実行する。

use crate::config::AutoformatConfig;
use crate::core::{AutoformatError, AutoformatOutcome, AutoformatResult, FormatOutcome};
use crate::file_scanner::{FileMatcher, FileScanner};
use crate::formatter::FormatterLocator;
use crate::process::local::{SystemEnvironment, SystemProcessRunner};
use crate::process::{Environment, ProcessRunner};
use crate::reporting::{ConsoleProgressReporter, ProgressReporter};
use crate::storage::local::LocalFileSystem;
use crate::storage::FileSystem;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 実環境で動かす構成
pub type SystemAutoformatter =
    Autoformatter<LocalFileSystem, SystemEnvironment, SystemProcessRunner, ConsoleProgressReporter>;

/// 依存関係を直接所有する自動整形アクション（コンストラクタインジェクション）
pub struct Autoformatter<F, E, P, R>
where
    F: FileSystem,
    E: Environment,
    P: ProcessRunner,
    R: ProgressReporter,
{
    config: AutoformatConfig,
    fs: F,
    env: E,
    runner: P,
    reporter: R,
}

impl SystemAutoformatter {
    pub fn system(config: AutoformatConfig, reporter: ConsoleProgressReporter) -> Self {
        Self::new(
            config,
            LocalFileSystem::new(),
            SystemEnvironment::new(),
            SystemProcessRunner::new(),
            reporter,
        )
    }
}

impl<F, E, P, R> Autoformatter<F, E, P, R>
where
    F: FileSystem,
    E: Environment,
    P: ProcessRunner,
    R: ProgressReporter,
{
    pub fn new(config: AutoformatConfig, fs: F, env: E, runner: P, reporter: R) -> Self {
        Self {
            config,
            fs,
            env,
            runner,
            reporter,
        }
    }

    pub fn run(&self) -> AutoformatResult<AutoformatOutcome> {
        for root in &self.config.roots {
            if !self.fs.exists(root) {
                self.reporter.report_missing_root(root);
            }
        }

        let sources = self.find_sources()?;
        tracing::debug!(count = sources.len(), "source files after filtering");

        let formatting = match self.locate_formatter() {
            Some(formatter) => {
                self.reporter.report_formatter_found(&formatter);
                self.format_files(&formatter, &sources)?
            }
            None => {
                self.reporter.report_formatter_missing();
                FormatOutcome::Skipped
            }
        };

        let temp_files = self.find_temp_files()?;
        let removed_temp_files = self.remove_temp_files(temp_files)?;

        let outcome = AutoformatOutcome {
            formatting,
            removed_temp_files,
        };
        self.reporter.report_completed(&outcome);

        Ok(outcome)
    }

    /// 整形対象のソースファイル（除外済み、発見順）
    pub fn find_sources(&self) -> AutoformatResult<Vec<PathBuf>> {
        let matcher = FileMatcher::source(self.config.source_extensions.iter().cloned());
        self.scan(&matcher)
    }

    /// 削除対象の一時ファイル（除外済み、発見順）
    pub fn find_temp_files(&self) -> AutoformatResult<Vec<PathBuf>> {
        let matcher = FileMatcher::temp(
            self.config.source_extensions.iter().cloned(),
            self.config.temp_suffix.clone(),
        );
        self.scan(&matcher)
    }

    fn scan(&self, matcher: &FileMatcher) -> AutoformatResult<Vec<PathBuf>> {
        FileScanner::new(&self.fs).scan_filtered(
            &self.config.roots,
            matcher,
            &self.config.ignore_marker,
        )
    }

    pub fn locate_formatter(&self) -> Option<PathBuf> {
        FormatterLocator::new(&self.fs, &self.env).resolve(&self.config.candidates())
    }

    /// 1ファイルずつ順にフォーマッタを実行する
    ///
    /// 非ゼロ終了は記録して続行し、起動失敗は即座にエラーとする
    pub fn format_files(
        &self,
        formatter: &Path,
        files: &[PathBuf],
    ) -> AutoformatResult<FormatOutcome> {
        let mut failed = Vec::new();

        for file in files {
            self.reporter.report_formatting(file);

            let args = [
                OsString::from(&self.config.formatter.in_place_flag),
                file.as_os_str().to_os_string(),
            ];
            let exit = self
                .runner
                .run(formatter, &args)
                .map_err(|e| AutoformatError::spawn(formatter, file, e))?;

            if !exit.success {
                self.reporter.report_format_failed(file, exit.code);
                failed.push(file.clone());
            }
        }

        Ok(FormatOutcome::Ran {
            formatter: formatter.to_path_buf(),
            formatted: files.len(),
            failed,
        })
    }

    /// 一時ファイルを全て削除する（最初の失敗で中断）
    pub fn remove_temp_files(&self, files: Vec<PathBuf>) -> AutoformatResult<Vec<PathBuf>> {
        let mut removed = Vec::with_capacity(files.len());

        for file in files {
            self.fs
                .remove_file(&file)
                .map_err(|e| AutoformatError::removal(&file, e))?;
            self.reporter.report_removed(&file);
            removed.push(file);
        }

        Ok(removed)
    }
}
