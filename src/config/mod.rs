// 自動整形の設定
//
// 全フィールドにデフォルト値があり、JSON設定ファイルでは変更したい項目のみ記述すればよい

use crate::core::ConfigError;
use crate::formatter::FormatterCandidate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 明示指定がない場合に読み込む設定ファイル名
pub const DEFAULT_CONFIG_FILE: &str = "engine_cmd.json";

/// 整形除外マーカーのデフォルト名
pub const DEFAULT_IGNORE_MARKER: &str = "_clang_format_ignore";

/// 自動整形アクションの設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoformatConfig {
    /// 走査するルートディレクトリ（記述順に走査）
    pub roots: Vec<PathBuf>,
    /// 整形対象の拡張子（ドットなし）
    pub source_extensions: Vec<String>,
    /// このファイルがあるディレクトリ直下は対象外
    pub ignore_marker: String,
    /// フォーマッタが残す一時ファイルの末尾
    pub temp_suffix: String,
    pub formatter: FormatterConfig,
}

/// フォーマッタ探索の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// 固定インストールパス（優先順）
    pub install_paths: Vec<PathBuf>,
    /// ベースパスを与える環境変数
    pub env_var: Option<String>,
    /// 環境変数の値に連結するパス
    pub env_suffix: PathBuf,
    /// PATHから探すプログラム名
    pub program: Option<String>,
    /// インプレース編集フラグ
    pub in_place_flag: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            install_paths: vec![
                PathBuf::from(r"C:\Program Files (x86)\LLVM\bin\clang-format.exe"),
                PathBuf::from(r"C:\Program Files\LLVM\bin\clang-format.exe"),
            ],
            env_var: Some("LLVM_ROOT".to_string()),
            env_suffix: PathBuf::from("bin").join(format!(
                "clang-format{}",
                std::env::consts::EXE_SUFFIX
            )),
            program: Some("clang-format".to_string()),
            in_place_flag: "-i".to_string(),
        }
    }
}

impl Default for AutoformatConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("src"), PathBuf::from("apps")],
            source_extensions: vec!["cpp".to_string(), "h".to_string(), "inl".to_string()],
            ignore_marker: DEFAULT_IGNORE_MARKER.to_string(),
            temp_suffix: ".TMP".to_string(),
            formatter: FormatterConfig::default(),
        }
    }
}

impl AutoformatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ignore_marker(mut self, marker: impl Into<String>) -> Self {
        self.ignore_marker = marker.into();
        self
    }

    pub fn with_formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    /// JSONファイルから設定を読み込む
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// 明示指定 → カレントの`engine_cmd.json` → デフォルトの順で設定を決定する
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roots.is_empty() {
            return Err(ConfigError::invalid("roots", "at least one root is required"));
        }
        if self.source_extensions.is_empty() {
            return Err(ConfigError::invalid(
                "source_extensions",
                "at least one extension is required",
            ));
        }
        if let Some(ext) = self
            .source_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(ConfigError::invalid(
                "source_extensions",
                format!("invalid extension {ext:?} (write without the leading dot)"),
            ));
        }
        if self.ignore_marker.is_empty() || self.ignore_marker.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "ignore_marker",
                "must be a plain file name",
            ));
        }
        if self.temp_suffix.is_empty() {
            return Err(ConfigError::invalid("temp_suffix", "must not be empty"));
        }
        Ok(())
    }

    /// フォーマッタ候補を優先順に並べる
    pub fn candidates(&self) -> Vec<FormatterCandidate> {
        let formatter = &self.formatter;
        let mut candidates: Vec<FormatterCandidate> = formatter
            .install_paths
            .iter()
            .cloned()
            .map(FormatterCandidate::InstallPath)
            .collect();

        if let Some(var) = &formatter.env_var {
            candidates.push(FormatterCandidate::EnvRelative {
                var: var.clone(),
                suffix: formatter.env_suffix.clone(),
            });
        }

        if let Some(program) = &formatter.program {
            candidates.push(FormatterCandidate::SearchPath(program.clone()));
        }

        candidates
    }
}
