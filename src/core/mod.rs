// コアレイヤー - エラー型と結果型の定義
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{AutoformatError, AutoformatResult, ConfigError, DispatchError, RegistryError};
pub use types::{AutoformatOutcome, DispatchOutcome, FormatOutcome, RunSummary};
