// CLI層 - コマンドライン引数の定義とコマンドの組み立て
// ユーザーインターフェースとアクションの橋渡し

pub mod args;
pub mod commands;

// 公開API
pub use args::*;
pub use commands::*;
