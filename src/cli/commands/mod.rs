pub mod autoformat;

pub use autoformat::*;

use crate::core::RegistryError;
use crate::registry::{Command, CommandRegistry};

/// 起動時にコマンド表を構築する
pub fn build_registry(options: AutoformatOptions) -> Result<CommandRegistry, RegistryError> {
    CommandRegistry::new().with_command(Command::new(
        "autoformat",
        "Run autoformatting script",
        move || execute_autoformat(&options).map(|_| ()),
    ))
}
