// コマンドレジストリ
//
// 起動時に一度だけ構築し、以降は変更しない。ディスパッチャには参照で渡す。

use crate::core::{DispatchError, DispatchOutcome, RegistryError};
use anyhow::Result;
use std::fmt;
use std::io::Write;

type Action = Box<dyn Fn() -> Result<()>>;

/// 名前・説明・アクションの組
pub struct Command {
    name: String,
    description: String,
    action: Action,
}

impl Command {
    pub fn new<A>(name: impl Into<String>, description: impl Into<String>, action: A) -> Self
    where
        A: Fn() -> Result<()> + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn execute(&self) -> Result<()> {
        (self.action)()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// 登録順を保持するコマンド表
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) -> Result<(), RegistryError> {
        if command.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.lookup(&command.name).is_some() {
            return Err(RegistryError::DuplicateCommand { name: command.name });
        }
        self.commands.push(command);
        Ok(())
    }

    /// ビルダー形式の登録
    pub fn with_command(mut self, command: Command) -> Result<Self, RegistryError> {
        self.register(command)?;
        Ok(self)
    }

    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name.clone()).collect()
    }

    /// 登録済みコマンドの一覧を書き出す
    pub fn write_listing<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Available commands:")?;
        for command in &self.commands {
            writeln!(out, " - {} : {}", command.name, command.description)?;
        }
        Ok(())
    }

    /// 引数なしなら一覧表示、名前が一致すればそのアクションを実行する
    pub fn dispatch<W: Write + ?Sized>(
        &self,
        name: Option<&str>,
        out: &mut W,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(name) = name else {
            self.write_listing(out)?;
            return Ok(DispatchOutcome::Listed);
        };

        let command = self
            .lookup(name)
            .ok_or_else(|| DispatchError::unknown_command(name, self.names()))?;

        writeln!(out, "Running {} ...", command.name)?;
        out.flush()?;

        tracing::debug!(command = %command.name, "executing command");
        command
            .execute()
            .map_err(|e| DispatchError::action_failed(&command.name, e))?;

        Ok(DispatchOutcome::Executed(command.name.clone()))
    }
}
