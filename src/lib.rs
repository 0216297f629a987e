pub mod autoformat;
pub mod cli;
pub mod config;
pub mod core;
pub mod file_scanner;
pub mod formatter;
pub mod process;
pub mod registry;
pub mod reporting;
pub mod storage;

pub use autoformat::{Autoformatter, SystemAutoformatter};
pub use config::AutoformatConfig;
pub use registry::{Command, CommandRegistry};
