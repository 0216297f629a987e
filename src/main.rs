use clap::Parser;
use engine_cmd::cli::{build_registry, AutoformatOptions, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=debug などで診断ログを有効化
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = AutoformatOptions {
        config_path: cli.config,
        summary: cli.summary,
        quiet: cli.quiet,
    };

    let registry = match build_registry(options) {
        Ok(registry) => registry,
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = registry.dispatch(cli.command.as_deref(), &mut std::io::stdout()) {
        eprintln!("❌ エラー: {}", error.detailed_message());
        std::process::exit(error.exit_code());
    }
}
