use clap::Parser;
use laudo_check::{cli, console, error, evaluator};
use cli::Cli;
use error::LaudoError;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<ExitCode> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if cli::is_informational(&err) => err.exit(),
        Err(err) => {
            eprintln!("{}", LaudoError::from(err));
            return Ok(ExitCode::from(2));
        }
    };

    console::print_start(&cli.folder);

    match evaluator::check_folder(&cli.folder) {
        Ok(check) => console::print_check(&check),
        // フォルダ不在も正常終了扱い
        Err(err) => console::print_error(&err),
    }

    Ok(ExitCode::SUCCESS)
}
