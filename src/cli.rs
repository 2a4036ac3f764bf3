use crate::error::LaudoError;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "laudo-check", version)]
#[command(about = "Verifica se uma pasta de fotos atende às exigências do laudo", long_about = None)]
pub struct Cli {
    /// Pasta com as fotos do caso
    #[arg(required = true)]
    pub folder: PathBuf,
}

/// ヘルプ・バージョン表示か（エラー扱いしない）
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

impl From<clap::Error> for LaudoError {
    fn from(err: clap::Error) -> Self {
        let reason = err.kind().as_str().unwrap_or("argumentos inválidos");
        LaudoError::InvalidInvocation(reason.to_string())
    }
}
