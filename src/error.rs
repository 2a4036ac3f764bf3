use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaudoError {
    #[error("Uso: laudo-check <pasta> ({0})")]
    InvalidInvocation(String),

    #[error("Pasta não encontrada: {0}")]
    FolderNotFound(String),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LaudoError>;
