use thiserror::Error;

#[derive(Error, Debug)]
pub enum TecnicaError {
    #[error("Erro de configuracao: {0}")]
    Config(String),

    #[error("Arquivo nao encontrado: {0}")]
    FileNotFound(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de entrada interativa: {0}")]
    Prompt(String),

    #[error("Nenhum trecho informado. Use --leg, --file, --preset ou --interactive")]
    EmptyTrip,

    #[error(transparent)]
    Common(#[from] tecnica_common::Error),
}

pub type Result<T> = std::result::Result<T, TecnicaError>;
