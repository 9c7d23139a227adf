//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Selecione um modo de locomocao antes de adicionar um trecho")]
    MissingMode,

    #[error("Informe uma distancia valida (> 0 km): {0}")]
    InvalidDistance(f64),

    #[error("Nenhum trecho para limpar")]
    NoLegs,

    #[error("Modo de locomocao desconhecido: {0} (bicicleta/carro/onibus/caminhao)")]
    UnknownMode(String),

    #[error("Rota pre-definida desconhecida: {0}")]
    UnknownPreset(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
