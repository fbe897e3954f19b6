use image_compare_common::{CompareError, DecodeError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareCliError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{file}: {source}")]
    Rejected {
        file: String,
        #[source]
        source: ValidationError,
    },

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] image_compare_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CompareError> for CompareCliError {
    fn from(e: CompareError) -> Self {
        CompareCliError::Common(e.into())
    }
}

impl From<DecodeError> for CompareCliError {
    fn from(e: DecodeError) -> Self {
        CompareCliError::Common(e.into())
    }
}

impl From<dialoguer::Error> for CompareCliError {
    fn from(e: dialoguer::Error) -> Self {
        CompareCliError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompareCliError>;
