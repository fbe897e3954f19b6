//! 類似度スコアAPIの通信仕様
//!
//! `POST /api/compare/images` に multipart (`image1`, `image2`) を送信し、
//! 成功時は `{"similarity_score": number}`、失敗時は `{"detail": string}` を受け取る。

use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// 比較APIのパス
pub const COMPARE_PATH: &str = "/api/compare/images";

/// `detail` がない場合のメッセージ
pub const GENERIC_API_ERROR: &str = "APIエラーが発生しました";

/// 通信失敗などメッセージがない場合のメッセージ
pub const GENERIC_COMPARE_ERROR: &str = "画像比較中にエラーが発生しました";

/// 成功レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub similarity_score: f64,
}

/// エラーレスポンス
///
/// FastAPIの入力検証エラーでは `detail` が配列になるため文字列以外も受け付ける
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

/// ベースURLから比較APIのURLを組み立てる
///
/// 空文字の場合は同一オリジンの相対パスになる
pub fn compare_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), COMPARE_PATH)
}

/// 成功レスポンスからスコアを取り出す
pub fn parse_success(body: &str) -> Result<f64, CompareError> {
    let response: CompareResponse = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "similarity_score missing in response");
        CompareError::Service(GENERIC_API_ERROR.to_string())
    })?;
    score_from(response)
}

/// デシリアライズ済みレスポンスからスコアを取り出す
pub fn score_from(response: CompareResponse) -> Result<f64, CompareError> {
    if response.similarity_score.is_finite() {
        Ok(response.similarity_score)
    } else {
        Err(CompareError::Service(GENERIC_API_ERROR.to_string()))
    }
}

/// エラーレスポンスからエラーを組み立てる
pub fn parse_error(body: &str) -> CompareError {
    let response: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
    service_error(&response)
}

pub fn service_error(response: &ErrorResponse) -> CompareError {
    CompareError::Service(
        response
            .message()
            .unwrap_or(GENERIC_API_ERROR)
            .to_string(),
    )
}

/// 通信エラーを組み立てる
pub fn transport_error(message: &str) -> CompareError {
    if message.trim().is_empty() {
        CompareError::Transport(GENERIC_COMPARE_ERROR.to_string())
    } else {
        CompareError::Transport(message.to_string())
    }
}
