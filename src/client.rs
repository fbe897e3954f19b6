//! 類似度スコアAPIクライアント（reqwest）

use async_trait::async_trait;
use image_compare_common::api;
use image_compare_common::{Candidate, CompareError, ComparisonRequest, ScoringService};
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CompareCliError, Result};

/// タイムアウト時のメッセージ
pub const TIMEOUT_MESSAGE: &str = "採点APIが時間内に応答しませんでした";

/// HTTP経由の採点API
#[derive(Debug, Clone)]
pub struct HttpScoringService {
    client: reqwest::Client,
    url: String,
}

impl HttpScoringService {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompareCliError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url: api::compare_url(endpoint),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// 画像1枚分のmultipartパートを作る
async fn image_part(candidate: &Candidate<PathBuf>) -> std::result::Result<Part, CompareError> {
    let bytes = tokio::fs::read(&candidate.payload).await.map_err(|e| {
        CompareError::Transport(format!("{} を読み込めません: {}", candidate.name(), e))
    })?;

    let mime_type = match candidate.meta.mime_type.as_str() {
        "" => "application/octet-stream",
        mime_type => mime_type,
    };
    Part::bytes(bytes)
        .file_name(candidate.meta.name.clone())
        .mime_str(mime_type)
        .map_err(|e| api::transport_error(&e.to_string()))
}

fn map_reqwest_error(e: reqwest::Error) -> CompareError {
    if e.is_timeout() {
        CompareError::Service(TIMEOUT_MESSAGE.to_string())
    } else {
        api::transport_error(&e.to_string())
    }
}

#[async_trait(?Send)]
impl ScoringService<PathBuf> for HttpScoringService {
    async fn compare(&self, request: &ComparisonRequest<PathBuf>) -> std::result::Result<f64, CompareError> {
        let form = Form::new()
            .part("image1", image_part(&request.image1).await?)
            .part("image2", image_part(&request.image2).await?);

        tracing::debug!(url = %self.url, "sending compare request");
        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        tracing::debug!(status = status.as_u16(), "compare response received");

        if status.is_success() {
            api::parse_success(&body)
        } else {
            Err(api::parse_error(&body))
        }
    }
}
