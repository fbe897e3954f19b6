//! 比較ワークフローの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Slot: 2つのアップロード枠
//! - FileMeta / Candidate: 選択されたファイル
//! - RequestStatus: 比較リクエストの状態

use serde::{Deserialize, Serialize};
use std::fmt;

/// アップロード枠（常に2つ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Image1,
    Image2,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Image1, Slot::Image2];

    /// multipartのフィールド名
    pub fn field_name(&self) -> &'static str {
        match self {
            Slot::Image1 => "image1",
            Slot::Image2 => "image2",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Slot::Image1 => 0,
            Slot::Image2 => 1,
        }
    }

    /// 画面表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Image1 => "画像1",
            Slot::Image2 => "画像2",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// ファイルのメタデータ（検証対象）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    /// 申告されたMIMEタイプ（環境によっては空文字）
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// HEIC/HEIFかどうか（拡張子で判定）
    pub fn is_heif(&self) -> bool {
        let lower = self.name.to_lowercase();
        HEIF_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }
}

/// MIMEタイプが信用できない形式の拡張子
pub const HEIF_EXTENSIONS: &[&str] = &[".heic", ".heif"];

/// 選択されたファイル
///
/// `P` はプラットフォームごとのペイロード（ブラウザでは `web_sys::File`、
/// CLIではメモリ上のバイト列）
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<P> {
    pub meta: FileMeta,
    pub payload: P,
}

impl<P> Candidate<P> {
    pub fn new(meta: FileMeta, payload: P) -> Self {
        Self { meta, payload }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }
}

/// 比較リクエスト（両方の枠が埋まっている時のみ構築可能）
#[derive(Debug, Clone)]
pub struct ComparisonRequest<P> {
    pub image1: Candidate<P>,
    pub image2: Candidate<P>,
}

/// 比較リクエストの状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::InFlight => "in-flight",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        }
    }
}
