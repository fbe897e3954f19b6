//! ローカル画像のデコード（プレビュー生成用）

use async_trait::async_trait;
use image_compare_common::{Candidate, DecodeError, ImageDecoder, Placeholder, Preview};
use std::path::{Path, PathBuf};

use crate::loader;

/// デコード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    /// EXIFの撮影日時
    pub taken_at: Option<String>,
}

/// `image` クレートでデコードするデコーダ
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalDecoder;

/// 画像を実際にデコードしてサイズを得る
pub fn decode_file(path: &Path) -> Result<ImagePreview, DecodeError> {
    let image = image::ImageReader::open(path)
        .map_err(|e| DecodeError::new(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| DecodeError::new(e.to_string()))?
        .decode()
        .map_err(|e| DecodeError::new(e.to_string()))?;

    Ok(ImagePreview {
        width: image.width(),
        height: image.height(),
        taken_at: loader::extract_date(path).ok(),
    })
}

#[async_trait(?Send)]
impl ImageDecoder<PathBuf> for LocalDecoder {
    type Output = ImagePreview;

    async fn decode(&self, candidate: &Candidate<PathBuf>) -> Result<ImagePreview, DecodeError> {
        let path = candidate.payload.clone();
        tokio::task::spawn_blocking(move || decode_file(&path))
            .await
            .map_err(|e| DecodeError::new(e.to_string()))?
    }
}

/// プレビューの説明文
pub fn describe(preview: &Preview<ImagePreview>) -> String {
    match preview {
        Preview::Image(image) => match &image.taken_at {
            Some(date) => format!("{}x{} (撮影日時: {})", image.width, image.height, date),
            None => format!("{}x{}", image.width, image.height),
        },
        Preview::Placeholder(Placeholder { icon, name, note }) => {
            format!("{} {} - {}", icon, name, note)
        }
    }
}
