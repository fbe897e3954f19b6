//! ファイル検証
//!
//! 1. 形式チェック（MIMEタイプ、HEIC/HEIFは拡張子）
//! 2. サイズチェック（10MiB以下）

use crate::error::ValidationError;
use crate::types::FileMeta;

/// 受け付けるMIMEタイプ
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// 最大ファイルサイズ（10MiB）
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// ファイルを検証する
///
/// HEIC/HEIFはプラットフォームによってMIMEタイプが空や不正確になるため
/// 拡張子で判定する。サイズは形式チェック通過後も必ず評価する。
pub fn validate(meta: &FileMeta) -> Result<(), ValidationError> {
    if !is_supported_format(meta) {
        return Err(ValidationError::UnsupportedFormat);
    }

    if meta.size_bytes > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge);
    }

    Ok(())
}

/// 対応形式かどうか
pub fn is_supported_format(meta: &FileMeta) -> bool {
    ALLOWED_MIME_TYPES.contains(&meta.mime_type.as_str()) || meta.is_heif()
}
