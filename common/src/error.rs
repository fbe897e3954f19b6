//! エラー型定義

use thiserror::Error;

/// ファイル検証エラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("対応している画像形式: JPEG, PNG, GIF, WebP, HEIC")]
    UnsupportedFormat,

    #[error("ファイルサイズは10MB以下にしてください")]
    TooLarge,
}

impl ValidationError {
    /// ログ・テスト用の短い理由
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::UnsupportedFormat => "unsupported format",
            ValidationError::TooLarge => "file too large",
        }
    }
}

/// プレビュー生成エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("画像の読み込みに失敗しました")]
pub struct DecodeError {
    /// デコーダからの詳細（ログ用、ユーザーには表示しない）
    pub detail: String,
}

impl DecodeError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

/// 比較リクエストのエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("2つの画像を選択してください")]
    NotReady,

    #[error("比較処理が実行中です")]
    AlreadyInFlight,

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Service(String),
}

impl CompareError {
    /// ユーザーに通知すべきエラーか（内部ガードは通知しない）
    pub fn is_user_facing(&self) -> bool {
        matches!(self, CompareError::Transport(_) | CompareError::Service(_))
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_reason() {
        assert_eq!(ValidationError::UnsupportedFormat.reason(), "unsupported format");
        assert_eq!(ValidationError::TooLarge.reason(), "file too large");
    }

    #[test]
    fn test_validation_display() {
        let display = format!("{}", ValidationError::TooLarge);
        assert!(display.contains("10MB"));
    }

    #[test]
    fn test_decode_error_hides_detail() {
        let error = DecodeError::new("unexpected EOF");
        assert_eq!(format!("{}", error), "画像の読み込みに失敗しました");
        assert_eq!(error.detail, "unexpected EOF");
    }

    #[test]
    fn test_compare_error_user_facing() {
        assert!(!CompareError::NotReady.is_user_facing());
        assert!(!CompareError::AlreadyInFlight.is_user_facing());
        assert!(CompareError::Transport("接続失敗".into()).is_user_facing());
        assert!(CompareError::Service("画像ファイルを開けませんでした".into()).is_user_facing());
    }

    #[test]
    fn test_service_message_passthrough() {
        let error = CompareError::Service("画像ファイルを開けませんでした".into());
        assert_eq!(format!("{}", error), "画像ファイルを開けませんでした");
    }

    #[test]
    fn test_error_from_validation_is_transparent() {
        let error: Error = ValidationError::UnsupportedFormat.into();
        assert!(matches!(error, Error::Validation(_)));
        assert!(format!("{}", error).contains("JPEG"));
    }
}
