//! ローカル画像ファイルの読み込み
//!
//! ブラウザの `File` と同様、メタデータだけを先に取得し
//! 本体は送信時・デコード時に読む

mod exif;

pub use exif::extract_date;

use crate::error::{CompareCliError, Result};
use image_compare_common::{validate, Candidate, FileMeta};
use std::path::{Path, PathBuf};

/// ローカル画像（ペイロードはファイルパス）
pub type LocalImage = Candidate<PathBuf>;

/// 形式を判定できない場合のMIMEタイプ
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを推定する
pub fn guess_mime_type(path: &Path) -> &'static str {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// ファイルのメタデータを読む
pub fn read_meta(path: &Path) -> Result<FileMeta> {
    if !path.is_file() {
        return Err(CompareCliError::FileNotFound(path.display().to_string()));
    }

    let size_bytes = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(FileMeta::new(name, guess_mime_type(path), size_bytes))
}

/// 比較対象として読み込む（検証はコントローラで行う）
pub fn load_candidate(path: &Path) -> Result<LocalImage> {
    let meta = read_meta(path)?;
    Ok(Candidate::new(meta, path.to_path_buf()))
}

/// 読み込みと検証をまとめて行う
pub fn load_validated(path: &Path) -> Result<LocalImage> {
    let candidate = load_candidate(path)?;
    validate(&candidate.meta).map_err(|source| CompareCliError::Rejected {
        file: candidate.meta.name.clone(),
        source,
    })?;
    Ok(candidate)
}
