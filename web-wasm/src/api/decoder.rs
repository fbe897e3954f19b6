//! ブラウザのFileからの候補作成とData URLデコード

use async_trait::async_trait;
use gloo::file::futures::read_as_data_url;
use image_compare_common::{Candidate, DecodeError, FileMeta, ImageDecoder};
use std::sync::Arc;
use web_sys::{File, FileList};

/// FileReaderでData URLを作るデコーダ
///
/// 再描画のたびに複製されるため、Data URLは共有文字列で持つ
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUrlDecoder;

#[async_trait(?Send)]
impl ImageDecoder<File> for DataUrlDecoder {
    type Output = Arc<str>;

    async fn decode(&self, candidate: &Candidate<File>) -> Result<Arc<str>, DecodeError> {
        let file = gloo::file::File::from(candidate.payload.clone());
        read_as_data_url(&file)
            .await
            .map(Arc::from)
            .map_err(|e| DecodeError::new(e.to_string()))
    }
}

pub fn candidate_from_file(file: File) -> Candidate<File> {
    let meta = FileMeta::new(file.name(), file.type_(), file.size() as u64);
    Candidate::new(meta, file)
}

/// FileListを候補の列に変換する（先頭のみ使うかはコントローラ側で判断）
pub fn candidates_from_list(files: Option<FileList>) -> Vec<Candidate<File>> {
    files
        .map(|files| {
            (0..files.length())
                .filter_map(|i| files.get(i))
                .map(candidate_from_file)
                .collect()
        })
        .unwrap_or_default()
}
