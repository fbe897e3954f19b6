//! CLIの比較セッション
//!
//! ブラウザ版と同じ [`CompareController`] を使い、
//! ファイル選択 → プレビュー → 比較 → 結果表示 を実行する

use image_compare_common::{
    CompareController, CompareError, ComparisonResult, InputEvent, ScoringService, Slot,
};
use std::path::{Path, PathBuf};

use crate::decoder::{ImagePreview, LocalDecoder};
use crate::display;
use crate::error::{CompareCliError, Result};
use crate::loader;

pub type LocalController = CompareController<PathBuf, ImagePreview>;

/// ローカル画像の比較セッション
pub struct Session<S> {
    controller: LocalController,
    service: S,
    decoder: LocalDecoder,
    verbose: bool,
}

impl<S: ScoringService<PathBuf>> Session<S> {
    pub fn new(service: S, verbose: bool) -> Self {
        Self {
            controller: LocalController::new(),
            service,
            decoder: LocalDecoder,
            verbose,
        }
    }

    pub fn controller(&self) -> &LocalController {
        &self.controller
    }

    /// ファイルを枠に割り当て、プレビューを生成する
    ///
    /// プレビューに失敗してもファイルは枠に残る
    pub async fn select(&self, slot: Slot, path: &Path) -> Result<()> {
        let candidate = loader::load_candidate(path)?;
        let file = candidate.meta.name.clone();

        self.controller
            .handle_input(InputEvent::PickerChange {
                slot,
                files: vec![candidate],
            })
            .map_err(|source| CompareCliError::Rejected { file, source })?;

        if let Err(e) = self.controller.load_preview(slot, &self.decoder).await {
            eprintln!("⚠ {}: {}", slot.label(), e);
            if self.verbose {
                eprintln!("  詳細: {}", e.detail);
            }
        }
        Ok(())
    }

    /// 比較を実行する
    pub async fn compare(&self) -> std::result::Result<ComparisonResult, CompareError> {
        let pb = display::spinner("類似度を計算中...");
        let outcome = self.controller.compare(&self.service).await;
        pb.finish_and_clear();
        outcome
    }

    /// 結果を表示する（アニメーションあり/なし）
    pub async fn present(&self, animate: bool) {
        if animate {
            self.controller
                .animate_result(tokio::time::sleep, display::print_score_frame)
                .await;
        }

        if let Some(presentation) = self.controller.view().result {
            display::print_presentation(&presentation);
        }
    }

    pub fn reset(&self) {
        self.controller.reset();
    }

    /// 両方の枠のファイル名
    pub fn file_names(&self) -> [String; 2] {
        let view = self.controller.view();
        Slot::ALL.map(|slot| view.slot(slot).file_name.clone().unwrap_or_default())
    }
}

/// 内部ガードのエラーはユーザーに通知しない
pub fn report_compare_error(e: &CompareError) {
    if e.is_user_facing() {
        eprintln!("エラー: {}", e);
    } else {
        tracing::warn!(error = %e, "compare guard rejected request");
    }
}

