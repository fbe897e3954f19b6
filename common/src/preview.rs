//! プレビュー生成
//!
//! HEIC/HEIFは表示側でデコードできない前提でプレースホルダーを返す。
//! それ以外はデコーダで非同期にデコードし、枠ごとの世代番号で
//! 古い完了通知を破棄する。

use async_trait::async_trait;
use std::cell::Cell;

use crate::error::DecodeError;
use crate::types::{Candidate, FileMeta, Slot};

/// HEIC用プレースホルダーのアイコン
pub const PLACEHOLDER_ICON: &str = "📷";
/// HEIC用プレースホルダーの注記
pub const PLACEHOLDER_NOTE: &str = "HEIC画像が選択されました";

/// デコードできない形式の代替表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub name: String,
    pub note: &'static str,
}

impl Placeholder {
    pub fn for_file(name: &str) -> Self {
        Self {
            icon: PLACEHOLDER_ICON,
            name: name.to_string(),
            note: PLACEHOLDER_NOTE,
        }
    }
}

/// プレビュー
///
/// `I` はデコード結果の表現（ブラウザではData URL、CLIでは画像サイズ）
#[derive(Debug, Clone, PartialEq)]
pub enum Preview<I> {
    Image(I),
    Placeholder(Placeholder),
}

impl<I> Preview<I> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Preview::Placeholder(_))
    }
}

/// プレビューの生成方針
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewPlan {
    Decode,
    Placeholder(Placeholder),
}

/// ファイルのプレビュー方針を決める
pub fn plan(meta: &FileMeta) -> PreviewPlan {
    if meta.is_heif() {
        PreviewPlan::Placeholder(Placeholder::for_file(&meta.name))
    } else {
        PreviewPlan::Decode
    }
}

/// 画像デコーダ（プラットフォームごとに実装）
#[async_trait(?Send)]
pub trait ImageDecoder<P> {
    type Output;

    async fn decode(&self, candidate: &Candidate<P>) -> Result<Self::Output, DecodeError>;
}

/// プレビュー生成の結果
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome<I> {
    Ready(Preview<I>),
    Failed(DecodeError),
    /// より新しいプレビュー生成が開始されたため破棄
    Superseded,
}

/// プレビュー生成の受付票
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    pub slot: Slot,
    generation: u64,
}

/// 枠ごとの世代番号を管理するプレビュー生成器
#[derive(Debug, Default)]
pub struct PreviewRenderer {
    generations: [Cell<u64>; 2],
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい世代を開始する（それ以前の受付票は無効になる）
    pub fn begin(&self, slot: Slot) -> PreviewTicket {
        let counter = &self.generations[slot.index()];
        counter.set(counter.get() + 1);
        PreviewTicket {
            slot,
            generation: counter.get(),
        }
    }

    pub fn is_current(&self, ticket: &PreviewTicket) -> bool {
        self.generations[ticket.slot.index()].get() == ticket.generation
    }

    /// 実行中のプレビュー生成をすべて無効にする
    pub fn invalidate_all(&self) {
        for slot in Slot::ALL {
            self.begin(slot);
        }
    }

    /// 新しい世代でプレビューを生成する
    pub async fn render<P, D>(
        &self,
        slot: Slot,
        candidate: &Candidate<P>,
        decoder: &D,
    ) -> RenderOutcome<D::Output>
    where
        D: ImageDecoder<P> + ?Sized,
    {
        self.render_ticket(self.begin(slot), candidate, decoder).await
    }

    /// 発行済みの受付票でプレビューを生成する
    ///
    /// 受付票が発行後に無効化されていれば、デコード前後どちらでも破棄する
    pub async fn render_ticket<P, D>(
        &self,
        ticket: PreviewTicket,
        candidate: &Candidate<P>,
        decoder: &D,
    ) -> RenderOutcome<D::Output>
    where
        D: ImageDecoder<P> + ?Sized,
    {
        let slot = ticket.slot;
        if !self.is_current(&ticket) {
            return RenderOutcome::Superseded;
        }

        if let PreviewPlan::Placeholder(placeholder) = plan(&candidate.meta) {
            return RenderOutcome::Ready(Preview::Placeholder(placeholder));
        }

        let decoded = decoder.decode(candidate).await;

        if !self.is_current(&ticket) {
            tracing::debug!(slot = %slot, file = candidate.name(), "stale preview discarded");
            return RenderOutcome::Superseded;
        }

        match decoded {
            Ok(image) => RenderOutcome::Ready(Preview::Image(image)),
            Err(e) => {
                tracing::warn!(slot = %slot, file = candidate.name(), detail = %e.detail, "preview decode failed");
                RenderOutcome::Failed(e)
            }
        }
    }
}
