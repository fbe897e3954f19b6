//! 2つのアップロード枠の選択状態

use crate::types::{Candidate, ComparisonRequest, Slot};

/// 選択状態
///
/// 枠ごとに最大1ファイル。同じ枠への再割り当ては置き換え。
#[derive(Debug, Clone)]
pub struct SelectionStore<P> {
    slots: [Option<Candidate<P>>; 2],
}

impl<P> Default for SelectionStore<P> {
    fn default() -> Self {
        Self { slots: [None, None] }
    }
}

impl<P> SelectionStore<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 検証済みのファイルを枠に割り当てる（既存のファイルは置き換え）
    pub fn assign(&mut self, slot: Slot, candidate: Candidate<P>) -> Option<Candidate<P>> {
        self.slots[slot.index()].replace(candidate)
    }

    pub fn clear(&mut self, slot: Slot) -> Option<Candidate<P>> {
        self.slots[slot.index()].take()
    }

    pub fn clear_all(&mut self) {
        for slot in Slot::ALL {
            self.clear(slot);
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&Candidate<P>> {
        self.slots[slot.index()].as_ref()
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// 両方の枠が埋まっているか（毎回占有状態から計算する）
    pub fn is_ready(&self) -> bool {
        Slot::ALL.iter().all(|slot| self.is_occupied(*slot))
    }
}

impl<P: Clone> SelectionStore<P> {
    /// 現在の選択から比較リクエストを構築する
    pub fn request(&self) -> Option<ComparisonRequest<P>> {
        match (self.get(Slot::Image1), self.get(Slot::Image2)) {
            (Some(image1), Some(image2)) => Some(ComparisonRequest {
                image1: image1.clone(),
                image2: image2.clone(),
            }),
            _ => None,
        }
    }
}
