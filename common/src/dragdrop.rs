//! ドラッグ&ドロップ / ファイル選択ダイアログの入力正規化
//!
//! どちらの入力も「枠Kにファイルが選ばれた」イベントに変換する。
//! 複数ファイルの場合は先頭の1件のみ使用する。

use std::cell::Cell;

use crate::types::Slot;

/// 枠への入力イベント
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent<F> {
    DragEnter(Slot),
    DragOver(Slot),
    DragLeave(Slot),
    Drop { slot: Slot, files: Vec<F> },
    PickerChange { slot: Slot, files: Vec<F> },
}

impl<F> InputEvent<F> {
    pub fn slot(&self) -> Slot {
        match self {
            InputEvent::DragEnter(slot)
            | InputEvent::DragOver(slot)
            | InputEvent::DragLeave(slot) => *slot,
            InputEvent::Drop { slot, .. } | InputEvent::PickerChange { slot, .. } => *slot,
        }
    }
}

/// 正規化後のイベント
#[derive(Debug, Clone, PartialEq)]
pub struct FileChosen<F> {
    pub slot: Slot,
    pub file: F,
}

/// 枠の表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Idle,
    Hover,
    HasImage,
}

impl Affordance {
    pub fn css_class(&self) -> &'static str {
        match self {
            Affordance::Idle => "upload-box",
            Affordance::Hover => "upload-box dragover",
            Affordance::HasImage => "upload-box has-image",
        }
    }
}

/// 表示状態は占有状態とホバー状態のみから決まる
pub fn affordance(occupied: bool, hovering: bool) -> Affordance {
    if hovering {
        Affordance::Hover
    } else if occupied {
        Affordance::HasImage
    } else {
        Affordance::Idle
    }
}

/// 先頭のファイルを取り出す（残りは破棄）
pub fn first_file<F>(files: Vec<F>) -> Option<F> {
    files.into_iter().next()
}

/// 入力正規化とホバー状態の管理
#[derive(Debug, Default)]
pub struct DragDropAdapter {
    hovering: [Cell<bool>; 2],
}

impl DragDropAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを処理し、ファイルが選ばれた場合はそれを返す
    pub fn handle<F>(&self, event: InputEvent<F>) -> Option<FileChosen<F>> {
        let slot = event.slot();
        match event {
            InputEvent::DragEnter(_) | InputEvent::DragOver(_) => {
                self.hovering[slot.index()].set(true);
                None
            }
            InputEvent::DragLeave(_) => {
                self.hovering[slot.index()].set(false);
                None
            }
            InputEvent::Drop { files, .. } => {
                self.hovering[slot.index()].set(false);
                first_file(files).map(|file| FileChosen { slot, file })
            }
            InputEvent::PickerChange { files, .. } => {
                first_file(files).map(|file| FileChosen { slot, file })
            }
        }
    }

    pub fn is_hovering(&self, slot: Slot) -> bool {
        self.hovering[slot.index()].get()
    }

    pub fn affordance(&self, slot: Slot, occupied: bool) -> Affordance {
        affordance(occupied, self.is_hovering(slot))
    }

    pub fn reset(&self) {
        for flag in &self.hovering {
            flag.set(false);
        }
    }
}
