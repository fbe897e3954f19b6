//! 画面状態を一元管理するコントローラ
//!
//! 選択状態・プレビュー・結果・ローディング表示はすべてここで保持し、
//! 画面は [`CompareController::view`] の投影から毎回描画する。
//! 内部状態の借用は `.await` をまたがない。

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::time::Duration;

use crate::dragdrop::{Affordance, DragDropAdapter, FileChosen, InputEvent};
use crate::error::{CompareError, DecodeError, ValidationError};
use crate::orchestrator::{ComparisonOrchestrator, ScoringService};
use crate::presenter::{self, Animator, ComparisonResult, Presentation, IDLE_MESSAGE};
use crate::preview::{ImageDecoder, Preview, PreviewRenderer, PreviewTicket, RenderOutcome};
use crate::selection::SelectionStore;
use crate::types::{Candidate, RequestStatus, Slot};
use crate::validator;

/// 枠のプレビュー表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState<I> {
    Empty,
    Loading,
    Ready(Preview<I>),
    Failed,
}

/// キーボード操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

impl Key {
    /// `KeyboardEvent.key` の値から変換
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "Enter" => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// キー入力に対する動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    LoadingHidden,
    Trigger,
}

/// 枠の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<I> {
    pub slot: Slot,
    pub affordance: Affordance,
    pub file_name: Option<String>,
    pub preview: PreviewState<I>,
}

/// 画面全体の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<I> {
    pub slots: [SlotView<I>; 2],
    pub trigger_enabled: bool,
    pub trigger_highlighted: bool,
    pub loading_visible: bool,
    pub status: RequestStatus,
    pub result: Option<Presentation>,
    pub displayed_score: u8,
    pub score_text: &'static str,
}

impl<I> ViewModel<I> {
    pub fn slot(&self, slot: Slot) -> &SlotView<I> {
        &self.slots[slot.index()]
    }

    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }
}

/// 比較ワークフローのコントローラ
///
/// `P` はファイルのペイロード、`I` はデコード済みプレビューの表現
#[derive(Debug)]
pub struct CompareController<P, I> {
    selection: RefCell<SelectionStore<P>>,
    previews: RefCell<[PreviewState<I>; 2]>,
    renderer: PreviewRenderer,
    /// 割り当て時に発行し、まだ生成を始めていない受付票
    pending_previews: [Cell<Option<PreviewTicket>>; 2],
    dragdrop: DragDropAdapter,
    orchestrator: ComparisonOrchestrator,
    animator: Animator,
    result: Cell<Option<ComparisonResult>>,
    displayed_score: Cell<u8>,
    loading_visible: Cell<bool>,
    epoch: Cell<u64>,
}

impl<P, I> Default for CompareController<P, I> {
    fn default() -> Self {
        Self {
            selection: RefCell::new(SelectionStore::new()),
            previews: RefCell::new([PreviewState::Empty, PreviewState::Empty]),
            renderer: PreviewRenderer::new(),
            pending_previews: [Cell::new(None), Cell::new(None)],
            dragdrop: DragDropAdapter::new(),
            orchestrator: ComparisonOrchestrator::new(),
            animator: Animator::new(),
            result: Cell::new(None),
            displayed_score: Cell::new(0),
            loading_visible: Cell::new(false),
            epoch: Cell::new(0),
        }
    }
}

impl<P: Clone, I: Clone> CompareController<P, I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RequestStatus {
        self.orchestrator.status()
    }

    pub fn is_ready(&self) -> bool {
        self.selection.borrow().is_ready()
    }

    pub fn candidate(&self, slot: Slot) -> Option<Candidate<P>> {
        self.selection.borrow().get(slot).cloned()
    }

    pub fn result(&self) -> Option<ComparisonResult> {
        self.result.get()
    }

    /// ドラッグ&ドロップ・ファイル選択の入力を処理する
    ///
    /// ファイルが枠に割り当てられた場合はその枠を返す
    pub fn handle_input(
        &self,
        event: InputEvent<Candidate<P>>,
    ) -> Result<Option<Slot>, ValidationError> {
        match self.dragdrop.handle(event) {
            Some(chosen) => self.select(chosen).map(Some),
            None => Ok(None),
        }
    }

    /// 選ばれたファイルを検証し、合格なら枠に割り当てる
    ///
    /// 不合格の場合は選択状態を変更しない
    pub fn select(&self, chosen: FileChosen<Candidate<P>>) -> Result<Slot, ValidationError> {
        let FileChosen { slot, file } = chosen;
        if let Err(e) = validator::validate(&file.meta) {
            tracing::info!(slot = %slot, file = file.name(), reason = e.reason(), "file rejected");
            return Err(e);
        }

        tracing::debug!(slot = %slot, file = file.name(), size = file.meta.size_bytes, "file assigned");
        self.selection.borrow_mut().assign(slot, file);
        self.previews.borrow_mut()[slot.index()] = PreviewState::Loading;
        // 以前のファイルのデコード結果はここで無効になる
        self.pending_previews[slot.index()].set(Some(self.renderer.begin(slot)));
        Ok(slot)
    }

    /// 枠に割り当て済みのファイルのプレビューを生成する
    ///
    /// 割り当て時の受付票を使うため、生成中に別のファイルが割り当てられると
    /// 結果は破棄される。デコードに失敗してもファイルは枠に残る。
    pub async fn load_preview<D>(&self, slot: Slot, decoder: &D) -> Result<(), DecodeError>
    where
        D: ImageDecoder<P, Output = I> + ?Sized,
    {
        let Some(ticket) = self.pending_previews[slot.index()].take() else {
            return Ok(());
        };
        let Some(candidate) = self.candidate(slot) else {
            return Ok(());
        };

        match self.renderer.render_ticket(ticket, &candidate, decoder).await {
            RenderOutcome::Ready(preview) => {
                self.previews.borrow_mut()[slot.index()] = PreviewState::Ready(preview);
                Ok(())
            }
            RenderOutcome::Failed(e) => {
                self.previews.borrow_mut()[slot.index()] = PreviewState::Failed;
                Err(e)
            }
            RenderOutcome::Superseded => Ok(()),
        }
    }

    /// 比較を実行する
    ///
    /// 実行中にリセットされた場合、結果は画面に反映しない
    pub async fn compare<S>(&self, service: &S) -> Result<ComparisonResult, CompareError>
    where
        S: ScoringService<P> + ?Sized,
    {
        let flight = {
            let selection = self.selection.borrow();
            self.orchestrator.begin(&selection)?
        };
        let epoch = self.epoch.get();

        self.loading_visible.set(true);
        let outcome = flight.run(service).await;
        self.loading_visible.set(false);

        if let Ok(result) = &outcome {
            if self.epoch.get() == epoch {
                self.result.set(Some(*result));
            } else {
                tracing::debug!("result discarded after reset");
            }
        }
        outcome
    }

    /// 結果のカウントアップを実行する
    ///
    /// 実行中の別アニメーションは中断される。完走した場合は `true`。
    pub async fn animate_result<S, Fut, F>(&self, sleep: S, mut on_frame: F) -> bool
    where
        S: Fn(Duration) -> Fut,
        Fut: Future<Output = ()>,
        F: FnMut(u8),
    {
        let Some(result) = self.result.get() else {
            return false;
        };

        presenter::run_animation(&self.animator, result.percentage, sleep, |value| {
            self.displayed_score.set(value);
            on_frame(value);
        })
        .await
    }

    /// 選択・プレビュー・結果をすべて初期状態に戻す
    pub fn reset(&self) {
        self.epoch.set(self.epoch.get() + 1);
        self.selection.borrow_mut().clear_all();
        *self.previews.borrow_mut() = [PreviewState::Empty, PreviewState::Empty];
        self.renderer.invalidate_all();
        for pending in &self.pending_previews {
            pending.set(None);
        }
        self.dragdrop.reset();
        self.animator.cancel();
        self.result.set(None);
        self.displayed_score.set(0);
        self.orchestrator.reset();
        tracing::debug!("comparison reset");
    }

    /// キー入力を処理する
    pub fn handle_key(&self, key: Key) -> KeyAction {
        match key {
            Key::Escape => {
                self.loading_visible.set(false);
                KeyAction::LoadingHidden
            }
            Key::Enter if self.trigger_enabled() => KeyAction::Trigger,
            _ => KeyAction::None,
        }
    }

    /// 比較ボタンが押せるか
    pub fn trigger_enabled(&self) -> bool {
        self.is_ready() && !self.orchestrator.is_in_flight()
    }

    /// 両方の枠が埋まっていれば比較ボタンを強調する
    pub fn trigger_highlighted(&self) -> bool {
        self.is_ready()
    }

    pub fn affordance(&self, slot: Slot) -> Affordance {
        let occupied = self.selection.borrow().is_occupied(slot);
        self.dragdrop.affordance(slot, occupied)
    }

    pub fn file_name(&self, slot: Slot) -> Option<String> {
        self.selection.borrow().get(slot).map(|c| c.meta.name.clone())
    }

    pub fn preview(&self, slot: Slot) -> PreviewState<I> {
        self.previews.borrow()[slot.index()].clone()
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible.get()
    }

    pub fn displayed_score(&self) -> u8 {
        self.displayed_score.get()
    }

    pub fn presentation(&self) -> Option<Presentation> {
        self.result.get().map(|r| presenter::present(&r))
    }

    pub fn score_text(&self) -> &'static str {
        self.result.get().map(|r| r.tier.message()).unwrap_or(IDLE_MESSAGE)
    }

    pub fn slot_view(&self, slot: Slot) -> SlotView<I> {
        SlotView {
            slot,
            affordance: self.affordance(slot),
            file_name: self.file_name(slot),
            preview: self.preview(slot),
        }
    }

    /// 現在の状態から表示内容を計算する
    pub fn view(&self) -> ViewModel<I> {
        ViewModel {
            slots: Slot::ALL.map(|slot| self.slot_view(slot)),
            trigger_enabled: self.trigger_enabled(),
            trigger_highlighted: self.trigger_highlighted(),
            loading_visible: self.loading_visible(),
            status: self.orchestrator.status(),
            result: self.presentation(),
            displayed_score: self.displayed_score(),
            score_text: self.score_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::Tier;
    use crate::preview::Placeholder;
    use crate::types::{ComparisonRequest, FileMeta};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    type TestController = CompareController<Vec<u8>, String>;

    struct MockDecoder;

    #[async_trait(?Send)]
    impl ImageDecoder<Vec<u8>> for MockDecoder {
        type Output = String;

        async fn decode(&self, candidate: &Candidate<Vec<u8>>) -> Result<String, DecodeError> {
            if candidate.payload.is_empty() {
                Err(DecodeError::new("empty"))
            } else {
                Ok(format!("data:{};base64,AAAA", candidate.meta.mime_type))
            }
        }
    }

    struct MockService {
        score: f64,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl ScoringService<Vec<u8>> for MockService {
        async fn compare(&self, request: &ComparisonRequest<Vec<u8>>) -> Result<f64, CompareError> {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(request.image1.meta.name, "first.jpg");
            Ok(self.score)
        }
    }

    fn jpeg(name: &str) -> Candidate<Vec<u8>> {
        Candidate::new(FileMeta::new(name, "image/jpeg", 3), vec![0xff, 0xd8, 0xff])
    }

    fn drop_file(slot: Slot, file: Candidate<Vec<u8>>) -> InputEvent<Candidate<Vec<u8>>> {
        InputEvent::Drop { slot, files: vec![file] }
    }

    #[test]
    fn test_end_to_end_comparison() {
        let controller = TestController::new();
        let service = MockService { score: 0.62, calls: Cell::new(0) };

        assert_eq!(controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))), Ok(Some(Slot::Image1)));
        assert!(!controller.is_ready());
        controller
            .handle_input(InputEvent::PickerChange {
                slot: Slot::Image2,
                files: vec![jpeg("second.jpg"), jpeg("ignored.jpg")],
            })
            .expect("検証失敗");
        assert!(controller.is_ready());
        assert!(controller.view().trigger_enabled);

        block_on(controller.load_preview(Slot::Image1, &MockDecoder)).expect("プレビュー失敗");
        assert_eq!(
            controller.view().slot(Slot::Image1).preview,
            PreviewState::Ready(Preview::Image("data:image/jpeg;base64,AAAA".to_string()))
        );
        assert_eq!(controller.view().slot(Slot::Image2).preview, PreviewState::Loading);
        assert_eq!(controller.view().slot(Slot::Image2).file_name.as_deref(), Some("second.jpg"));

        let result = block_on(controller.compare(&service)).expect("比較失敗");
        assert_eq!(result.percentage, 62);
        assert_eq!(result.tier, Tier::Moderate);
        assert_eq!(service.calls.get(), 1);

        let completed = block_on(controller.animate_result(|_| async {}, |_| {}));
        assert!(completed);

        let view = controller.view();
        assert_eq!(view.displayed_score, 62);
        assert_eq!(view.status, RequestStatus::Succeeded);
        assert_eq!(view.result.map(|p| p.tier), Some(Tier::Moderate));
        assert!(!view.loading_visible);
        assert!(view.trigger_enabled);
    }

    #[test]
    fn test_rejected_file_leaves_selection_unchanged() {
        let controller = TestController::new();
        controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))).expect("検証失敗");

        let pdf = Candidate::new(FileMeta::new("doc.pdf", "application/pdf", 10), vec![1]);
        assert_eq!(
            controller.handle_input(drop_file(Slot::Image1, pdf)),
            Err(ValidationError::UnsupportedFormat)
        );
        assert_eq!(controller.candidate(Slot::Image1).map(|c| c.meta.name), Some("first.jpg".to_string()));
    }

    #[test]
    fn test_heic_gets_placeholder() {
        let controller = TestController::new();
        let heic = Candidate::new(FileMeta::new("IMG_0001.HEIC", "", 100), vec![]);
        controller.select(FileChosen { slot: Slot::Image2, file: heic }).expect("検証失敗");

        block_on(controller.load_preview(Slot::Image2, &MockDecoder)).expect("プレビュー失敗");
        assert_eq!(
            controller.view().slot(Slot::Image2).preview,
            PreviewState::Ready(Preview::Placeholder(Placeholder::for_file("IMG_0001.HEIC")))
        );
    }

    #[test]
    fn test_decode_failure_keeps_file_assigned() {
        let controller = TestController::new();
        let broken = Candidate::new(FileMeta::new("broken.png", "image/png", 0), vec![]);
        controller.select(FileChosen { slot: Slot::Image1, file: broken }).expect("検証失敗");

        let err = block_on(controller.load_preview(Slot::Image1, &MockDecoder)).unwrap_err();
        assert_eq!(err.detail, "empty");

        let view = controller.view();
        assert_eq!(view.slot(Slot::Image1).preview, PreviewState::Failed);
        assert_eq!(view.slot(Slot::Image1).affordance, Affordance::HasImage);
    }

    #[test]
    fn test_reset_clears_everything() {
        let controller = TestController::new();
        let service = MockService { score: 0.95, calls: Cell::new(0) };
        controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))).expect("検証失敗");
        controller.handle_input(drop_file(Slot::Image2, jpeg("second.jpg"))).expect("検証失敗");
        block_on(controller.load_preview(Slot::Image1, &MockDecoder)).expect("プレビュー失敗");
        block_on(controller.compare(&service)).expect("比較失敗");

        controller.reset();

        let view = controller.view();
        assert!(!controller.is_ready());
        assert!(!view.trigger_enabled);
        assert!(!view.trigger_highlighted);
        assert!(!view.result_visible());
        assert_eq!(view.displayed_score, 0);
        assert_eq!(view.score_text, IDLE_MESSAGE);
        assert_eq!(view.status, RequestStatus::Idle);
        for slot in Slot::ALL {
            assert_eq!(view.slot(slot).preview, PreviewState::Empty);
            assert_eq!(view.slot(slot).affordance, Affordance::Idle);
            assert!(view.slot(slot).file_name.is_none());
        }
    }

    #[test]
    fn test_compare_not_ready_is_rejected() {
        let controller = TestController::new();
        let service = MockService { score: 0.5, calls: Cell::new(0) };
        controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))).expect("検証失敗");

        assert_eq!(block_on(controller.compare(&service)), Err(CompareError::NotReady));
        assert_eq!(service.calls.get(), 0);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let controller = TestController::new();
        assert_eq!(controller.handle_key(Key::from_key_name("Enter")), KeyAction::None);
        assert_eq!(controller.handle_key(Key::from_key_name("a")), KeyAction::None);

        controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))).expect("検証失敗");
        controller.handle_input(drop_file(Slot::Image2, jpeg("second.jpg"))).expect("検証失敗");
        assert_eq!(controller.handle_key(Key::Enter), KeyAction::Trigger);
        assert_eq!(controller.handle_key(Key::Escape), KeyAction::LoadingHidden);
    }

    struct GatedService {
        gate: RefCell<Option<oneshot::Receiver<f64>>>,
    }

    #[async_trait(?Send)]
    impl ScoringService<Vec<u8>> for GatedService {
        async fn compare(&self, _request: &ComparisonRequest<Vec<u8>>) -> Result<f64, CompareError> {
            let gate = self.gate.borrow_mut().take().expect("ゲートなし");
            gate.await.map_err(|_| CompareError::Transport("closed".into()))
        }
    }

    #[test]
    fn test_in_flight_view_and_escape() {
        let controller = TestController::new();
        let (tx, rx) = oneshot::channel();
        let service = GatedService { gate: RefCell::new(Some(rx)) };
        controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))).expect("検証失敗");
        controller.handle_input(drop_file(Slot::Image2, jpeg("second.jpg"))).expect("検証失敗");

        let (outcome, _) = block_on(async {
            futures::join!(controller.compare(&service), async {
                let view = controller.view();
                assert!(view.loading_visible);
                assert!(!view.trigger_enabled);
                assert_eq!(view.status, RequestStatus::InFlight);
                // Enterは無効、Escapeでローディング表示のみ消える
                assert_eq!(controller.handle_key(Key::Enter), KeyAction::None);
                controller.handle_key(Key::Escape);
                assert!(!controller.view().loading_visible);
                assert_eq!(controller.status(), RequestStatus::InFlight);
                tx.send(0.85).ok();
            })
        });

        assert_eq!(outcome.map(|r| r.percentage), Ok(85));
        assert!(controller.view().trigger_enabled);
    }

    #[test]
    fn test_reset_during_flight_discards_result() {
        let controller = TestController::new();
        let (tx, rx) = oneshot::channel();
        let service = GatedService { gate: RefCell::new(Some(rx)) };
        controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))).expect("検証失敗");
        controller.handle_input(drop_file(Slot::Image2, jpeg("second.jpg"))).expect("検証失敗");

        let (outcome, _) = block_on(async {
            futures::join!(controller.compare(&service), async {
                controller.reset();
                tx.send(0.3).ok();
            })
        });

        assert!(outcome.is_ok());
        assert!(controller.result().is_none());
        assert!(!controller.view().result_visible());
    }

    /// 完了タイミングを外部から制御するデコーダ
    struct GatedDecoder {
        gate: RefCell<Option<oneshot::Receiver<String>>>,
    }

    #[async_trait(?Send)]
    impl ImageDecoder<Vec<u8>> for GatedDecoder {
        type Output = String;

        async fn decode(&self, _candidate: &Candidate<Vec<u8>>) -> Result<String, DecodeError> {
            let gate = self.gate.borrow_mut().take().ok_or_else(|| DecodeError::new("no gate"))?;
            gate.await.map_err(|_| DecodeError::new("cancelled"))
        }
    }

    #[test]
    fn test_reselect_discards_previous_preview() {
        let controller = TestController::new();
        let (tx, rx) = oneshot::channel();
        let decoder = GatedDecoder { gate: RefCell::new(Some(rx)) };
        controller.handle_input(drop_file(Slot::Image1, jpeg("a.jpg"))).expect("検証失敗");

        let (outcome, _) = block_on(async {
            futures::join!(controller.load_preview(Slot::Image1, &decoder), async {
                // aのデコード中にbを割り当て、bのプレビュー生成はまだ始めない
                controller.handle_input(drop_file(Slot::Image1, jpeg("b.jpg"))).expect("検証失敗");
                tx.send("preview-of-a".to_string()).ok();
            })
        });

        assert_eq!(outcome, Ok(()));
        let view = controller.view();
        assert_eq!(view.slot(Slot::Image1).file_name.as_deref(), Some("b.jpg"));
        assert_eq!(view.slot(Slot::Image1).preview, PreviewState::Loading);

        block_on(controller.load_preview(Slot::Image1, &MockDecoder)).expect("プレビュー失敗");
        assert_eq!(
            controller.view().slot(Slot::Image1).preview,
            PreviewState::Ready(Preview::Image("data:image/jpeg;base64,AAAA".to_string()))
        );
    }

    #[test]
    fn test_reset_discards_pending_preview() {
        let controller = TestController::new();
        controller.handle_input(drop_file(Slot::Image2, jpeg("a.jpg"))).expect("検証失敗");
        controller.reset();

        block_on(controller.load_preview(Slot::Image2, &MockDecoder)).expect("プレビュー失敗");
        assert_eq!(controller.view().slot(Slot::Image2).preview, PreviewState::Empty);
    }

    #[test]
    fn test_accessors_match_view() {
        let controller = TestController::new();
        let service = MockService { score: 0.62, calls: Cell::new(0) };
        controller.handle_input(drop_file(Slot::Image1, jpeg("first.jpg"))).expect("検証失敗");
        controller.handle_input(drop_file(Slot::Image2, jpeg("second.jpg"))).expect("検証失敗");
        block_on(controller.load_preview(Slot::Image1, &MockDecoder)).expect("プレビュー失敗");
        block_on(controller.compare(&service)).expect("比較失敗");
        block_on(controller.animate_result(|_| async {}, |_| {}));

        let view = controller.view();
        for slot in Slot::ALL {
            assert_eq!(&controller.slot_view(slot), view.slot(slot));
            assert_eq!(controller.affordance(slot), view.slot(slot).affordance);
            assert_eq!(controller.preview(slot), view.slot(slot).preview);
        }
        assert_eq!(controller.trigger_highlighted(), view.trigger_highlighted);
        assert_eq!(controller.loading_visible(), view.loading_visible);
        assert_eq!(controller.displayed_score(), 62);
        assert_eq!(controller.presentation(), view.result);
        assert_eq!(controller.score_text(), Tier::Moderate.message());
    }

    #[test]
    fn test_repeated_dragover_keeps_affordance() {
        let controller = TestController::new();
        assert_eq!(controller.affordance(Slot::Image1), Affordance::Idle);

        controller.handle_input(InputEvent::DragEnter(Slot::Image1)).expect("検証失敗");
        assert_eq!(controller.affordance(Slot::Image1), Affordance::Hover);
        for _ in 0..3 {
            assert_eq!(controller.handle_input(InputEvent::DragOver(Slot::Image1)), Ok(None));
            assert_eq!(controller.affordance(Slot::Image1), Affordance::Hover);
        }
        assert_eq!(controller.affordance(Slot::Image2), Affordance::Idle);

        controller.handle_input(InputEvent::DragLeave(Slot::Image1)).expect("検証失敗");
        assert_eq!(controller.affordance(Slot::Image1), Affordance::Idle);
    }
}
