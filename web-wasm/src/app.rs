//! メインアプリケーションコンポーネント

use async_trait::async_trait;
use gloo::console;
use gloo::timers::future::TimeoutFuture;
use image_compare_common::presenter::SCROLL_DELAY;
use image_compare_common::{
    Candidate, CompareController, CompareError, ComparisonRequest, InputEvent, Key, KeyAction,
    ScoringService, Slot,
};
use leptos::ev;
use leptos::prelude::*;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::api::{DataUrlDecoder, FetchScoringService};
use crate::components::{
    compare_button::CompareButton,
    header::Header,
    loading_overlay::LoadingOverlay,
    result_panel::ResultPanel,
    upload_slot::UploadSlot,
};
use crate::ui;

pub type WebController = CompareController<File, Arc<str>>;

/// アプリケーションの状態
///
/// 状態はコントローラが持ち、`version` は再描画の通知にだけ使う
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<WebController>, LocalStorage>,
    version: RwSignal<u64>,
}

impl AppContext {
    fn new() -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(WebController::new())),
            version: RwSignal::new(0),
        }
    }

    pub fn controller(&self) -> Rc<WebController> {
        self.controller.get_value()
    }

    /// コントローラから必要な値だけを読む（リアクティブ）
    pub fn read<T>(&self, f: impl FnOnce(&WebController) -> T) -> T {
        self.version.track();
        self.controller.with_value(|controller| f(controller))
    }

    pub fn refresh(&self) {
        self.version.update(|v| *v += 1);
    }

    /// ドラッグ&ドロップ・ファイル選択の入力
    pub fn submit(&self, event: InputEvent<Candidate<File>>) {
        let controller = self.controller();
        let slot = event.slot();
        let before = controller.affordance(slot);
        let outcome = controller.handle_input(event);
        let assigned = matches!(outcome, Ok(Some(_)));
        // dragoverは連続して発生するため、表示が変わらない場合は再描画しない
        if ui::needs_refresh(assigned, before, controller.affordance(slot)) {
            self.refresh();
        }

        match outcome {
            Ok(Some(slot)) => {
                let ctx = *self;
                spawn_local(async move {
                    if let Err(e) = controller.load_preview(slot, &DataUrlDecoder).await {
                        console::error!(format!("{}: {}", slot, e.detail));
                        show_error(&e.to_string());
                    }
                    ctx.refresh();
                });
            }
            Ok(None) => {}
            Err(e) => show_error(&e.to_string()),
        }
    }

    /// 比較を開始する
    pub fn compare(&self) {
        let ctx = *self;
        spawn_local(async move {
            let controller = ctx.controller();
            let service = RefreshOnSend {
                inner: FetchScoringService::same_origin(),
                ctx,
            };

            let outcome = controller.compare(&service).await;
            ctx.refresh();

            match outcome {
                Ok(_) => {
                    spawn_local(scroll_to_result());
                    controller
                        .animate_result(
                            |delay| TimeoutFuture::new(delay.as_millis() as u32),
                            |_| ctx.refresh(),
                        )
                        .await;
                }
                Err(e) if e.is_user_facing() => show_error(&e.to_string()),
                Err(e) => console::warn!(e.to_string()),
            }
        });
    }

    pub fn reset(&self) {
        self.controller().reset();
        self.refresh();
    }

    fn handle_key(&self, key: Key) {
        match self.controller().handle_key(key) {
            KeyAction::Trigger => self.compare(),
            KeyAction::LoadingHidden => self.refresh(),
            KeyAction::None => {}
        }
    }
}

/// 送信開始時にローディング表示を反映させる
struct RefreshOnSend {
    inner: FetchScoringService,
    ctx: AppContext,
}

#[async_trait(?Send)]
impl ScoringService<File> for RefreshOnSend {
    async fn compare(&self, request: &ComparisonRequest<File>) -> Result<f64, CompareError> {
        self.ctx.refresh();
        self.inner.compare(request).await
    }
}

fn show_error(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&ui::alert_text(message));
    }
}

async fn scroll_to_result() {
    TimeoutFuture::new(SCROLL_DELAY.as_millis() as u32).await;

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ui::RESULT_SECTION_ID))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();

    // 枠の外にドロップしてもファイルが開かれないようにする
    let _ = window_event_listener(ev::dragover, |e| e.prevent_default());
    let _ = window_event_listener(ev::drop, |e| e.prevent_default());
    let _ = window_event_listener(ev::keydown, move |e| {
        ctx.handle_key(Key::from_key_name(&e.key()));
    });

    view! {
        <div class="container">
            <Header />

            <div class="upload-section">
                <UploadSlot ctx=ctx slot=Slot::Image1 />
                <UploadSlot ctx=ctx slot=Slot::Image2 />
            </div>

            <CompareButton ctx=ctx />

            <ResultPanel ctx=ctx />

            <LoadingOverlay ctx=ctx />
        </div>
    }
}
