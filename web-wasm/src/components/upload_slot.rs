//! アップロード枠コンポーネント

use image_compare_common::{InputEvent, Preview, PreviewState, Slot};
use leptos::html;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::DragEvent;

use crate::api::candidates_from_list;
use crate::app::AppContext;
use crate::ui;

#[component]
pub fn UploadSlot(ctx: AppContext, slot: Slot) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let affordance = Memo::new(move |_| ctx.read(|c| c.affordance(slot)));
    let file_name = Memo::new(move |_| ctx.read(|c| c.file_name(slot)));
    let preview = Memo::new(move |_| ctx.read(|c| c.preview(slot)));

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        ctx.submit(InputEvent::DragEnter(slot));
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ctx.submit(InputEvent::DragOver(slot));
    };

    let on_dragleave = move |_: DragEvent| {
        ctx.submit(InputEvent::DragLeave(slot));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = ev.data_transfer().and_then(|dt| dt.files());
        ctx.submit(InputEvent::Drop {
            slot,
            files: candidates_from_list(files),
        });
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        ctx.submit(InputEvent::PickerChange {
            slot,
            files: candidates_from_list(input.files()),
        });
        // 同じファイルを選び直せるようにする
        input.set_value("");
    };

    view! {
        <div
            id=format!("upload-box-{}", slot.index() + 1)
            class=move || affordance.get().css_class()
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <input
                type="file"
                class="file-input"
                accept=ui::ACCEPT_ATTR
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <div class="upload-icon">"📁"</div>
            <p class="upload-label">{slot.label()}</p>
            <p class="text-muted">"ドラッグ&ドロップ または クリックして選択"</p>
            {move || file_name.get().map(|name| view! { <p class="file-name">{name}</p> })}
            <div class=move || preview.with(ui::preview_class)>
                {move || preview_content(preview.get())}
            </div>
        </div>
    }
}

fn preview_content(state: PreviewState<Arc<str>>) -> AnyView {
    match state {
        PreviewState::Ready(Preview::Image(data_url)) => {
            view! { <img src=data_url.to_string() alt="Preview" /> }.into_any()
        }
        PreviewState::Ready(Preview::Placeholder(placeholder)) => view! {
            <div class="heic-placeholder">
                <div class="placeholder-icon">{placeholder.icon}</div>
                <div class="placeholder-name">{placeholder.name}</div>
                <div class="placeholder-note">{placeholder.note}</div>
            </div>
        }
        .into_any(),
        PreviewState::Loading => view! { <p class="text-muted">"読み込み中..."</p> }.into_any(),
        PreviewState::Empty | PreviewState::Failed => ().into_any(),
    }
}
