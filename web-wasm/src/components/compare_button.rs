//! 比較・リセットボタン

use leptos::prelude::*;

use crate::app::AppContext;
use crate::ui;

#[component]
pub fn CompareButton(ctx: AppContext) -> impl IntoView {
    let enabled = Memo::new(move |_| ctx.read(|c| c.trigger_enabled()));
    let highlighted = Memo::new(move |_| ctx.read(|c| c.trigger_highlighted()));

    view! {
        <div class="button-row">
            <button
                id="compare-btn"
                class="compare-btn"
                disabled=move || !enabled.get()
                style=move || ui::trigger_style(highlighted.get())
                on:click=move |_| ctx.compare()
            >
                "類似度を採点"
            </button>
            <button class="reset-btn" on:click=move |_| ctx.reset()>
                "リセット"
            </button>
        </div>
    }
}
