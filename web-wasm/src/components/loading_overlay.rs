//! 比較中のローディング表示

use leptos::prelude::*;

use crate::app::AppContext;
use crate::ui;

#[component]
pub fn LoadingOverlay(ctx: AppContext) -> impl IntoView {
    let visible = Memo::new(move |_| ctx.read(|c| c.loading_visible()));

    view! {
        <div id="loading-overlay" class=move || ui::overlay_class(visible.get())>
            <div class="spinner"></div>
            <p>"類似度を計算中..."</p>
        </div>
    }
}
