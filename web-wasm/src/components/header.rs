//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"画像類似度チェック"</h1>
            <p class="text-muted">"2枚の画像をアップロードして類似度を採点します"</p>
        </header>
    }
}
