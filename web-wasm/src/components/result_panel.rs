//! 結果表示コンポーネント

use leptos::prelude::*;

use crate::app::AppContext;
use crate::ui;

#[component]
pub fn ResultPanel(ctx: AppContext) -> impl IntoView {
    let presentation = Memo::new(move |_| ctx.read(|c| c.presentation()));
    let displayed_score = Memo::new(move |_| ctx.read(|c| c.displayed_score()));
    let score_text = Memo::new(move |_| ctx.read(|c| c.score_text()));

    view! {
        <div
            id=ui::RESULT_SECTION_ID
            class=move || ui::result_section_class(presentation.get().is_some())
        >
            <div class="score-circle" style=move || ui::circle_style(presentation.get().as_ref())>
                <span id="score-value" class="score-value">
                    {move || displayed_score.get().to_string()}
                </span>
                <span class="score-unit">"%"</span>
            </div>
            <p id="score-text" class="score-text">{move || score_text.get()}</p>
        </div>
    }
}
