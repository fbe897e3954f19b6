//! 表示用の純粋なヘルパー

use image_compare_common::{Affordance, Presentation, PreviewState};

/// 結果セクションの要素ID（スクロール先）
pub const RESULT_SECTION_ID: &str = "result-section";

/// ファイル選択ダイアログで受け付ける形式
pub const ACCEPT_ATTR: &str = "image/*,.heic,.heif";

/// 両方の画像が揃った時の比較ボタン
const HIGHLIGHT_STYLE: &str =
    "background: linear-gradient(135deg, #48bb78 0%, #38a169 100%); transform: scale(1.02);";

/// ダイアログに表示するエラーメッセージ
pub fn alert_text(message: &str) -> String {
    format!("エラー: {}", message)
}

pub fn trigger_style(highlighted: bool) -> &'static str {
    if highlighted {
        HIGHLIGHT_STYLE
    } else {
        ""
    }
}

/// スコア円の背景
pub fn circle_style(presentation: Option<&Presentation>) -> String {
    presentation
        .map(|p| format!("background: {};", p.background_css()))
        .unwrap_or_default()
}

pub fn result_section_class(visible: bool) -> &'static str {
    if visible {
        "result-section active"
    } else {
        "result-section"
    }
}

pub fn overlay_class(visible: bool) -> &'static str {
    if visible {
        "loading-overlay active"
    } else {
        "loading-overlay"
    }
}

/// 入力イベント後に再描画が必要か
pub fn needs_refresh(assigned: bool, before: Affordance, after: Affordance) -> bool {
    assigned || before != after
}

pub fn preview_class<I>(state: &PreviewState<I>) -> &'static str {
    match state {
        PreviewState::Ready(_) => "preview active",
        _ => "preview",
    }
}
