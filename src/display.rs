//! ターミナル表示

use chrono::Local;
use image_compare_common::{ComparisonResult, Presentation, PreviewState, Slot, SlotView, Tier};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::decoder::{self, ImagePreview};

/// 比較中のスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 枠の状態を1行で表す
pub fn slot_line(view: &SlotView<ImagePreview>) -> String {
    let name = view.file_name.as_deref().unwrap_or("（未選択）");
    let preview = match &view.preview {
        PreviewState::Empty => String::new(),
        PreviewState::Loading => " - 読み込み中...".to_string(),
        PreviewState::Ready(preview) => format!(" - {}", decoder::describe(preview)),
        PreviewState::Failed => " - ⚠ プレビューを表示できません".to_string(),
    };
    format!("{}: {}{}", view.slot.label(), name, preview)
}

/// カウントアップの1フレームを表示
pub fn print_score_frame(value: u8) {
    print!("\r  類似度: {:>3}%", value);
    std::io::stdout().flush().ok();
}

/// 評価結果を表示
pub fn print_presentation(presentation: &Presentation) {
    println!("\r  類似度: {:>3}%", presentation.percentage);
    println!("  {}", presentation.message);
    println!("  ランク: {} ({} → {})", tier_label(presentation.tier), presentation.color, presentation.gradient_end);
}

pub fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Excellent",
        Tier::Great => "Great",
        Tier::Moderate => "Moderate",
        Tier::Slight => "Slight",
        Tier::Low => "Low",
    }
}

/// JSON出力
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareReport {
    pub image1: String,
    pub image2: String,
    pub raw_score: f64,
    pub percentage: u8,
    pub tier: Tier,
    pub message: String,
    pub compared_at: String,
}

impl CompareReport {
    pub fn new(names: [&str; 2], result: &ComparisonResult) -> Self {
        Self {
            image1: names[Slot::Image1.index()].to_string(),
            image2: names[Slot::Image2.index()].to_string(),
            raw_score: result.raw_score,
            percentage: result.percentage,
            tier: result.tier,
            message: result.tier.message().to_string(),
            compared_at: Local::now().to_rfc3339(),
        }
    }
}
