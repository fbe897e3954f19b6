//! 結果表示
//!
//! - スコア正規化（生スコア → 0〜100%）
//! - 評価ランク（メッセージ・色）
//! - カウントアップアニメーション

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::future::Future;
use std::time::Duration;

/// アニメーションのステップ数
pub const ANIMATION_STEPS: u32 = 50;
/// アニメーション全体の時間
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1500);
/// 結果表示後にスクロールするまでの待ち時間
pub const SCROLL_DELAY: Duration = Duration::from_millis(500);
/// グラデーション終端の明度調整（%）
pub const GRADIENT_BRIGHTNESS: i32 = -20;
/// 結果未表示時の説明文
pub const IDLE_MESSAGE: &str = "画像をアップロードして採点してください";

/// 1ステップの間隔
pub fn step_interval() -> Duration {
    ANIMATION_DURATION / ANIMATION_STEPS
}

/// 生スコアを0〜100のパーセンテージに正規化する
///
/// - 0〜1: そのまま百分率
/// - -1〜0: コサイン類似度として (s+1)/2 に写像
/// - それ以外: 絶対値の百分率を0〜100に制限
pub fn normalize_score(raw_score: f64) -> u8 {
    let percentage = if (0.0..=1.0).contains(&raw_score) {
        (raw_score * 100.0).round()
    } else if (-1.0..=1.0).contains(&raw_score) {
        (((raw_score + 1.0) / 2.0) * 100.0).round()
    } else {
        (raw_score.abs() * 100.0).round().clamp(0.0, 100.0)
    };
    // NaNは0になる
    percentage as u8
}

/// 評価ランク
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Excellent,
    Great,
    Moderate,
    Slight,
    Low,
}

impl Tier {
    /// パーセンテージからランクを決める（上位から判定）
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90..=u8::MAX => Tier::Excellent,
            70..=89 => Tier::Great,
            50..=69 => Tier::Moderate,
            30..=49 => Tier::Slight,
            _ => Tier::Low,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => "🎉 素晴らしい！ほぼ同じです！",
            Tier::Great => "😊 とても似ています！良い結果です！",
            Tier::Moderate => "🤔 ある程度似ています。もうちょっと..！",
            Tier::Slight => "😐 少し似ている部分があるかも..?",
            Tier::Low => "😅 あまり似ていないようです",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Tier::Excellent => "#48bb78",
            Tier::Great => "#38a169",
            Tier::Moderate => "#ed8936",
            Tier::Slight => "#e53e3e",
            Tier::Low => "#c53030",
        }
    }
}

/// 比較結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub raw_score: f64,
    pub percentage: u8,
    pub tier: Tier,
}

impl ComparisonResult {
    pub fn from_score(raw_score: f64) -> Self {
        let percentage = normalize_score(raw_score);
        Self {
            raw_score,
            percentage,
            tier: Tier::from_percentage(percentage),
        }
    }
}

/// 表示指示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub percentage: u8,
    pub tier: Tier,
    pub message: &'static str,
    pub color: &'static str,
    pub gradient_end: String,
}

impl Presentation {
    /// スコア円の背景（CSS）
    pub fn background_css(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.color, self.gradient_end
        )
    }
}

/// 結果から表示指示を作る
pub fn present(result: &ComparisonResult) -> Presentation {
    let color = result.tier.color();
    Presentation {
        percentage: result.percentage,
        tier: result.tier,
        message: result.tier.message(),
        color,
        gradient_end: adjust_color_brightness(color, GRADIENT_BRIGHTNESS),
    }
}

/// `#rrggbb` の各チャンネルを `2.55 * percent` だけ明るく（負なら暗く）する
pub fn adjust_color_brightness(hex: &str, percent: i32) -> String {
    let num = i64::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    let amount = (2.55 * percent as f64).round() as i64;
    let shift = |channel: i64| (channel + amount).clamp(0, 255);

    let r = shift((num >> 16) & 0xFF);
    let g = shift((num >> 8) & 0xFF);
    let b = shift(num & 0xFF);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// カウントアップアニメーションの各フレーム
///
/// 小数で加算し、表示時のみ丸める。最終ステップでは必ず目標値になる。
#[derive(Debug, Clone)]
pub struct ScoreAnimation {
    target: u8,
    increment: f64,
    current: f64,
    step: u32,
    finished: bool,
}

impl ScoreAnimation {
    pub fn new(target: u8) -> Self {
        Self {
            target,
            increment: target as f64 / ANIMATION_STEPS as f64,
            current: 0.0,
            step: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }
}

impl Iterator for ScoreAnimation {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.finished {
            return None;
        }

        self.step += 1;
        self.current += self.increment;
        if self.current >= self.target as f64 || self.step >= ANIMATION_STEPS {
            self.current = self.target as f64;
            self.finished = true;
        }
        Some(self.current.round() as u8)
    }
}

/// アニメーションの受付票
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationToken(u64);

/// 表示面ごとのアニメーション管理
///
/// 新しいアニメーションを開始すると以前の受付票は無効になる
#[derive(Debug, Default)]
pub struct Animator {
    generation: Cell<u64>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> AnimationToken {
        self.generation.set(self.generation.get() + 1);
        AnimationToken(self.generation.get())
    }

    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    pub fn is_active(&self, token: AnimationToken) -> bool {
        self.generation.get() == token.0
    }
}

/// カウントアップを実行する
///
/// `sleep` はプラットフォームのタイマー、`display` は表示更新。
/// 途中で別のアニメーションが開始された場合は `false` を返して中断する。
pub async fn run_animation<S, Fut, D>(
    animator: &Animator,
    target: u8,
    sleep: S,
    mut display: D,
) -> bool
where
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
    D: FnMut(u8),
{
    let token = animator.start();
    for value in ScoreAnimation::new(target) {
        sleep(step_interval()).await;
        if !animator.is_active(token) {
            return false;
        }
        display(value);
    }
    true
}
