//! 対話式の比較セッション
//!
//! 操作: [1 パス]画像1を選択 [2 パス]画像2を選択 [Enter]比較 [r]リセット [q]終了

use dialoguer::Input;
use image_compare_common::{Key, KeyAction, ScoringService, Slot};
use std::path::PathBuf;

use crate::display;
use crate::error::Result;
use crate::session::{report_compare_error, Session};

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveAction {
    /// 枠にファイルを選択
    Select(Slot, PathBuf),
    /// 比較（Enter）
    Confirm,
    /// すべてクリア
    Reset,
    /// 終了
    Quit,
    /// 不明な入力
    Unknown(String),
}

/// 入力行を解釈する
pub fn parse_action(input: &str) -> InteractiveAction {
    let trimmed = input.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "" => InteractiveAction::Confirm,
        "1" if !rest.is_empty() => InteractiveAction::Select(Slot::Image1, PathBuf::from(rest)),
        "2" if !rest.is_empty() => InteractiveAction::Select(Slot::Image2, PathBuf::from(rest)),
        "r" | "R" => InteractiveAction::Reset,
        "q" | "Q" => InteractiveAction::Quit,
        _ => InteractiveAction::Unknown(trimmed.to_string()),
    }
}

/// 対話式で比較を実行
pub async fn run_interactive<S: ScoringService<PathBuf>>(session: &Session<S>, animate: bool) -> Result<()> {
    println!("🖼  image-compare - 対話モード");
    println!("---");
    println!("操作: [1 パス]画像1 [2 パス]画像2 [Enter]比較 [r]リセット [q]終了");
    println!("---\n");

    loop {
        let view = session.controller().view();
        for slot in Slot::ALL {
            println!("  {}", display::slot_line(view.slot(slot)));
        }

        let prompt = if view.trigger_enabled {
            "操作 (Enter:比較)"
        } else {
            "操作"
        };
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        match parse_action(&input) {
            InteractiveAction::Select(slot, path) => {
                match session.select(slot, &path).await {
                    Ok(()) => println!("  → {}に設定しました", slot.label()),
                    Err(e) => eprintln!("エラー: {}", e),
                }
            }
            InteractiveAction::Confirm => {
                // 比較ボタンが無効な間はEnterを無視する
                if session.controller().handle_key(Key::Enter) != KeyAction::Trigger {
                    println!("  → 2つの画像を選択してください");
                    continue;
                }
                match session.compare().await {
                    Ok(_) => session.present(animate).await,
                    Err(e) => report_compare_error(&e),
                }
            }
            InteractiveAction::Reset => {
                session.reset();
                println!("  → リセットしました");
            }
            InteractiveAction::Quit => break,
            InteractiveAction::Unknown(text) => {
                println!("  → 不明な操作: {}", text);
            }
        }
        println!();
    }

    Ok(())
}
