use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-compare")]
#[command(about = "2枚の画像の類似度を採点するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 採点APIのベースURL（設定ファイルより優先）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 2枚の画像を比較して類似度を表示
    Compare {
        /// 1枚目の画像
        #[arg(required = true)]
        image1: PathBuf,

        /// 2枚目の画像
        #[arg(required = true)]
        image2: PathBuf,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// カウントアップ表示を省略
        #[arg(long)]
        no_animation: bool,
    },

    /// 画像が送信可能か検証し、プレビュー情報を表示
    Check {
        /// 画像ファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 対話的に画像を選択して比較
    Interactive,

    /// 設定を表示/編集
    Config {
        /// 採点APIのベースURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}
