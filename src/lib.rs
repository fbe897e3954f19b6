//! image-compare: 2枚の画像の類似度を採点するCLI
//!
//! 比較ワークフローの状態管理は image_compare_common を使用

pub mod cli;
pub mod client;
pub mod config;
pub mod decoder;
pub mod display;
pub mod error;
pub mod interactive;
pub mod loader;
pub mod session;
