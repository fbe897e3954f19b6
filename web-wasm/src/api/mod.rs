//! 採点API・ファイル読み込み

pub mod client;
pub mod decoder;

pub use client::FetchScoringService;
pub use decoder::{candidates_from_list, DataUrlDecoder};
