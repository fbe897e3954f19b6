//! Image Compare Common Library
//!
//! CLIとWeb(WASM)で共有される比較ワークフローの状態管理と表示ロジック

pub mod types;
pub mod error;
pub mod validator;
pub mod preview;
pub mod selection;
pub mod dragdrop;
pub mod api;
pub mod orchestrator;
pub mod presenter;
pub mod controller;

pub use types::{Candidate, ComparisonRequest, FileMeta, RequestStatus, Slot};
pub use error::{CompareError, DecodeError, Error, Result, ValidationError};
pub use validator::{validate, MAX_FILE_SIZE};
pub use preview::{ImageDecoder, Placeholder, Preview, PreviewRenderer, PreviewTicket, RenderOutcome};
pub use selection::SelectionStore;
pub use dragdrop::{Affordance, DragDropAdapter, FileChosen, InputEvent};
pub use orchestrator::{ComparisonOrchestrator, ScoringService};
pub use presenter::{normalize_score, present, ComparisonResult, Presentation, ScoreAnimation, Tier};
pub use controller::{CompareController, Key, KeyAction, PreviewState, SlotView, ViewModel};
