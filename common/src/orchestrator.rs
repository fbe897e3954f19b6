//! 比較リクエストの実行管理
//!
//! - 両方の枠が埋まっていない場合は通信しない
//! - 実行中の再実行は拒否する（キューイングしない）
//! - 成功・失敗・中断のどの経路でも実行中状態を解除する

use async_trait::async_trait;
use std::cell::Cell;

use crate::error::CompareError;
use crate::presenter::ComparisonResult;
use crate::selection::SelectionStore;
use crate::types::{ComparisonRequest, RequestStatus};

/// 類似度スコアAPI（プラットフォームごとに実装）
#[async_trait(?Send)]
pub trait ScoringService<P> {
    /// 2つの画像を送信し生スコアを返す
    async fn compare(&self, request: &ComparisonRequest<P>) -> Result<f64, CompareError>;
}

/// 比較リクエストの状態管理（プロセスで1つ）
#[derive(Debug, Default)]
pub struct ComparisonOrchestrator {
    status: Cell<RequestStatus>,
}

impl ComparisonOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RequestStatus {
        self.status.get()
    }

    pub fn is_in_flight(&self) -> bool {
        self.status.get() == RequestStatus::InFlight
    }

    /// 実行を開始する
    ///
    /// 選択状態から比較リクエストを作り、状態を実行中にする。
    /// 戻り値の [`InFlight`] を `run` するかドロップするまで実行中のまま。
    pub fn begin<P: Clone>(
        &self,
        selection: &SelectionStore<P>,
    ) -> Result<InFlight<'_, P>, CompareError> {
        if self.is_in_flight() {
            tracing::warn!("compare rejected: request already in flight");
            return Err(CompareError::AlreadyInFlight);
        }

        let request = selection.request().ok_or_else(|| {
            tracing::warn!("compare rejected: both slots must be filled");
            CompareError::NotReady
        })?;

        self.status.set(RequestStatus::InFlight);
        tracing::debug!(
            image1 = request.image1.name(),
            image2 = request.image2.name(),
            "compare request started"
        );

        Ok(InFlight {
            orchestrator: self,
            request,
        })
    }

    /// 選択状態を検証してAPIを呼び出す
    pub async fn trigger<P, S>(
        &self,
        selection: &SelectionStore<P>,
        service: &S,
    ) -> Result<ComparisonResult, CompareError>
    where
        P: Clone,
        S: ScoringService<P> + ?Sized,
    {
        self.begin(selection)?.run(service).await
    }

    /// 新しい比較のために終了状態をIdleへ戻す
    pub fn reset(&self) {
        if !self.is_in_flight() {
            self.status.set(RequestStatus::Idle);
        }
    }
}

/// 実行中の比較リクエスト
///
/// `run` されずにドロップされた場合も実行中状態を解除する
#[derive(Debug)]
pub struct InFlight<'a, P> {
    orchestrator: &'a ComparisonOrchestrator,
    request: ComparisonRequest<P>,
}

impl<'a, P> InFlight<'a, P> {
    pub fn request(&self) -> &ComparisonRequest<P> {
        &self.request
    }

    /// APIを1回だけ呼び出し、結果に応じて状態を更新する
    pub async fn run<S>(self, service: &S) -> Result<ComparisonResult, CompareError>
    where
        S: ScoringService<P> + ?Sized,
    {
        let outcome = service.compare(&self.request).await;

        match outcome {
            Ok(raw_score) => {
                let result = ComparisonResult::from_score(raw_score);
                self.orchestrator.status.set(RequestStatus::Succeeded);
                tracing::debug!(raw_score, percentage = result.percentage, "compare succeeded");
                Ok(result)
            }
            Err(e) => {
                self.orchestrator.status.set(RequestStatus::Failed);
                tracing::warn!(error = %e, "compare failed");
                Err(e)
            }
        }
    }
}

impl<P> Drop for InFlight<'_, P> {
    fn drop(&mut self) {
        if self.orchestrator.is_in_flight() {
            tracing::warn!("compare request dropped before completion");
            self.orchestrator.status.set(RequestStatus::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Candidate, FileMeta, Slot};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// 呼び出しを記録するモックAPI
    struct MockService {
        calls: Cell<usize>,
        response: Result<f64, CompareError>,
    }

    impl MockService {
        fn returning(response: Result<f64, CompareError>) -> Self {
            Self { calls: Cell::new(0), response }
        }
    }

    #[async_trait(?Send)]
    impl ScoringService<()> for MockService {
        async fn compare(&self, _request: &ComparisonRequest<()>) -> Result<f64, CompareError> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    /// 完了を外部から制御するモックAPI
    struct GatedService {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<f64>>>,
    }

    #[async_trait(?Send)]
    impl ScoringService<()> for GatedService {
        async fn compare(&self, _request: &ComparisonRequest<()>) -> Result<f64, CompareError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.map_err(|_| CompareError::Transport("closed".into())),
                None => Err(CompareError::Transport("gate already used".into())),
            }
        }
    }

    fn ready_selection() -> SelectionStore<()> {
        let mut store = SelectionStore::new();
        store.assign(Slot::Image1, Candidate::new(FileMeta::new("a.jpg", "image/jpeg", 10), ()));
        store.assign(Slot::Image2, Candidate::new(FileMeta::new("b.jpg", "image/jpeg", 10), ()));
        store
    }

    #[test]
    fn test_not_ready_issues_no_call() {
        let orchestrator = ComparisonOrchestrator::new();
        let service = MockService::returning(Ok(0.5));
        let mut selection = SelectionStore::new();
        selection.assign(Slot::Image1, Candidate::new(FileMeta::new("a.jpg", "image/jpeg", 10), ()));

        let result = block_on(orchestrator.trigger(&selection, &service));
        assert_eq!(result, Err(CompareError::NotReady));
        assert_eq!(service.calls.get(), 0);
        assert_eq!(orchestrator.status(), RequestStatus::Idle);
    }

    #[test]
    fn test_success_produces_result() {
        let orchestrator = ComparisonOrchestrator::new();
        let service = MockService::returning(Ok(0.62));

        let result = block_on(orchestrator.trigger(&ready_selection(), &service)).expect("比較失敗");
        assert_eq!(result.percentage, 62);
        assert_eq!(service.calls.get(), 1);
        assert_eq!(orchestrator.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_failure_clears_in_flight() {
        let orchestrator = ComparisonOrchestrator::new();
        let service = MockService::returning(Err(CompareError::Service("画像ファイルを開けませんでした".into())));

        let result = block_on(orchestrator.trigger(&ready_selection(), &service));
        assert_eq!(result, Err(CompareError::Service("画像ファイルを開けませんでした".into())));
        assert_eq!(orchestrator.status(), RequestStatus::Failed);

        // 失敗後は再実行できる
        let retry = MockService::returning(Ok(0.9));
        assert!(block_on(orchestrator.trigger(&ready_selection(), &retry)).is_ok());
    }

    #[test]
    fn test_rapid_triggers_issue_single_call() {
        let orchestrator = ComparisonOrchestrator::new();
        let (tx, rx) = oneshot::channel();
        let service = GatedService {
            calls: Cell::new(0),
            gate: RefCell::new(Some(rx)),
        };
        let selection = ready_selection();

        let (first, second, third, _) = block_on(async {
            futures::join!(
                orchestrator.trigger(&selection, &service),
                orchestrator.trigger(&selection, &service),
                orchestrator.trigger(&selection, &service),
                async {
                    tx.send(0.85).ok();
                }
            )
        });

        assert_eq!(service.calls.get(), 1);
        assert_eq!(first.map(|r| r.percentage), Ok(85));
        assert_eq!(second, Err(CompareError::AlreadyInFlight));
        assert_eq!(third, Err(CompareError::AlreadyInFlight));
        assert_eq!(orchestrator.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_dropped_request_clears_in_flight() {
        let orchestrator = ComparisonOrchestrator::new();
        let selection = ready_selection();

        let flight = orchestrator.begin(&selection).expect("開始失敗");
        assert!(orchestrator.is_in_flight());
        assert_eq!(flight.request().image2.name(), "b.jpg");
        drop(flight);

        assert_eq!(orchestrator.status(), RequestStatus::Failed);
        assert!(orchestrator.begin(&selection).is_ok());
    }

    #[test]
    fn test_reset_keeps_in_flight() {
        let orchestrator = ComparisonOrchestrator::new();
        let selection = ready_selection();
        let _flight = orchestrator.begin(&selection).expect("開始失敗");

        orchestrator.reset();
        assert!(orchestrator.is_in_flight());
    }
}
