//! Briefing desk: the display state of the command panel.
//!
//! Every request gets a monotonic sequence number. A result is shown only if
//! it is newer than the one on display, so a slow early request can never
//! overwrite a later one. `loading` is raised before a request is issued and
//! stays up until the most recently issued request settles.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::debug;

use sovereign_core::briefing::BriefingRecord;
use sovereign_intel::{BriefingModel, BriefingRequester};

/// What the command panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeskView {
    pub loading: bool,
    pub briefing: Option<BriefingRecord>,
    /// Sequence number of the displayed briefing. 0 for none or the seed record.
    pub sequence: u64,
}

/// Outcome of settling a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The result replaced the displayed briefing.
    Displayed,
    /// A newer result was already on display; this one was discarded.
    Superseded,
}

#[derive(Debug, Default)]
struct DeskState {
    /// Last sequence number handed out.
    issued: u64,
    /// Highest sequence number that has settled, shown or not.
    settled: u64,
    /// Sequence number of the displayed briefing.
    displayed: u64,
    briefing: Option<BriefingRecord>,
}

/// Owns the briefing display state. Overwritten wholesale, never partially.
#[derive(Debug, Default)]
pub struct BriefingDesk {
    state: Mutex<DeskState>,
}

impl BriefingDesk {
    /// An empty desk: nothing displayed, not loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// A desk showing `record` until the first request settles.
    pub fn with_briefing(record: BriefingRecord) -> Self {
        Self {
            state: Mutex::new(DeskState {
                briefing: Some(record),
                ..Default::default()
            }),
        }
    }

    /// Current display state.
    pub fn view(&self) -> DeskView {
        let state = self.lock();
        DeskView {
            loading: state.settled < state.issued,
            briefing: state.briefing.clone(),
            sequence: state.displayed,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view().loading
    }

    /// Issue a new request: raises `loading` and reserves a sequence number.
    ///
    /// Dropping the ticket without settling it counts as settled with no result.
    pub fn begin(&self) -> PendingBriefing<'_> {
        let mut state = self.lock();
        state.issued += 1;
        PendingBriefing {
            desk: self,
            sequence: state.issued,
            settled: false,
        }
    }

    /// Request a briefing through `requester` and display it unless superseded.
    pub async fn request<M: BriefingModel>(
        &self,
        requester: &BriefingRequester<M>,
        vector_id: &str,
        context: &str,
    ) -> Settlement {
        let pending = self.begin();
        let record = requester.generate(vector_id, context).await;
        pending.settle(record)
    }

    fn lock(&self) -> MutexGuard<'_, DeskState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn finish(&self, sequence: u64, record: Option<BriefingRecord>) -> Settlement {
        let mut state = self.lock();
        state.settled = state.settled.max(sequence);

        match record {
            Some(record) if sequence > state.displayed => {
                state.displayed = sequence;
                state.briefing = Some(record);
                Settlement::Displayed
            }
            _ => {
                debug!(sequence, displayed = state.displayed, "Briefing superseded");
                Settlement::Superseded
            }
        }
    }
}

/// An issued request that has not settled yet.
#[must_use = "dropping a pending briefing abandons the request"]
pub struct PendingBriefing<'a> {
    desk: &'a BriefingDesk,
    sequence: u64,
    settled: bool,
}

impl PendingBriefing<'_> {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Deliver the result for this request.
    pub fn settle(mut self, record: BriefingRecord) -> Settlement {
        self.settled = true;
        self.desk.finish(self.sequence, Some(record))
    }
}

impl Drop for PendingBriefing<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.desk.finish(self.sequence, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;
    use sovereign_intel::{GenerationRequest, IntelConfig, IntelError};

    fn record(subject: &str) -> BriefingRecord {
        BriefingRecord {
            subject: subject.into(),
            ..BriefingRecord::uplink_severed(Utc::now())
        }
    }

    #[test]
    fn test_new_desk_is_idle() {
        let view = BriefingDesk::new().view();
        assert!(!view.loading);
        assert!(view.briefing.is_none());
        assert_eq!(view.sequence, 0);
    }

    #[test]
    fn test_seeded_desk_shows_overview() {
        let desk = BriefingDesk::with_briefing(BriefingRecord::standing_overview(Utc::now()));
        let view = desk.view();
        assert!(!view.loading);
        assert_eq!(view.briefing.unwrap().id, "INIT-001");
    }

    #[test]
    fn test_loading_raised_until_settled() {
        let desk = BriefingDesk::new();
        let pending = desk.begin();
        assert!(desk.is_loading());

        assert_eq!(pending.settle(record("A")), Settlement::Displayed);
        let view = desk.view();
        assert!(!view.loading);
        assert_eq!(view.briefing.unwrap().subject, "A");
        assert_eq!(view.sequence, 1);
    }

    #[test]
    fn test_stale_result_discarded() {
        let desk = BriefingDesk::new();
        let first = desk.begin();
        let second = desk.begin();
        assert_eq!(second.sequence(), first.sequence() + 1);

        assert_eq!(second.settle(record("SECOND")), Settlement::Displayed);
        assert!(!desk.is_loading(), "latest request has settled");

        assert_eq!(first.settle(record("FIRST")), Settlement::Superseded);
        let view = desk.view();
        assert_eq!(view.briefing.unwrap().subject, "SECOND");
        assert_eq!(view.sequence, 2);
    }

    #[test]
    fn test_early_result_shown_while_later_pending() {
        let desk = BriefingDesk::new();
        let first = desk.begin();
        let second = desk.begin();

        assert_eq!(first.settle(record("FIRST")), Settlement::Displayed);
        assert!(desk.is_loading(), "second request still pending");
        assert_eq!(desk.view().briefing.unwrap().subject, "FIRST");

        assert_eq!(second.settle(record("SECOND")), Settlement::Displayed);
        assert!(!desk.is_loading());
        assert_eq!(desk.view().briefing.unwrap().subject, "SECOND");
    }

    #[test]
    fn test_abandoned_request_clears_loading() {
        let desk = BriefingDesk::with_briefing(record("KEEP"));
        {
            let _pending = desk.begin();
            assert!(desk.is_loading());
        }
        let view = desk.view();
        assert!(!view.loading);
        assert_eq!(view.briefing.unwrap().subject, "KEEP");
    }

    /// Answers after a per-vector delay so completion order can be forced.
    struct DelayedModel;

    #[async_trait]
    impl BriefingModel for DelayedModel {
        async fn generate(
            &self,
            _api_key: &str,
            request: &GenerationRequest,
        ) -> Result<String, IntelError> {
            let (delay, subject) = if request.system_instruction.contains("SLOW") {
                (80, "SLOW")
            } else {
                (5, "FAST")
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(format!(r#"{{"subject":"{subject}"}}"#))
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests_latest_wins() {
        let desk = Arc::new(BriefingDesk::new());
        let requester = Arc::new(BriefingRequester::new(
            IntelConfig::with_api_key("test-key"),
            DelayedModel,
        ));

        let slow = {
            let (desk, requester) = (desk.clone(), requester.clone());
            tokio::spawn(async move { desk.request(&requester, "SLOW", "kinetic").await })
        };
        // Make sure the slow request is issued first
        while !desk.is_loading() {
            tokio::task::yield_now().await;
        }
        let fast = desk.request(&requester, "FAST", "cyber").await;

        assert_eq!(fast, Settlement::Displayed);
        assert_eq!(slow.await.unwrap(), Settlement::Superseded);

        let view = desk.view();
        assert!(!view.loading);
        assert_eq!(view.briefing.unwrap().subject, "FAST");
        assert_eq!(view.sequence, 2);
    }

    #[tokio::test]
    async fn test_failed_request_displays_fallback() {
        let desk = BriefingDesk::with_briefing(BriefingRecord::standing_overview(Utc::now()));
        let requester = BriefingRequester::new(IntelConfig::default(), DelayedModel);

        let outcome = desk.request(&requester, "VEC-100", "kinetic").await;

        assert_eq!(outcome, Settlement::Displayed);
        let view = desk.view();
        assert!(!view.loading);
        assert!(view.briefing.unwrap().is_fallback());
    }
}
