//! Bulk Action Orchestrator
//!
//! Runs one action across a selected set: a single batch call when the
//! backend has a batch endpoint, a bounded sequential fallback loop when it
//! does not. Partial failures are aggregated, never thrown; destructive
//! actions are gated behind the confirmation modal.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::adapters::ResourceAdapter;
use crate::domain::{ApiResult, BulkAction, BulkReport};
use crate::gateway::{ConfirmationGateway, Prompt};

use super::IdOf;

/// Lifecycle of one mutating bulk action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkPhase {
    Idle,
    Confirming,
    Executing,
    Settled(Settlement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Error,
}

/// How a `run` call ended
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOutcome<Id> {
    /// The user dismissed the confirmation prompt; nothing was called
    Cancelled,
    /// Every id was attempted; the report covers all of them
    Completed(BulkReport<Id>),
}

/// Tuning knobs for the fallback loop
#[derive(Debug, Clone)]
pub struct BulkOptions {
    /// Max in-flight single-item requests. 1 keeps backend load bounded and
    /// the per-id accounting strictly ordered; anything higher still caps
    /// in-flight work at a small constant.
    pub fallback_concurrency: usize,
    /// Minimum delay between download attempts, to stay clear of popup
    /// blocking and backend rate limits
    pub download_delay: Duration,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self { fallback_concurrency: 1, download_delay: Duration::from_millis(275) }
    }
}

/// Executes approve/reject/delete/download across a selected id set
///
/// Once Executing, an action runs to completion: there is no abort contract
/// toward the backend. Results are returned to the caller instead of being
/// written into view state, so a consuming view that went away mid-flight
/// simply drops the report.
pub struct BulkActionOrchestrator<A: ResourceAdapter> {
    adapter: Arc<A>,
    gateway: Arc<dyn ConfirmationGateway>,
    options: BulkOptions,
    phase: BulkPhase,
}

impl<A: ResourceAdapter> BulkActionOrchestrator<A> {
    pub fn new(adapter: Arc<A>, gateway: Arc<dyn ConfirmationGateway>) -> Self {
        Self::with_options(adapter, gateway, BulkOptions::default())
    }

    pub fn with_options(
        adapter: Arc<A>,
        gateway: Arc<dyn ConfirmationGateway>,
        options: BulkOptions,
    ) -> Self {
        Self { adapter, gateway, options, phase: BulkPhase::Idle }
    }

    pub fn phase(&self) -> BulkPhase {
        self.phase
    }

    fn set_phase(&mut self, phase: BulkPhase) {
        log::debug!("{} bulk phase: {:?}", self.adapter.name(), phase);
        self.phase = phase;
    }

    /// Run one action over `ids`, in input order
    ///
    /// Settlement is always success or error plus exactly one notification;
    /// no failure escapes as an error of its own. Callers reload their list
    /// afterwards to re-sync with backend truth.
    pub async fn run(&mut self, action: BulkAction, ids: Vec<IdOf<A>>) -> BulkOutcome<IdOf<A>> {
        if ids.is_empty() {
            return BulkOutcome::Completed(BulkReport::new());
        }

        if action.requires_confirmation() {
            self.set_phase(BulkPhase::Confirming);
            let prompt = Prompt::confirm(
                format!("Bulk {}", action.as_str()),
                format!("{} {} selected item(s)?", capitalize(action.as_str()), ids.len()),
            );
            if !self.gateway.confirm(prompt).await {
                // Dismissing the prompt has no side effect.
                self.set_phase(BulkPhase::Idle);
                return BulkOutcome::Cancelled;
            }
        }

        self.set_phase(BulkPhase::Executing);
        let report = if self.adapter.supports_batch(action) {
            self.execute_batch(&ids, action).await
        } else {
            let delay = matches!(action, BulkAction::Download).then(|| self.options.download_delay);
            self.execute_fallback(&ids, action, delay).await
        };

        self.settle(action, &report).await;
        self.set_phase(BulkPhase::Idle);
        BulkOutcome::Completed(report)
    }

    /// One call with all ids; atomic from the client's point of view
    async fn execute_batch(&self, ids: &[IdOf<A>], action: BulkAction) -> BulkReport<IdOf<A>> {
        let mut report = BulkReport::new();
        match self.adapter.mutate_many(ids, action).await {
            Ok(()) => {
                for id in ids {
                    report.record_ok(id.clone());
                }
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("batch {} on {} failed: {}", action.as_str(), self.adapter.name(), message);
                for id in ids {
                    report.record_err(id.clone(), message.clone());
                }
            }
        }
        report
    }

    /// Bounded sequential fallback over the single-item endpoint
    ///
    /// Attempts every id even after failures; a failure on one id never
    /// prevents an attempt on the next. A delay forces one-at-a-time
    /// execution regardless of the configured cap.
    async fn execute_fallback(
        &self,
        ids: &[IdOf<A>],
        action: BulkAction,
        delay: Option<Duration>,
    ) -> BulkReport<IdOf<A>> {
        let cap = if delay.is_some() { 1 } else { self.options.fallback_concurrency.max(1) };

        let mut report = BulkReport::new();
        if cap == 1 {
            for (i, id) in ids.iter().enumerate() {
                if i > 0 {
                    if let Some(d) = delay {
                        tokio::time::sleep(d).await;
                    }
                }
                match self.adapter.mutate_one(id.clone(), action).await {
                    Ok(()) => report.record_ok(id.clone()),
                    Err(e) => {
                        log::warn!(
                            "{} {} id {} failed: {}",
                            action.as_str(),
                            self.adapter.name(),
                            id,
                            e
                        );
                        report.record_err(id.clone(), e.to_string());
                    }
                }
            }
            return report;
        }

        // Windowed execution: at most `cap` in flight, results reported in
        // input order regardless of completion order.
        let mut results: Vec<Option<ApiResult<()>>> = vec![None; ids.len()];
        let mut offset = 0;
        for chunk in ids.chunks(cap) {
            let mut in_flight = JoinSet::new();
            for (j, id) in chunk.iter().enumerate() {
                let adapter = Arc::clone(&self.adapter);
                let id = id.clone();
                let idx = offset + j;
                in_flight.spawn(async move { (idx, adapter.mutate_one(id, action).await) });
            }
            while let Some(joined) = in_flight.join_next().await {
                match joined {
                    Ok((idx, result)) => results[idx] = Some(result),
                    Err(e) => log::error!("bulk worker task failed: {}", e),
                }
            }
            offset += chunk.len();
        }
        for (idx, id) in ids.iter().enumerate() {
            match results[idx].take() {
                Some(Ok(())) => report.record_ok(id.clone()),
                Some(Err(e)) => report.record_err(id.clone(), e.to_string()),
                None => report.record_err(id.clone(), "request was not completed".to_string()),
            }
        }
        report
    }

    /// Exactly one aggregate notification per batch
    async fn settle(&mut self, action: BulkAction, report: &BulkReport<IdOf<A>>) {
        if report.all_succeeded() {
            self.set_phase(BulkPhase::Settled(Settlement::Success));
            self.gateway
                .notify(Prompt::success(
                    "Done",
                    format!("{} {} item(s)", past_tense(action), report.succeeded.len()),
                ))
                .await;
        } else {
            self.set_phase(BulkPhase::Settled(Settlement::Error));
            self.gateway
                .notify(Prompt::error(
                    "Action failed",
                    format!(
                        "Failed to {} {} of {} item(s)",
                        action.as_str(),
                        report.failed.len(),
                        report.attempted()
                    ),
                ))
                .await;
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn past_tense(action: BulkAction) -> &'static str {
    match action {
        BulkAction::Approve => "Approved",
        BulkAction::Reject => "Rejected",
        BulkAction::Delete => "Deleted",
        BulkAction::Download => "Downloaded",
    }
}
