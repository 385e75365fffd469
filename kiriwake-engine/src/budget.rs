//! Cooperative limits on a single scan

use crate::error::{EngineError, ExhaustionReason, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared flag a caller sets to abort a running scan
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every scan holding a clone stops at its next step
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Step limit, deadline and cancellation, checked before every cursor advance
#[derive(Debug, Clone, Default)]
pub struct ScanBudget {
    max_steps: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl ScanBudget {
    /// A budget that never runs out
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Stop after `steps` cursor advancements
    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Stop once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stop once `timeout` has elapsed from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Stop when `token` is cancelled
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Whether any limit is set
    pub fn is_unlimited(&self) -> bool {
        self.max_steps.is_none() && self.deadline.is_none() && self.cancel.is_none()
    }

    /// Fail if the scan may not take another step after `steps` steps
    pub fn check(&self, steps: u64) -> Result<()> {
        let exhausted = |reason| EngineError::Exhausted { steps, reason };

        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(exhausted(ExhaustionReason::Cancelled));
        }
        if self.max_steps.is_some_and(|max| steps >= max) {
            return Err(exhausted(ExhaustionReason::StepLimit));
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(exhausted(ExhaustionReason::Deadline));
        }
        Ok(())
    }
}
