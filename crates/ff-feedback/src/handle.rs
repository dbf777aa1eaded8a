//! Celebration handle
//!
//! Owns the delayed cues of one celebration. Dropping the handle lets them
//! run to completion; `cancel` stops whatever has not fired yet.

use ff_core::PerformanceLevel;
use tokio::task::JoinSet;

/// Task set for one `execute_celebration_feedback` call
#[derive(Debug)]
pub struct CelebrationHandle {
    level: PerformanceLevel,
    tasks: JoinSet<()>,
}

impl CelebrationHandle {
    pub(crate) fn new(level: PerformanceLevel, tasks: JoinSet<()>) -> Self {
        Self { level, tasks }
    }

    pub fn level(&self) -> PerformanceLevel {
        self.level
    }

    /// Scheduled tasks not yet joined (delayed cues and the completion timer)
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Abort every cue that has not fired yet, including `on_complete`
    pub fn cancel(mut self) {
        let pending = self.tasks.len();
        self.tasks.abort_all();
        log::debug!("[Feedback] Cancelled {} pending {} cue(s)", pending, self.level);
    }

    /// Wait for every scheduled cue and the completion callback
    pub async fn wait(mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(err) = joined {
                if err.is_panic() {
                    log::warn!("[Feedback] Celebration cue panicked: {}", err);
                }
            }
        }
    }
}

impl Drop for CelebrationHandle {
    fn drop(&mut self) {
        // Fire-and-forget: pending cues outlive the handle.
        self.tasks.detach_all();
    }
}
