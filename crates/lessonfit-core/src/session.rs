//! The current plan of an interactive session.
//!
//! Every generation request takes a ticket before it starts. When it
//! finishes, its result only replaces the current plan if no newer request
//! has been started in the meantime; an older in-flight result is dropped.

use std::sync::Mutex;

use tracing::debug;

use crate::planner::LearningPlan;

/// Identifies one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct Inner {
    latest: u64,
    current: Option<LearningPlan>,
}

/// Holds at most one plan, replaced wholesale.
#[derive(Debug, Default)]
pub struct PlanSession {
    inner: Mutex<Inner>,
}

impl PlanSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Inner is never left half-written, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a request. Supersedes every ticket handed out before.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.latest += 1;
        Ticket(inner.latest)
    }

    /// Install `plan` if `ticket` is still the latest request.
    ///
    /// Returns `false` when the result was superseded and discarded.
    pub fn commit(&self, ticket: Ticket, plan: LearningPlan) -> bool {
        let mut inner = self.lock();
        if ticket.0 != inner.latest {
            debug!(ticket = ticket.0, latest = inner.latest, "discarding superseded plan");
            return false;
        }
        inner.current = Some(plan);
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.lock().latest == ticket.0
    }

    /// Snapshot of the current plan.
    pub fn current(&self) -> Option<LearningPlan> {
        self.lock().current.clone()
    }

    pub fn clear(&self) {
        self.lock().current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Curriculum;
    use crate::planner::Planner;

    async fn plan(goal: &str) -> LearningPlan {
        Planner::offline().assemble(goal, Curriculum::default()).await
    }

    #[tokio::test]
    async fn latest_ticket_wins() {
        let session = PlanSession::new();
        let first = session.begin();
        let second = session.begin();
        assert!(first < second);
        assert!(!session.is_current(first));

        assert!(session.commit(second, plan("Rust in 2 days").await));
        assert!(!session.commit(first, plan("Go in 5 days").await));

        let current = session.current().unwrap();
        assert_eq!(current.goal, "Rust in 2 days");
    }

    #[tokio::test]
    async fn commit_replaces_wholesale() {
        let session = PlanSession::new();
        let t = session.begin();
        assert!(session.commit(t, plan("Rust in 2 days").await));
        let t = session.begin();
        assert!(session.commit(t, plan("SQL in 3 hours").await));
        let current = session.current().unwrap();
        assert_eq!(current.goal, "SQL in 3 hours");
        assert!(current.duration_constraint.is_hours());
    }

    #[test]
    fn empty_until_committed() {
        let session = PlanSession::new();
        let _ = session.begin();
        assert!(session.current().is_none());
        session.clear();
        assert!(session.current().is_none());
    }
}
