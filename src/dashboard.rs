//! The dashboard session: the three-state fetch lifecycle plus the
//! generation-stamped slot that keeps a stale response from overwriting a
//! newer one.

use tracing::debug;

use crate::client::{FetchError, HierarchyClient};
use crate::hierarchy::{aggregate, scoped_view, DashboardCounts, HierarchyError, HierarchySnapshot, ScopedView};
use crate::types::Scope;

/// Ticket stamped onto one in-flight fetch. Only the ticket matching the
/// latest generation may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Fetch lifecycle: not yet fetched, fetched, or failed.
#[derive(Debug, Clone)]
pub enum SessionState {
    Empty,
    Ready(HierarchySnapshot),
    Failed(String),
}

/// One dashboard view over the hierarchy: holds the current scope, the latest
/// snapshot (or failure), and the request generation counter. Single-threaded;
/// the slot is plain mutable state, no locking.
#[derive(Debug)]
pub struct DashboardSession {
    scope: Scope,
    latest: u64,
    state: SessionState,
}

impl DashboardSession {
    pub fn new(scope: Scope) -> Self {
        Self { scope, latest: 0, state: SessionState::Empty }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Change the vantage point. Counts and view re-derive from the held
    /// snapshot on the next read; no re-fetch is implied.
    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
    }

    /// Stamp a new fetch. Any previously issued ticket becomes stale.
    pub fn begin_fetch(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Apply a completed fetch if its ticket is still the latest generation.
    /// Returns whether the result was applied; stale results are dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: Generation,
        result: Result<HierarchySnapshot, FetchError>,
    ) -> bool {
        if ticket.0 != self.latest {
            debug!(ticket = ticket.0, latest = self.latest, "discarding stale hierarchy response");
            return false;
        }
        self.state = match result {
            Ok(snapshot) => SessionState::Ready(snapshot),
            Err(err) => SessionState::Failed(err.to_string()),
        };
        true
    }

    /// Fetch-and-apply in one step for blocking callers.
    pub fn refresh(&mut self, client: &HierarchyClient, state_id: u64, party_id: Option<u64>) -> bool {
        let ticket = self.begin_fetch();
        let result = client.fetch(state_id, party_id);
        self.complete_fetch(ticket, result)
    }

    /// Counts for the current scope. All-zero while no data is loaded or the
    /// last fetch failed; never stale or partial.
    pub fn counts(&self) -> Result<DashboardCounts, HierarchyError> {
        match &self.state {
            SessionState::Ready(snapshot) => aggregate(snapshot, self.scope),
            SessionState::Empty | SessionState::Failed(_) => Ok(DashboardCounts::default()),
        }
    }

    /// The scoped view, once data is loaded.
    pub fn view(&self) -> Option<ScopedView<'_>> {
        match &self.state {
            SessionState::Ready(snapshot) => Some(scoped_view(snapshot, self.scope)),
            SessionState::Empty | SessionState::Failed(_) => None,
        }
    }

    pub fn snapshot(&self) -> Option<&HierarchySnapshot> {
        match &self.state {
            SessionState::Ready(snapshot) => Some(snapshot),
            SessionState::Empty | SessionState::Failed(_) => None,
        }
    }

    /// The stored failure message, if the last applied fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            SessionState::Empty | SessionState::Ready(_) => None,
        }
    }
}
