//! Client dashboard derivation.
//!
//! The dashboard runs a handful of independent scoped queries and derives
//! its headline numbers from the fetched rows; nothing here touches the
//! database.

use serde::Serialize;

use crate::types::Timestamp;

/// How many recent template orders the dashboard fetches.
pub const RECENT_ORDERS_LIMIT: i64 = 3;

/// How many recent projects the dashboard shows.
pub const RECENT_PROJECTS_SHOWN: usize = 3;

/// Read-only view of a project row needed for dashboard derivation.
pub trait ProjectSummary {
    /// Whether the project is still open (PENDING, IN_PROGRESS or REVIEW;
    /// COMPLETED and ARCHIVED are excluded).
    fn is_open(&self) -> bool;
    fn updated_at(&self) -> Timestamp;
}

/// Headline numbers for the client dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub active_projects: i64,
    pub pending_invoices: i64,
    pub unread_messages: i64,
    /// Length of the capped recent-orders fetch (at most
    /// [`RECENT_ORDERS_LIMIT`]), not a true total order count.
    pub template_orders: i64,
}

/// Count the open projects in a fetched set.
pub fn count_active<P: ProjectSummary>(projects: &[P]) -> i64 {
    projects.iter().filter(|p| p.is_open()).count() as i64
}

/// The `n` most recently updated projects, newest first.
pub fn recent<P: ProjectSummary>(projects: &[P], n: usize) -> Vec<&P> {
    let mut refs: Vec<&P> = projects.iter().collect();
    refs.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
    refs.truncate(n);
    refs
}
