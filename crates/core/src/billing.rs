//! Derived invoice aggregates.
//!
//! Revenue numbers are computed from the fetched invoice list on demand;
//! they are never stored.

use serde::Serialize;

/// Read-only view of an invoice row needed for revenue derivation.
pub trait RevenueLine {
    fn amount(&self) -> f64;
    /// Whether the invoice counts toward collected revenue (PAID).
    fn is_paid(&self) -> bool;
    /// Whether the invoice is still outstanding (SENT or OVERDUE).
    fn is_outstanding(&self) -> bool;
}

/// Collected and outstanding totals over an invoice set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueTotals {
    pub total_revenue: f64,
    pub total_pending: f64,
}

/// Fold an invoice list into revenue totals.
///
/// DRAFT and CANCELLED invoices contribute to neither bucket.
pub fn revenue_totals<L: RevenueLine>(invoices: &[L]) -> RevenueTotals {
    let mut totals = RevenueTotals {
        total_revenue: 0.0,
        total_pending: 0.0,
    };
    for inv in invoices {
        if inv.is_paid() {
            totals.total_revenue += inv.amount();
        } else if inv.is_outstanding() {
            totals.total_pending += inv.amount();
        }
    }
    totals
}
