//! Analytics module
//!
//! Statistics engine over an order snapshot, its tie-break helpers and the
//! report that gathers every query.

pub mod engine;
pub mod report;
mod tally;
pub mod tie_break;

pub use engine::{CategoryStats, OrdersAnalytics};
pub use report::{AnalyticsReport, CartSummary};
pub use tie_break::{leading_equal_run, leading_equal_run_by, leading_equal_scalars, top_count, Scalar};
