//! Per-tool runners
//!
//! One runner per gate: config and evidence flow in, report lines and an
//! exit status flow out. No component here calls back into an earlier one.

mod audit;
mod watch;

pub use audit::AuditRunner;
pub use watch::WatchRunner;
