//! The progressive aggregation engine
//!
//! Takes a sparse, possibly unordered sequence of day records covering a
//! calendar month and produces, for every record, running month-to-date
//! fact and plan totals plus deviation and percentage-of-plan figures.
//!
//! The pass is pure and synchronous: the single storage read happens
//! *before* the engine runs, and nothing here writes, locks or suspends.
//! Concurrent passes over the same table are independent by construction.

pub mod aggregator;
pub mod calc;
pub mod plan;
pub mod window;

pub use aggregator::aggregate;
pub use window::restrict_to_window;
