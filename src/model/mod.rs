pub mod metrics;
pub mod records;
pub mod totals;
