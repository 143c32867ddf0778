pub mod stage1_load;
pub mod stage2_aggregate;
pub mod stage3_metrics;
pub mod stage4_report;
