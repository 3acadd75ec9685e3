pub mod generator;
pub mod stats;

pub use generator::{generate_report, render_week_report};
pub use stats::{
    daily_stats, today_progress, week_summary, DailyStat, ProgressState, TodayProgress,
    WeekSummary,
};
