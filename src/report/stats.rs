use crate::clock::falls_on;
use crate::domain::Task;
use chrono::{Duration, NaiveDate};

/// Days covered by the rolling history, today included.
pub const HISTORY_DAYS: i64 = 7;

/// Completed/total counts for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyStat {
    pub date: NaiveDate,
    pub completed_count: usize,
    pub total_count: usize,
}

/// Rolling 7-day history plus its aggregate totals.
#[derive(Debug)]
pub struct WeekSummary {
    /// Exactly 7 entries, oldest first, today last.
    pub days: Vec<DailyStat>,
    pub total_completed: usize,
    pub total_tasks: usize,
    /// Rounded percentage; 0 when there are no tasks in the window.
    pub completion_rate: u32,
}

/// Display state for the today-progress gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    /// No tasks created today.
    Empty,
    /// Some, but not all, of today's tasks are done.
    Partial,
    /// Every task created today is done.
    Complete,
}

/// Today's completion numbers for the progress gauge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayProgress {
    pub percentage: u32,
    pub completed_count: usize,
    pub total_count: usize,
    pub state: ProgressState,
}

/// Completed/total counts over tasks created on `date`.
pub fn daily_stats(tasks: &[Task], date: NaiveDate) -> DailyStat {
    let mut completed_count = 0;
    let mut total_count = 0;

    for task in tasks {
        if falls_on(task.created_at, date) {
            total_count += 1;
            if task.completed {
                completed_count += 1;
            }
        }
    }

    DailyStat {
        date,
        completed_count,
        total_count,
    }
}

/// Stats for the 7 days ending on `today` (oldest first), with totals.
pub fn week_summary(tasks: &[Task], today: NaiveDate) -> WeekSummary {
    let mut days = Vec::with_capacity(HISTORY_DAYS as usize);
    let mut total_completed = 0;
    let mut total_tasks = 0;

    for offset in (0..HISTORY_DAYS).rev() {
        let stat = daily_stats(tasks, today - Duration::days(offset));
        total_completed += stat.completed_count;
        total_tasks += stat.total_count;
        days.push(stat);
    }

    WeekSummary {
        days,
        total_completed,
        total_tasks,
        completion_rate: rate(total_completed, total_tasks),
    }
}

/// Progress over today's bucket only.
pub fn today_progress(tasks: &[Task], today: NaiveDate) -> TodayProgress {
    let stat = daily_stats(tasks, today);

    let state = if stat.total_count == 0 {
        ProgressState::Empty
    } else if stat.completed_count == stat.total_count {
        ProgressState::Complete
    } else {
        ProgressState::Partial
    };

    TodayProgress {
        percentage: rate(stat.completed_count, stat.total_count),
        completed_count: stat.completed_count,
        total_count: stat.total_count,
        state,
    }
}

/// Rounded percentage, defined as 0 when the total is 0.
fn rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn task(text: &str, created_at: DateTime<Local>, completed: bool) -> Task {
        Task {
            completed,
            ..Task::new(text.to_string(), created_at)
        }
    }

    #[test]
    fn test_today_progress_with_no_tasks() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let progress = today_progress(&[], today);

        assert_eq!(progress.percentage, 0);
        assert_eq!(progress.completed_count, 0);
        assert_eq!(progress.total_count, 0);
        assert_eq!(progress.state, ProgressState::Empty);
    }

    #[test]
    fn test_today_progress_all_complete() {
        let now = noon(2024, 3, 15);
        let tasks = vec![
            task("a", now, true),
            task("b", now, true),
            task("c", now, true),
        ];

        let progress = today_progress(&tasks, now.date_naive());
        assert_eq!(progress.percentage, 100);
        assert_eq!(progress.completed_count, 3);
        assert_eq!(progress.total_count, 3);
        assert_eq!(progress.state, ProgressState::Complete);
    }

    #[test]
    fn test_today_progress_partial_rounds() {
        let now = noon(2024, 3, 15);
        let tasks = vec![
            task("a", now, true),
            task("b", now, false),
            task("c", now, false),
            task("d", now, false),
        ];

        let progress = today_progress(&tasks, now.date_naive());
        assert_eq!(progress.percentage, 25);
        assert_eq!(progress.state, ProgressState::Partial);

        // 2 of 3 rounds up from 66.67
        let tasks = vec![
            task("a", now, true),
            task("b", now, true),
            task("c", now, false),
        ];
        assert_eq!(today_progress(&tasks, now.date_naive()).percentage, 67);
    }

    #[test]
    fn test_today_progress_ignores_other_days() {
        let now = noon(2024, 3, 15);
        let tasks = vec![
            task("today", now, false),
            task("yesterday", now - Duration::days(1), true),
        ];

        let progress = today_progress(&tasks, now.date_naive());
        assert_eq!(progress.total_count, 1);
        assert_eq!(progress.completed_count, 0);
    }

    #[test]
    fn test_week_summary_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let summary = week_summary(&[], today);

        assert_eq!(summary.days.len(), 7);
        assert_eq!(summary.days[0].date, today - Duration::days(6));
        assert_eq!(summary.days[6].date, today);
        for pair in summary.days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert_eq!(summary.completion_rate, 0);
    }

    #[test]
    fn test_week_summary_aggregates() {
        let now = noon(2024, 3, 15);
        let tasks = vec![
            task("a", now, true),
            task("b", now, false),
            task("c", now - Duration::days(2), true),
            task("d", now - Duration::days(6), true),
            // Outside the window: contributes nothing
            task("e", now - Duration::days(7), true),
        ];

        let summary = week_summary(&tasks, now.date_naive());
        assert_eq!(summary.total_tasks, 4);
        assert_eq!(summary.total_completed, 3);
        assert_eq!(summary.completion_rate, 75);
        assert_eq!(summary.days[0].total_count, 1); // six days ago
        assert_eq!(summary.days[4].completed_count, 1); // two days ago
        assert_eq!(summary.days[6].total_count, 2); // today
    }

    #[test]
    fn test_monday_task_counts_under_monday_on_tuesday() {
        let monday = noon(2024, 3, 11);
        let tasks = vec![task("Buy milk", monday, false)];

        let tuesday = (monday + Duration::days(1)).date_naive();
        let summary = week_summary(&tasks, tuesday);

        // Second-to-last entry is Monday
        assert_eq!(summary.days[5].date, monday.date_naive());
        assert_eq!(summary.days[5].total_count, 1);
        assert_eq!(summary.days[6].total_count, 0);
    }
}
