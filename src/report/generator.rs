use crate::clock::{day_abbrev, format_short};
use crate::domain::Task;
use crate::persistence::{ensure_daylist_dir, load_tasks, FileStore};
use crate::report::stats::{today_progress, week_summary, ProgressState};
use crate::session::current_session;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::PathBuf;

/// Render the 7-day summary as markdown.
pub fn render_week_report(tasks: &[Task], today: NaiveDate, owner: &str) -> String {
    let summary = week_summary(tasks, today);
    let progress = today_progress(tasks, today);

    let mut report = String::new();
    report.push_str(&format!("# Weekly Summary - {} ({})\n\n", today, owner));

    // History table, oldest day first
    report.push_str("| Day | Date | Done | Total |\n");
    report.push_str("|-----|------|------|-------|\n");
    for stat in &summary.days {
        let marker = if stat.date == today { " (today)" } else { "" };
        report.push_str(&format!(
            "| {} | {}{} | {} | {} |\n",
            day_abbrev(stat.date),
            format_short(stat.date),
            marker,
            stat.completed_count,
            stat.total_count
        ));
    }
    report.push('\n');

    report.push_str("## Totals\n\n");
    report.push_str(&format!("- **Completed:** {}\n", summary.total_completed));
    report.push_str(&format!("- **Tasks:** {}\n", summary.total_tasks));
    report.push_str(&format!(
        "- **Completion Rate:** {}%\n\n",
        summary.completion_rate
    ));

    report.push_str("## Today\n\n");
    let detail = match progress.state {
        ProgressState::Empty => "No tasks yet for today".to_string(),
        ProgressState::Complete => {
            format!("All {} tasks done", progress.total_count)
        }
        ProgressState::Partial => format!(
            "{} of {} tasks done",
            progress.completed_count, progress.total_count
        ),
    };
    report.push_str(&format!("- {} ({}%)\n", detail, progress.percentage));

    report
}

/// Generate the weekly report for the active session and write it out.
/// Defaults to today and to `summary-YYYY-MM-DD.md` in the daylist directory.
pub fn generate_report(date: Option<NaiveDate>, output_path: Option<PathBuf>) -> Result<PathBuf> {
    let report_date = date.unwrap_or_else(|| Local::now().date_naive());

    let session = current_session()?;
    let store = FileStore::new(ensure_daylist_dir()?);
    let tasks = load_tasks(&store, &session.storage_key())?;

    let report = render_week_report(&tasks, report_date, session.display_name());

    let output = match output_path {
        Some(path) => path,
        None => ensure_daylist_dir()?.join(format!("summary-{}.md", report_date)),
    };
    fs::write(&output, report)?;

    Ok(output)
}
