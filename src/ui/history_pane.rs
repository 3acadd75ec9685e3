use crate::app::AppState;
use crate::clock::day_abbrev;
use crate::report::WeekSummary;
use crate::ui::styles::{
    border_style, default_style, dim_style, history_today_style, title_style,
};
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the 7-day history pane: one column per day, oldest on the left,
/// plus the aggregate summary underneath.
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let summary = app.history();
    let today = app.store.clock().today();

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    // Column rows: day abbreviation, day-of-month, completed/total
    let mut names = Vec::new();
    let mut dates = Vec::new();
    let mut counts = Vec::new();
    for stat in &summary.days {
        let style = if stat.date == today {
            history_today_style(theme)
        } else {
            default_style(theme)
        };
        names.push(Span::styled(format!("{:>5}", day_abbrev(stat.date)), style));
        dates.push(Span::styled(format!("{:>5}", stat.date.day()), style));
        counts.push(Span::styled(
            format!("{:>5}", format!("{}/{}", stat.completed_count, stat.total_count)),
            style,
        ));
    }
    lines.push(Line::from(names));
    lines.push(Line::from(dates));
    lines.push(Line::from(counts));

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        summary_line(&summary),
        dim_style(theme),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(" Last 7 Days ", title_style(theme))),
    );
    f.render_widget(paragraph, area);
}

fn summary_line(summary: &WeekSummary) -> String {
    format!(
        " {} done · {} total · {}% completion",
        summary.total_completed, summary.total_tasks, summary.completion_rate
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::week_summary;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_line_zero_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let summary = week_summary(&[], today);
        assert_eq!(summary_line(&summary), " 0 done · 0 total · 0% completion");
    }
}
