use crate::app::AppState;
use crate::report::ProgressState;
use crate::ui::styles::{border_style, dim_style, gauge_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render today's progress gauge with its detail line.
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let progress = app.progress();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(" Today's Progress ", title_style(theme)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(gauge_style(theme))
        .percent(progress.percentage as u16)
        .label(format!("{}%", progress.percentage));
    f.render_widget(gauge, chunks[0]);

    let detail = progress_detail(&progress);
    let paragraph = Paragraph::new(detail).style(dim_style(theme));
    f.render_widget(paragraph, chunks[1]);
}

/// One of three mutually exclusive detail messages.
fn progress_detail(progress: &crate::report::TodayProgress) -> String {
    match progress.state {
        ProgressState::Empty => "No tasks yet for today".to_string(),
        ProgressState::Complete => format!("All {} tasks done, well done!", progress.total_count),
        ProgressState::Partial => format!(
            "{} of {} tasks done",
            progress.completed_count, progress.total_count
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TodayProgress;

    fn progress(completed: usize, total: usize, state: ProgressState) -> TodayProgress {
        TodayProgress {
            percentage: if total == 0 {
                0
            } else {
                (100 * completed / total) as u32
            },
            completed_count: completed,
            total_count: total,
            state,
        }
    }

    #[test]
    fn test_progress_detail_states_are_distinct() {
        let empty = progress_detail(&progress(0, 0, ProgressState::Empty));
        let partial = progress_detail(&progress(1, 4, ProgressState::Partial));
        let complete = progress_detail(&progress(3, 3, ProgressState::Complete));

        assert_eq!(empty, "No tasks yet for today");
        assert_eq!(partial, "1 of 4 tasks done");
        assert!(complete.contains("All 3 tasks done"));
    }
}
