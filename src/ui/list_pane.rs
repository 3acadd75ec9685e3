use crate::app::AppState;
use crate::clock::format_short;
use crate::domain::{selectable, DayBucket, Task, Theme};
use crate::ui::styles::{
    border_style, completed_style, default_style, dim_style, heading_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the bucketed checklist pane.
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let buckets = app.buckets();
    let rows = selectable(&buckets);

    let mut items: Vec<ListItem> = Vec::new();
    let mut current_bucket: Option<DayBucket> = None;

    for (row_index, (task, bucket)) in rows.iter().copied().enumerate() {
        // Heading whenever the bucket changes
        if current_bucket != Some(bucket) {
            current_bucket = Some(bucket);
            let count = buckets.of(bucket).len();
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{} ({})", bucket.heading(), count),
                heading_style(theme),
            ))));
        }

        let line = create_task_line(task, bucket, theme);
        let style = if row_index == app.selected_index {
            selected_style(theme)
        } else if task.completed {
            completed_style(theme)
        } else {
            default_style(theme)
        };
        items.push(ListItem::new(line).style(style));
    }

    if rows.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            "No tasks yet. Press 'a' to add one.",
            dim_style(theme),
        ))));
    }

    let title = format!(" Daylist — {} ", app.session.display_name());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme))
            .title(Span::styled(title, title_style(theme))),
    );

    f.render_widget(list, area);
}

/// Create a single checklist row: checkbox, text, short creation date.
fn create_task_line(task: &Task, bucket: DayBucket, theme: Theme) -> Line<'static> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let mut spans = vec![Span::raw(checkbox.to_string()), Span::raw(task.text.clone())];

    // Today's date is implied by its heading; other rows show theirs
    if bucket != DayBucket::Today {
        spans.push(Span::styled(
            format!("  {}", format_short(task.created_at.date_naive())),
            dim_style(theme),
        ));
    }

    Line::from(spans)
}
