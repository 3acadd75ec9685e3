use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding or editing a task.
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let theme = app.theme;
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if form.editing_id.is_some() {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(Line::raw("Task:"));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.text.clone(), modal_title_style(theme)),
            Span::styled("█", modal_title_style(theme)), // Cursor
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Enter to save  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style(theme)))
                    .style(modal_bg_style(theme)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
