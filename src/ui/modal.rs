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

/// Render the confirmation modal for destructive actions.
pub fn render_confirm_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(confirm) = &app.confirm {
        let theme = app.theme;
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("  {}", confirm.message)));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  This cannot be undone."));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("  [y]", modal_title_style(theme)),
            Span::raw(" Yes  "),
            Span::styled("[n]", modal_title_style(theme)),
            Span::raw(" No  "),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Are you sure? ", modal_title_style(theme)))
                    .style(modal_bg_style(theme)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
