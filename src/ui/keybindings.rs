use crate::app::AppState;
use crate::ui::styles::dim_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let mut hints = vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Space toggle   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("R reset today   "),
        Span::raw("C clear old   "),
        Span::raw("t theme   "),
    ];
    if app.session.identity().is_some() {
        hints.push(Span::raw("L logout   "));
    }
    hints.push(Span::raw("q quit"));

    let paragraph = Paragraph::new(Line::from(hints)).style(dim_style(app.theme));
    f.render_widget(paragraph, area);
}
