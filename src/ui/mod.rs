pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod progress_pane;
pub mod styles;

use crate::app::AppState;
use crate::ui::styles::{dim_style, error_style};
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_confirm_modal;
use progress_pane::render_progress_pane;
use ratatui::{text::Span, widgets::Paragraph, Frame};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    // Render panes
    render_list_pane(f, app, layout.list_area);
    render_progress_pane(f, app, layout.progress_area);
    render_history_pane(f, app, layout.history_area);

    // Status line: last error, if any
    let status = match &app.status {
        Some(message) => Paragraph::new(Span::raw(format!(" {message}")))
            .style(error_style(app.theme)),
        None => Paragraph::new(Span::raw("")).style(dim_style(app.theme)),
    };
    f.render_widget(status, layout.status_area);

    // Render confirmation modal if active
    if app.confirm.is_some() {
        render_confirm_modal(f, app, size);
    }

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
