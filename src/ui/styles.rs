use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Black),
        Theme::Dark => Style::default().fg(Color::White),
    }
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match theme {
        Theme::Light => base.fg(Color::White).bg(Color::Blue),
        Theme::Dark => base.fg(Color::Black).bg(Color::LightCyan),
    }
}

/// Completed task style (struck through)
pub fn completed_style(theme: Theme) -> Style {
    let base = Style::default().add_modifier(Modifier::CROSSED_OUT);
    match theme {
        Theme::Light => base.fg(Color::DarkGray),
        Theme::Dark => base.fg(Color::Gray),
    }
}

/// Bucket section heading style
pub fn heading_style(theme: Theme) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match theme {
        Theme::Light => base.fg(Color::Blue),
        Theme::Dark => base.fg(Color::Cyan),
    }
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    heading_style(theme)
}

/// Border style
pub fn border_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::DarkGray),
        Theme::Dark => Style::default().fg(Color::Gray),
    }
}

/// Dimmed style for dates and hints
pub fn dim_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Gray),
        Theme::Dark => Style::default().fg(Color::DarkGray),
    }
}

/// Progress gauge style
pub fn gauge_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Green).bg(Color::Gray),
        Theme::Dark => Style::default().fg(Color::Green).bg(Color::DarkGray),
    }
}

/// Today's column highlight in the history pane
pub fn history_today_style(theme: Theme) -> Style {
    heading_style(theme)
}

/// Modal background style
pub fn modal_bg_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().bg(Color::Gray).fg(Color::Black),
        Theme::Dark => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

/// Modal title style
pub fn modal_title_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Error message style
pub fn error_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}
