use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
        UiMode::Confirming => handle_confirm_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') => {
            app.start_add_task();
            Ok(false)
        }

        // Edit task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }

        // Delete task (with confirmation)
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.request_delete_selected();
            Ok(false)
        }

        // Reset today's tasks (with confirmation)
        KeyCode::Char('R') => {
            app.request_reset_today();
            Ok(false)
        }

        // Clear tasks older than yesterday (with confirmation)
        KeyCode::Char('C') => {
            app.request_clear_old();
            Ok(false)
        }

        // Toggle light/dark theme
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            Ok(false)
        }

        // Sign out of the active profile (with confirmation)
        KeyCode::Char('L') => {
            app.request_logout();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add/edit form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Backspace => {
            if let Some(form) = app.input_form.as_mut() {
                form.text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.input_form.as_mut() {
                form.text.push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handle keys while a confirmation modal is open
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_accept(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_cancel(),
        _ => {}
    }
    Ok(false)
}
