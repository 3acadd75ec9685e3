use crate::clock::SystemClock;
use crate::domain::{bucket, selectable, Buckets, Theme, UiMode};
use crate::persistence::{ensure_daylist_dir, theme_key, FileStore, KvStore};
use crate::report::{today_progress, week_summary, TodayProgress, WeekSummary};
use crate::session::{self, Session};
use crate::store::TaskStore;
use anyhow::Result;

/// Destructive action waiting on the user's confirmation. The store
/// operations themselves run unconditionally; the gate lives here.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteTask(String),
    ResetToday,
    ClearOld,
    Logout,
}

/// Confirmation modal state.
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Input form state for adding or editing a task.
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
    /// Id of the task being edited; None when adding.
    pub editing_id: Option<String>,
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub session: Session,
    pub theme: Theme,
    settings: Box<dyn KvStore>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub confirm: Option<ConfirmState>,
    /// Most recent persistence/session failure, shown in the status line.
    /// The in-memory collection stays authoritative regardless.
    pub status: Option<String>,
}

impl AppState {
    pub fn new(
        store: TaskStore,
        session: Session,
        theme: Theme,
        settings: Box<dyn KvStore>,
    ) -> Self {
        Self {
            store,
            session,
            theme,
            settings,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            confirm: None,
            status: None,
        }
    }

    /// Current bucket view of the collection.
    pub fn buckets(&self) -> Buckets<'_> {
        bucket(self.store.tasks(), self.store.clock())
    }

    /// Today's progress view model.
    pub fn progress(&self) -> TodayProgress {
        today_progress(self.store.tasks(), self.store.clock().today())
    }

    /// 7-day history view model.
    pub fn history(&self) -> WeekSummary {
        week_summary(self.store.tasks(), self.store.clock().today())
    }

    /// Id of the task under the cursor, in display order.
    pub fn selected_task_id(&self) -> Option<String> {
        let buckets = self.buckets();
        selectable(&buckets)
            .get(self.selected_index)
            .map(|(task, _)| task.id.clone())
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let buckets = self.buckets();
        if self.selected_index + 1 < buckets.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.buckets().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Toggle completion on the selected task.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Err(e) = self.store.toggle(&id) {
                self.note_error(e);
            }
        }
    }

    /// Open the input form for a new task.
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            text: String::new(),
            editing_id: None,
        });
        self.ui_mode = UiMode::AddingTask;
        self.status = None;
    }

    /// Open the input form prefilled with the selected task's text.
    pub fn start_edit_task(&mut self) {
        let selected = {
            let buckets = self.buckets();
            selectable(&buckets)
                .get(self.selected_index)
                .map(|(task, _)| (task.text.clone(), task.id.clone()))
        };
        let Some((text, id)) = selected else {
            return;
        };
        self.input_form = Some(InputFormState {
            text,
            editing_id: Some(id),
        });
        self.ui_mode = UiMode::EditingTask;
        self.status = None;
    }

    /// Submit the input form. Blank text is a silent no-op in the store, so
    /// the form simply closes without mutating anything.
    pub fn submit_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            return;
        };

        let result = match &form.editing_id {
            Some(id) => self.store.edit(id, &form.text),
            None => self.store.add(&form.text),
        };

        match result {
            // A new task is prepended under Today, so select the top row
            Ok(true) if form.editing_id.is_none() => self.selected_index = 0,
            Ok(_) => {}
            Err(e) => self.note_error(e),
        }

        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Close the input form without submitting.
    pub fn cancel_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Ask before deleting the selected task.
    pub fn request_delete_selected(&mut self) {
        let selected = {
            let buckets = self.buckets();
            selectable(&buckets)
                .get(self.selected_index)
                .map(|(task, _)| (task.id.clone(), task.text.clone()))
        };
        let Some((id, text)) = selected else {
            return;
        };
        self.open_confirm(ConfirmAction::DeleteTask(id), format!("Delete \"{text}\"?"));
    }

    /// Ask before removing all of today's tasks.
    pub fn request_reset_today(&mut self) {
        let count = self.buckets().today.len();
        if count == 0 {
            return;
        }
        self.open_confirm(
            ConfirmAction::ResetToday,
            format!("Remove all {} of today's tasks?", count),
        );
    }

    /// Ask before clearing everything older than yesterday.
    pub fn request_clear_old(&mut self) {
        let count = self.buckets().other.len();
        if count == 0 {
            return;
        }
        self.open_confirm(
            ConfirmAction::ClearOld,
            format!("Remove all {} tasks older than yesterday?", count),
        );
    }

    /// Ask before signing out of the active profile.
    pub fn request_logout(&mut self) {
        if self.session.identity().is_none() {
            return;
        }
        self.open_confirm(
            ConfirmAction::Logout,
            format!("Sign out of \"{}\"?", self.session.display_name()),
        );
    }

    fn open_confirm(&mut self, action: ConfirmAction, message: String) {
        self.confirm = Some(ConfirmState { action, message });
        self.ui_mode = UiMode::Confirming;
        self.status = None;
    }

    /// Run the pending confirmed action.
    pub fn confirm_accept(&mut self) {
        let Some(confirm) = self.confirm.take() else {
            return;
        };
        self.ui_mode = UiMode::Normal;

        let result = match confirm.action {
            ConfirmAction::DeleteTask(id) => self.store.remove(&id).map(|_| ()),
            ConfirmAction::ResetToday => self.store.reset_today().map(|_| ()),
            ConfirmAction::ClearOld => self.store.clear_old().map(|_| ()),
            ConfirmAction::Logout => self.logout(),
        };

        if let Err(e) = result {
            self.note_error(e);
        }
        self.clamp_selection();
    }

    /// Dismiss the confirmation modal without acting.
    pub fn confirm_cancel(&mut self) {
        self.confirm = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Sign out and swap in the anonymous collection wholesale. The old
    /// profile's tasks stay on disk under their own key.
    fn logout(&mut self) -> Result<()> {
        session::sign_out()?;
        self.session = Session::Anonymous;

        let backend = FileStore::new(ensure_daylist_dir()?);
        self.store = TaskStore::load(
            Box::new(backend),
            self.session.storage_key(),
            Box::new(SystemClock),
        )?;
        self.selected_index = 0;
        Ok(())
    }

    /// Flip the colour scheme and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.settings.save(theme_key(), self.theme.as_str()) {
            self.note_error(e);
        }
    }

    fn note_error(&mut self, e: anyhow::Error) {
        self.status = Some(format!("Save failed: {e:#}"));
    }
}
