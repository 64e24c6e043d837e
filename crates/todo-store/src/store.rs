//! Application State
//!
//! `TodoStore` owns the task list, the current filter and theme, and the
//! storage they are mirrored into. Every mutation rewrites the task slot in
//! full right after it is applied.

use crate::action::{ActionOutcome, TaskAction};
use crate::config::StoreConfig;
use crate::domain::{DomainResult, FilterMode, Task, TaskId, Theme};
use crate::repository::{SlotStorage, TaskRepository, ThemeRepository};
use crate::task_list::TaskList;

#[derive(Debug)]
pub struct TodoStore<S> {
    storage: S,
    tasks_repo: TaskRepository,
    /// `None` when the theme is not remembered across reloads
    theme_repo: Option<ThemeRepository>,
    list: TaskList,
    filter: FilterMode,
    theme: Theme,
}

impl<S: SlotStorage> TodoStore<S> {
    /// Load whatever the slots hold. Never fails: bad data loads as empty.
    pub fn open(storage: S, config: &StoreConfig) -> Self {
        let tasks_repo = TaskRepository::new(config.tasks_key.clone());
        let theme_repo = config
            .persist_theme
            .then(|| ThemeRepository::new(config.theme_key.clone()));

        let list = TaskList::from_records(tasks_repo.load(&storage));
        let theme = theme_repo
            .as_ref()
            .map(|repo| repo.load(&storage))
            .unwrap_or_default();

        tracing::info!(tasks = list.len(), theme = theme.as_str(), "store opened");

        Self {
            storage,
            tasks_repo,
            theme_repo,
            list,
            filter: FilterMode::default(),
            theme,
        }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Whether the row for `task` is currently shown
    pub fn is_visible(&self, task: &Task) -> bool {
        self.filter.shows(task.completed)
    }

    /// Overwrite the task slot with the whole collection
    pub fn save(&mut self) -> DomainResult<()> {
        self.tasks_repo.save(&mut self.storage, &self.list.snapshot())?;
        Ok(())
    }

    /// Save after a mutation. A failed write keeps the in-memory change.
    fn persist(&mut self) {
        if let Err(error) = self.save() {
            tracing::error!(%error, key = self.tasks_repo.key(), "failed to persist tasks");
        }
    }

    pub fn add(&mut self, text: &str) -> DomainResult<TaskId> {
        let id = self.list.add(text)?;
        self.persist();
        Ok(id)
    }

    /// Returns whether the text changed
    pub fn edit(&mut self, id: TaskId, replacement: Option<&str>) -> DomainResult<bool> {
        let changed = self.list.edit(id, replacement)?;
        if changed {
            self.persist();
        }
        Ok(changed)
    }

    pub fn delete(&mut self, id: TaskId) -> DomainResult<Task> {
        let removed = self.list.remove(id)?;
        self.persist();
        Ok(removed)
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> DomainResult<bool> {
        let completed = self.list.toggle(id)?;
        self.persist();
        Ok(completed)
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// Flip the theme, remember it, and rewrite the task slot as well
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Some(repo) = &self.theme_repo {
            if let Err(error) = repo.save(&mut self.storage, self.theme) {
                tracing::error!(%error, "failed to persist theme");
            }
        }
        self.persist();
        self.theme
    }

    /// Single entry point for user events
    pub fn dispatch(&mut self, action: TaskAction) -> ActionOutcome {
        let name = action.name();
        tracing::debug!(action = name, "dispatch");

        let result = match action {
            TaskAction::Add(text) => self.add(&text).map(|_| ActionOutcome::Saved),
            TaskAction::Edit { id, replacement } => {
                self.edit(id, replacement.as_deref()).map(|changed| {
                    if changed {
                        ActionOutcome::Saved
                    } else {
                        ActionOutcome::Unchanged
                    }
                })
            }
            TaskAction::Delete(id) => self.delete(id).map(|_| ActionOutcome::Saved),
            TaskAction::ToggleComplete(id) => self.toggle_complete(id).map(|_| ActionOutcome::Saved),
            TaskAction::SetFilter(mode) => {
                self.set_filter(mode);
                Ok(ActionOutcome::DisplayOnly)
            }
            TaskAction::ToggleTheme => {
                self.toggle_theme();
                Ok(ActionOutcome::Saved)
            }
        };

        match result {
            Ok(outcome) => outcome,
            Err(error) if error.is_user_facing() => ActionOutcome::Rejected(error.to_string()),
            Err(error) => {
                tracing::warn!(%error, action = name, "action ignored");
                ActionOutcome::Unchanged
            }
        }
    }
}
