//! Task list state machine.

use tracing::{debug, info};

use crate::application::input::InputBuffer;
use crate::application::services::PreferencesService;
use crate::domain::entities::{Task, TaskList};
use crate::domain::ports::IdGenerator;

/// Everything the screen shows, plus the persistence it mirrors to.
///
/// Every mutation of the task list or theme flag is written through to
/// [`PreferencesService`] before the method returns.
pub struct TodoState {
    tasks: TaskList,
    input: InputBuffer,
    is_dark: bool,
    credits_open: bool,
    preferences: PreferencesService,
    ids: Box<dyn IdGenerator>,
}

impl TodoState {
    /// Builds initial state from whatever was persisted.
    #[must_use]
    pub fn load(preferences: PreferencesService, ids: Box<dyn IdGenerator>) -> Self {
        let tasks = TaskList::from(preferences.load_tasks());
        let is_dark = preferences.load_theme();

        info!(tasks = tasks.len(), is_dark, "State restored");

        Self {
            tasks,
            input: InputBuffer::new(),
            is_dark,
            credits_open: false,
            preferences,
            ids,
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Mutable access for character-level editing. Never persisted.
    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub const fn credits_open(&self) -> bool {
        self.credits_open
    }

    /// Replaces the input text.
    pub fn edit_input(&mut self, text: impl Into<String>) {
        self.input.set_value(text);
    }

    /// Appends a task from the input text.
    ///
    /// Blank input is ignored. The stored text is kept as typed.
    pub fn add_task(&mut self) -> Option<Task> {
        if !Task::is_valid_text(self.input.value()) {
            debug!("Ignoring blank task input");
            return None;
        }

        let task = Task::new(self.ids.next_id(), self.input.value());
        self.tasks.push(task.clone());
        self.input.clear();
        self.preferences.save_tasks(self.tasks.as_slice());

        debug!(id = task.id, total = self.tasks.len(), "Task added");
        Some(task)
    }

    /// Checks off `task`, which removes it. Matches on id and text.
    pub fn complete_task(&mut self, task: &Task) -> Option<Task> {
        let removed = self.tasks.remove(task)?;
        Some(self.completed(removed))
    }

    /// Checks off the task shown at row `index`.
    pub fn complete_at(&mut self, index: usize) -> Option<Task> {
        let removed = self.tasks.remove_at(index)?;
        Some(self.completed(removed))
    }

    fn completed(&self, removed: Task) -> Task {
        self.preferences.save_tasks(self.tasks.as_slice());

        debug!(id = removed.id, total = self.tasks.len(), "Task completed");
        removed
    }

    /// Flips and persists the theme flag, returning the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.preferences.save_theme(self.is_dark);

        info!(is_dark = self.is_dark, "Theme toggled");
        self.is_dark
    }

    /// Flips credits dialog visibility, returning whether it is now open.
    pub fn toggle_credits(&mut self) -> bool {
        self.credits_open = !self.credits_open;
        self.credits_open
    }

    pub fn close_credits(&mut self) {
        self.credits_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::services::preferences_service::{TASKS_KEY, THEME_KEY};
    use crate::domain::ports::mocks::{
        FixedIdGenerator, MockPreferenceStorePort, SequentialIdGenerator,
    };
    use crate::infrastructure::{FilePreferenceStore, MemoryPreferenceStore};
    use tempfile::tempdir;

    fn load(store: &Arc<MemoryPreferenceStore>) -> TodoState {
        TodoState::load(
            PreferencesService::new(store.clone()),
            Box::new(SequentialIdGenerator::default()),
        )
    }

    fn add(state: &mut TodoState, text: &str) -> Option<Task> {
        state.edit_input(text);
        state.add_task()
    }

    fn texts(state: &TodoState) -> Vec<&str> {
        state.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    fn persisted(store: &Arc<MemoryPreferenceStore>) -> Vec<Task> {
        PreferencesService::new(store.clone()).load_tasks()
    }

    #[test]
    fn test_empty_store_starts_empty_and_light() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let state = load(&store);

        assert!(state.tasks().is_empty());
        assert!(!state.is_dark());
        assert!(!state.credits_open());
        assert!(state.input().is_empty());
    }

    #[test]
    fn test_adds_keep_count_and_order() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);

        for text in ["one", "two", "three", "four"] {
            assert!(add(&mut state, text).is_some());
        }

        assert_eq!(texts(&state), ["one", "two", "three", "four"]);
        assert_eq!(persisted(&store), state.tasks().as_slice());
    }

    #[test]
    fn test_add_clears_input_and_keeps_text_verbatim() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);

        let task = add(&mut state, "  Buy milk ").unwrap();

        assert_eq!(task.text, "  Buy milk ");
        assert!(state.input().is_empty());
    }

    #[test]
    fn test_blank_add_is_noop() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);
        add(&mut state, "keep");

        for blank in ["", " ", "\t  \n"] {
            assert!(add(&mut state, blank).is_none());
        }

        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.input().value(), "\t  \n");
    }

    #[test]
    fn test_blank_add_does_not_write() {
        let mut store = MockPreferenceStorePort::new();
        store.expect_read().returning(|_| Ok(None));
        store.expect_write().never();

        let mut state = TodoState::load(
            PreferencesService::new(Arc::new(store)),
            Box::new(SequentialIdGenerator::default()),
        );

        state.edit_input("   ");
        assert!(state.add_task().is_none());
    }

    #[test]
    fn test_complete_removes_exactly_that_task() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);
        let first = add(&mut state, "a").unwrap();
        let second = add(&mut state, "b").unwrap();
        let third = add(&mut state, "c").unwrap();

        let removed = state.complete_task(&second);

        assert_eq!(removed, Some(second));
        assert_eq!(state.tasks().as_slice(), [first, third]);
        assert_eq!(persisted(&store), state.tasks().as_slice());
    }

    #[test]
    fn test_complete_unknown_id_does_not_write() {
        let mut store = MockPreferenceStorePort::new();
        store.expect_read().returning(|_| Ok(None));
        store.expect_write().never();

        let mut state = TodoState::load(
            PreferencesService::new(Arc::new(store)),
            Box::new(SequentialIdGenerator::default()),
        );

        assert!(state.complete_task(&Task::new(404, "gone")).is_none());
        assert!(state.complete_at(0).is_none());
    }

    #[test]
    fn test_toggle_theme_twice_restores_flag() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);

        assert!(state.toggle_theme());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("true"));

        assert!(!state.toggle_theme());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("false"));
        assert!(!load(&store).is_dark());
    }

    #[test]
    fn test_credits_toggle_is_not_persisted() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);

        assert!(state.toggle_credits());
        assert!(!state.toggle_credits());
        state.toggle_credits();
        state.close_credits();

        assert!(!state.credits_open());
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_input_is_not_persisted() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);

        state.edit_input("draft");

        assert!(store.get(TASKS_KEY).is_none());
        assert_eq!(state.input().value(), "draft");
    }

    #[test]
    fn test_add_check_reload_scenario() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = load(&store);

        let milk = add(&mut state, "Buy milk").unwrap();
        add(&mut state, "Call Mom");
        assert_eq!(texts(&state), ["Buy milk", "Call Mom"]);

        state.complete_task(&milk);
        assert_eq!(texts(&state), ["Call Mom"]);

        let reloaded = load(&store);
        assert_eq!(texts(&reloaded), ["Call Mom"]);
        assert_eq!(reloaded.tasks(), state.tasks());
    }

    #[test]
    fn test_complete_at_with_colliding_ids_removes_that_row() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = TodoState::load(
            PreferencesService::new(store.clone()),
            Box::new(FixedIdGenerator(7)),
        );
        add(&mut state, "Buy milk");
        add(&mut state, "Call Mom");

        let removed = state.complete_at(1);

        assert_eq!(removed, Some(Task::new(7, "Call Mom")));
        assert_eq!(texts(&state), ["Buy milk"]);
        assert_eq!(persisted(&store), [Task::new(7, "Buy milk")]);
    }

    #[test]
    fn test_complete_task_with_colliding_ids_matches_text() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = TodoState::load(
            PreferencesService::new(store.clone()),
            Box::new(FixedIdGenerator(7)),
        );
        add(&mut state, "Buy milk");
        let mom = add(&mut state, "Call Mom").unwrap();

        state.complete_task(&mom);

        assert_eq!(texts(&state), ["Buy milk"]);
    }

    #[test]
    fn test_add_check_reload_scenario_on_disk() {
        let dir = tempdir().unwrap();
        let open = || {
            TodoState::load(
                PreferencesService::new(Arc::new(FilePreferenceStore::with_dir(
                    dir.path().to_path_buf(),
                ))),
                Box::new(SequentialIdGenerator::default()),
            )
        };

        let mut state = open();
        let milk = add(&mut state, "Buy milk").unwrap();
        add(&mut state, "Call Mom");
        add(&mut state, "Say \"héllo\" to Zoë ☕");
        state.complete_task(&milk);
        state.toggle_theme();
        drop(state);

        let reloaded = open();
        assert_eq!(texts(&reloaded), ["Call Mom", "Say \"héllo\" to Zoë ☕"]);
        assert!(reloaded.is_dark());
    }
}
