use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    widgets::{StatefulWidget, Widget},
};
use tracing::debug;

use crate::application::{NotificationManager, TodoState};
use crate::domain::entities::Task;
use crate::domain::keybinding::Action;
use crate::infrastructure::AppConfig;
use crate::infrastructure::config::ThemeConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventResult, is_force_quit};
use crate::presentation::theme::Theme;
use crate::presentation::ui::notification_popup::NotificationPopup;
use crate::presentation::widgets::{
    AddButton, CreditsDialog, FocusContext, FooterBar, FooterBarStyle, HeaderBar,
    HeaderBarStyle, HeaderControls, TaskListState, TaskListWidget, TextInput,
};

const INPUT_LABEL: &str = "Task";
const INPUT_PLACEHOLDER: &str = "Enter a task";
const EMPTY_LIST_MESSAGE: &str = "Nothing to do";
const ADD_BUTTON_WIDTH: u16 = 5;

const DARK_THEME_TOAST: &str = "Dark Theme Applied";
const LIGHT_THEME_TOAST: &str = "Light Theme Applied";
const CREDITS_TOAST: &str = "Credits";

/// Screen regions recorded on the last render, used for mouse hits.
#[derive(Debug, Clone, Copy, Default)]
struct HitAreas {
    header: HeaderControls,
    input: Rect,
    add_button: Rect,
}

pub struct TodoScreenState {
    todo: TodoState,
    focus: FocusContext,
    list_state: TaskListState,
    commands: CommandRegistry,
    notifications: NotificationManager,
    theme_config: ThemeConfig,
    theme: Theme,
    title: String,
    mouse_enabled: bool,
    hit_areas: HitAreas,
}

impl TodoScreenState {
    #[must_use]
    pub fn new(todo: TodoState, config: &AppConfig) -> Self {
        let notifications = NotificationManager::new(config.toast_duration());
        let notifications = if config.ui.show_toasts {
            notifications
        } else {
            notifications.disabled()
        };
        let theme = Theme::from_config(&config.theme, todo.is_dark());

        Self {
            todo,
            focus: FocusContext::Input,
            list_state: TaskListState::default(),
            commands: CommandRegistry::with_overrides(&config.keybindings),
            notifications,
            theme_config: config.theme.clone(),
            theme,
            title: config.ui.title.clone(),
            mouse_enabled: config.mouse,
            hit_areas: HitAreas::default(),
        }
    }

    #[must_use]
    pub const fn todo(&self) -> &TodoState {
        &self.todo
    }

    /// Current focus. The credits dialog takes focus while it is open.
    #[must_use]
    pub const fn focus(&self) -> FocusContext {
        if self.todo.credits_open() {
            FocusContext::Dialog
        } else {
            self.focus
        }
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    #[must_use]
    pub const fn list_state(&self) -> &TaskListState {
        &self.list_state
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if is_force_quit(&key) {
            return EventResult::Exit;
        }

        let focus = self.focus();
        if let Some(action) = self.commands.resolve(focus, key) {
            return self.apply(action);
        }

        if focus == FocusContext::Input {
            self.edit_input(key);
        }
        EventResult::Continue
    }

    fn edit_input(&mut self, key: KeyEvent) {
        let input = self.todo.input_mut();
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.insert_char(c);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    /// Runs a bound action against the screen.
    pub fn apply(&mut self, action: Action) -> EventResult {
        debug!(?action, "Applying action");
        let len = self.todo.tasks().len();

        match action {
            Action::Quit => return EventResult::Exit,
            Action::ToggleTheme => {
                let is_dark = self.todo.toggle_theme();
                self.theme = Theme::from_config(&self.theme_config, is_dark);
                self.notifications.info(if is_dark {
                    DARK_THEME_TOAST
                } else {
                    LIGHT_THEME_TOAST
                });
            }
            Action::ToggleCredits => {
                if self.todo.toggle_credits() {
                    self.notifications.info(CREDITS_TOAST);
                }
            }
            Action::CloseDialog => self.todo.close_credits(),
            Action::FocusInput => self.focus = FocusContext::Input,
            Action::FocusList => self.focus_list(),
            Action::FocusNext => match self.focus {
                FocusContext::List => self.focus = FocusContext::Input,
                _ => self.focus_list(),
            },
            Action::NavigateUp => self.list_state.select_previous(len),
            Action::NavigateDown => self.list_state.select_next(len),
            Action::SelectFirst => self.list_state.select_first(len),
            Action::SelectLast => self.list_state.select_last(len),
            Action::CompleteTask => {
                if let Some(index) = self.list_state.selected() {
                    self.complete_at(index);
                }
            }
            Action::AddTask => {
                self.todo.add_task();
            }
            Action::ClearInput => self.todo.input_mut().clear(),
        }

        EventResult::Continue
    }

    fn focus_list(&mut self) {
        self.focus = FocusContext::List;
        if self.list_state.selected().is_none() {
            self.list_state.select_first(self.todo.tasks().len());
        }
    }

    fn complete_at(&mut self, index: usize) {
        if self.todo.complete_at(index).is_some() {
            self.list_state.clamp(self.todo.tasks().len());
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        if !self.mouse_enabled {
            return EventResult::Continue;
        }

        let (column, row) = (mouse.column, mouse.row);
        let at = Position::new(column, row);
        let len = self.todo.tasks().len();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.todo.credits_open() {
                    return self.apply(Action::CloseDialog);
                }

                let hits = self.hit_areas;
                if hits.header.theme_toggle.contains(at) {
                    return self.apply(Action::ToggleTheme);
                }
                if hits.header.credits.contains(at) {
                    return self.apply(Action::ToggleCredits);
                }
                if hits.add_button.contains(at) {
                    return self.apply(Action::AddTask);
                }
                if hits.input.contains(at) {
                    self.focus = FocusContext::Input;
                    return EventResult::Continue;
                }
                if let Some((index, on_checkbox)) = self.list_state.hit_test(column, row, len) {
                    self.focus = FocusContext::List;
                    if on_checkbox {
                        self.complete_at(index);
                    } else {
                        self.list_state.select(Some(index));
                    }
                }
            }
            MouseEventKind::ScrollDown if !self.todo.credits_open() => {
                self.list_state.select_next(len);
            }
            MouseEventKind::ScrollUp if !self.todo.credits_open() => {
                self.list_state.select_previous(len);
            }
            _ => {}
        }

        EventResult::Continue
    }

    /// Advances toasts. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.notifications.tick()
    }

    fn task_count_label(&self) -> String {
        match self.todo.tasks().len() {
            1 => "1 task ".to_string(),
            n => format!("{n} tasks "),
        }
    }
}

pub struct TodoScreen;

impl StatefulWidget for TodoScreen {
    type State = TodoScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, state.theme.base_style);

        let [header_area, _, input_row, _, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header_bar(state, header_area, buf);
        render_input_row(state, input_row.inner(Margin::new(1, 0)), buf);
        render_task_list(state, list_area.inner(Margin::new(1, 0)), buf);
        render_footer_bar(state, footer_area, buf);

        if state.todo.credits_open() {
            CreditsDialog::new(state.theme).render(area, buf);
        }

        if let Some(notification) = state.notifications.current_notification() {
            NotificationPopup::new(notification, &state.theme).render(area, buf);
        }
    }
}

fn render_header_bar(state: &mut TodoScreenState, area: Rect, buf: &mut Buffer) {
    let theme_key = state.commands.key_label(Action::ToggleTheme);
    let credits_key = state.commands.key_label(Action::ToggleCredits);

    let header = HeaderBar::new(&state.title)
        .dark(state.todo.is_dark())
        .key_hints(&theme_key, &credits_key)
        .style(HeaderBarStyle::from_theme(&state.theme));
    state.hit_areas.header = header.controls(area);
    header.render(area, buf);
}

fn render_input_row(state: &mut TodoScreenState, area: Rect, buf: &mut Buffer) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(ADD_BUTTON_WIDTH)])
            .areas(area);
    state.hit_areas.input = input_area;
    state.hit_areas.add_button = button_area;

    let focused = state.focus() == FocusContext::Input;
    TextInput::new(state.todo.input(), INPUT_LABEL)
        .placeholder(INPUT_PLACEHOLDER)
        .focused(focused)
        .theme(state.theme)
        .render(input_area, buf);

    AddButton::new(state.theme)
        .enabled(Task::is_valid_text(state.todo.input().value()))
        .render(button_area, buf);
}

fn render_task_list(state: &mut TodoScreenState, area: Rect, buf: &mut Buffer) {
    let focused = state.focus() == FocusContext::List;
    TaskListWidget::new(state.todo.tasks())
        .theme(state.theme)
        .focused(focused)
        .empty_message(EMPTY_LIST_MESSAGE)
        .render(area, buf, &mut state.list_state);
}

fn render_footer_bar(state: &TodoScreenState, area: Rect, buf: &mut Buffer) {
    let focus = state.focus();
    let hints = state.commands.hints(focus);
    let count = state.task_count_label();

    FooterBar::new(&hints)
        .focus_context(focus)
        .right_info(Some(count.as_str()))
        .style(FooterBarStyle::from_theme(&state.theme))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crossterm::event::KeyEventKind;
    use ratatui::{Terminal, backend::TestBackend};

    use crate::application::PreferencesService;
    use crate::domain::ports::mocks::{FixedIdGenerator, SequentialIdGenerator};
    use crate::infrastructure::MemoryPreferenceStore;

    fn screen(store: &Arc<MemoryPreferenceStore>) -> TodoScreenState {
        let todo = TodoState::load(
            PreferencesService::new(store.clone()),
            Box::new(SequentialIdGenerator::default()),
        );
        TodoScreenState::new(todo, &AppConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut TodoScreenState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(state: &mut TodoScreenState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| frame.render_stateful_widget(TodoScreen, frame.area(), state))
            .unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn task_texts(state: &TodoScreenState) -> Vec<String> {
        state.todo().tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_typing_and_enter_adds_task() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);

        type_text(&mut state, "Buy milk");
        assert_eq!(state.handle_key(key(KeyCode::Enter)), EventResult::Continue);

        assert_eq!(task_texts(&state), vec!["Buy milk"]);
        assert!(state.todo().input().is_empty());
        assert!(store.get("tasks").is_some());
    }

    #[test]
    fn test_plain_keys_are_typed_not_bound() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);

        type_text(&mut state, "xjkq");

        assert_eq!(state.todo().input().value(), "xjkq");
        assert!(state.todo().tasks().is_empty());
    }

    #[test]
    fn test_blank_enter_is_ignored() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);

        type_text(&mut state, "   ");
        state.handle_key(key(KeyCode::Enter));

        assert!(state.todo().tasks().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_checking_from_list_removes_selected() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);
        type_text(&mut state, "Buy milk");
        state.handle_key(key(KeyCode::Enter));
        type_text(&mut state, "Call Mom");
        state.handle_key(key(KeyCode::Enter));

        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focus(), FocusContext::List);
        assert_eq!(state.list_state().selected(), Some(0));

        state.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(task_texts(&state), vec!["Call Mom"]);
        assert_eq!(state.list_state().selected(), Some(0));
    }

    #[test]
    fn test_checking_second_row_with_colliding_ids() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let todo = TodoState::load(
            PreferencesService::new(store.clone()),
            Box::new(FixedIdGenerator(7)),
        );
        let mut state = TodoScreenState::new(todo, &AppConfig::default());
        type_text(&mut state, "Buy milk");
        state.handle_key(key(KeyCode::Enter));
        type_text(&mut state, "Call Mom");
        state.handle_key(key(KeyCode::Enter));

        state.handle_key(key(KeyCode::Tab));
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.list_state().selected(), Some(1));
        state.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(task_texts(&state), vec!["Buy milk"]);
        assert_eq!(state.list_state().selected(), Some(0));
    }

    #[test]
    fn test_theme_toggle_shows_toast_and_persists() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);

        state.handle_key(ctrl('t'));

        assert!(state.todo().is_dark());
        assert!(state.theme().is_dark);
        assert_eq!(store.get("is_dark_theme").as_deref(), Some("true"));
        assert_eq!(
            state.notifications().current_notification().map(|n| n.message.as_str()),
            Some("Dark Theme Applied")
        );

        state.handle_key(ctrl('t'));
        assert!(!state.todo().is_dark());
    }

    #[test]
    fn test_credits_dialog_is_modal() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);

        state.handle_key(key(KeyCode::F(1)));
        assert_eq!(state.focus(), FocusContext::Dialog);
        assert_eq!(
            state.notifications().current_notification().map(|n| n.message.as_str()),
            Some("Credits")
        );

        state.handle_key(key(KeyCode::Char('a')));
        state.handle_key(ctrl('t'));
        assert!(state.todo().input().is_empty());
        assert!(!state.todo().is_dark());

        assert_eq!(state.handle_key(key(KeyCode::Esc)), EventResult::Continue);
        assert_eq!(state.focus(), FocusContext::Input);
    }

    #[test]
    fn test_escape_quits_without_dialog() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);

        assert_eq!(state.handle_key(key(KeyCode::Esc)), EventResult::Exit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);
        state.handle_key(key(KeyCode::F(1)));

        let press = KeyEvent {
            kind: KeyEventKind::Press,
            ..ctrl('c')
        };
        assert_eq!(state.handle_key(press), EventResult::Exit);
    }

    #[test]
    fn test_render_shows_header_input_and_rows() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);
        type_text(&mut state, "Buy milk");
        state.handle_key(key(KeyCode::Enter));

        let terminal = draw(&mut state);
        let text = screen_text(&terminal);

        assert!(text.contains("To Do App"));
        assert!(text.contains(" Task "));
        assert!(text.contains("[ ] Buy milk"));
        assert!(text.contains(" INPUT "));
        assert!(text.contains("1 task"));
    }

    #[test]
    fn test_render_credits_dialog() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);
        state.handle_key(key(KeyCode::F(1)));

        let text = screen_text(&draw(&mut state));

        assert!(text.contains("Developed by Govind Sankar"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_mouse_click_on_checkbox_completes() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);
        type_text(&mut state, "Buy milk");
        state.handle_key(key(KeyCode::Enter));
        draw(&mut state);

        // Header, spacer, input row and spacer sit above the list.
        state.handle_mouse(click(2, 6));

        assert!(state.todo().tasks().is_empty());
        assert_eq!(store.get("tasks").as_deref(), Some("[]"));
    }

    #[test]
    fn test_mouse_click_on_header_controls() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);
        draw(&mut state);

        let theme = state.hit_areas.header.theme_toggle;
        state.handle_mouse(click(theme.x, theme.y));
        assert!(state.todo().is_dark());

        draw(&mut state);
        let credits = state.hit_areas.header.credits;
        state.handle_mouse(click(credits.x, credits.y));
        assert!(state.todo().credits_open());

        state.handle_mouse(click(0, 19));
        assert!(!state.todo().credits_open());
    }

    #[test]
    fn test_mouse_click_on_add_button() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut state = screen(&store);
        type_text(&mut state, "Call Mom");
        draw(&mut state);

        let button = state.hit_areas.add_button;
        state.handle_mouse(click(button.x + 2, button.y + 1));

        assert_eq!(task_texts(&state), vec!["Call Mom"]);
    }

    #[test]
    fn test_mouse_ignored_when_disabled() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let todo = TodoState::load(
            PreferencesService::new(store.clone()),
            Box::new(SequentialIdGenerator::default()),
        );
        let config = AppConfig {
            mouse: false,
            ..AppConfig::default()
        };
        let mut state = TodoScreenState::new(todo, &config);
        draw(&mut state);

        let theme = state.hit_areas.header.theme_toggle;
        state.handle_mouse(click(theme.x, theme.y));

        assert!(!state.todo().is_dark());
    }

    #[test]
    fn test_toasts_can_be_disabled() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let todo = TodoState::load(
            PreferencesService::new(store.clone()),
            Box::new(SequentialIdGenerator::default()),
        );
        let mut config = AppConfig::default();
        config.ui.show_toasts = false;
        let mut state = TodoScreenState::new(todo, &config);

        state.handle_key(ctrl('t'));

        assert!(!state.notifications().has_notifications());
    }
}
