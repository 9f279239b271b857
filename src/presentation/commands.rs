use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::domain::keybinding::{Action, Keybind, parse_key};
use crate::presentation::widgets::FocusContext;

/// Where a binding is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    Global,
    Input,
    List,
    Dialog,
}

impl KeyScope {
    /// Scopes an action belongs to when it is rebound from config.
    #[must_use]
    pub const fn for_action(action: Action) -> &'static [Self] {
        match action {
            Action::Quit | Action::ToggleTheme | Action::ToggleCredits => &[Self::Global],
            Action::CloseDialog => &[Self::Dialog],
            Action::FocusNext => &[Self::Input, Self::List],
            Action::AddTask | Action::ClearInput | Action::FocusList => &[Self::Input],
            Action::FocusInput
            | Action::NavigateUp
            | Action::NavigateDown
            | Action::SelectFirst
            | Action::SelectLast
            | Action::CompleteTask => &[Self::List],
        }
    }

    const fn from_focus(focus: FocusContext) -> Self {
        match focus {
            FocusContext::Input => Self::Input,
            FocusContext::List => Self::List,
            FocusContext::Dialog => Self::Dialog,
        }
    }
}

/// Global actions still reachable while the credits dialog is open.
const DIALOG_PASSTHROUGH: [Action; 2] = [Action::Quit, Action::ToggleCredits];

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyScope, KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        use KeyScope::{Dialog, Global, Input, List};

        let mut registry = Self {
            display_bindings: HashMap::new(),
            input_bindings: Vec::new(),
        };

        let ctrl = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let key = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);
        let ch = |c: char| key(KeyCode::Char(c));

        registry.register(Global, Action::Quit, ctrl('c'), true);
        registry.register(Global, Action::Quit, key(KeyCode::Esc), false);
        registry.register(Global, Action::ToggleTheme, ctrl('t'), true);
        registry.register(Global, Action::ToggleCredits, key(KeyCode::F(1)), true);
        registry.register(Global, Action::ToggleCredits, ctrl('o'), false);

        registry.register(Input, Action::AddTask, key(KeyCode::Enter), true);
        registry.register(Input, Action::FocusNext, key(KeyCode::Tab), true);
        registry.register(Input, Action::FocusList, key(KeyCode::Down), false);
        registry.register(Input, Action::ClearInput, ctrl('u'), true);

        registry.register(List, Action::NavigateUp, key(KeyCode::Up), true);
        registry.register(List, Action::NavigateUp, ch('k'), false);
        registry.register(List, Action::NavigateDown, key(KeyCode::Down), true);
        registry.register(List, Action::NavigateDown, ch('j'), false);
        registry.register(List, Action::SelectFirst, key(KeyCode::Home), true);
        registry.register(List, Action::SelectFirst, ch('g'), false);
        registry.register(List, Action::SelectLast, key(KeyCode::End), true);
        registry.register(List, Action::SelectLast, ch('G'), false);
        registry.register(List, Action::CompleteTask, ch(' '), true);
        registry.register(List, Action::CompleteTask, key(KeyCode::Enter), false);
        registry.register(List, Action::CompleteTask, ch('x'), false);
        registry.register(List, Action::FocusNext, key(KeyCode::Tab), true);
        registry.register(List, Action::FocusInput, ch('i'), true);

        registry.register(Dialog, Action::CloseDialog, key(KeyCode::Esc), true);
        registry.register(Dialog, Action::CloseDialog, key(KeyCode::Enter), false);
        registry.register(Dialog, Action::CloseDialog, ch('q'), false);

        registry
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default bindings with user overrides from config applied on top.
    ///
    /// Keys that fail to parse are logged and skipped. Overrides apply in key
    /// order, so when two keys name one action the later key is displayed.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();

        let mut sorted: Vec<_> = overrides.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (text, &action) in sorted {
            let Some(key) = parse_key(text) else {
                warn!(key = %text, ?action, "Ignoring unparsable keybinding");
                continue;
            };
            let key = normalize(key);

            for &scope in KeyScope::for_action(action) {
                registry
                    .input_bindings
                    .retain(|(s, k, _)| !(*s == scope && *k == key));
                registry.input_bindings.insert(0, (scope, key, action));
            }
            registry.display_bindings.insert(action, key);
            debug!(key = %text, ?action, "Keybinding overridden");
        }

        registry
    }

    fn register(&mut self, scope: KeyScope, action: Action, key: KeyEvent, is_primary: bool) {
        if is_primary {
            self.display_bindings.insert(action, key);
        }
        self.input_bindings.push((scope, key, action));
    }

    /// Primary key for `action`, if it has one.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Display label of the primary key for `action`, or an empty string.
    #[must_use]
    pub fn key_label(&self, action: Action) -> String {
        self.get(action)
            .map(|key| Keybind::new(key, action).label.into_owned())
            .unwrap_or_default()
    }

    fn find(&self, scope: KeyScope, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(s, k, _)| *s == scope && k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, _, a)| *a)
    }

    /// Resolves a key press for the current focus.
    ///
    /// Scoped bindings win over global ones. While the input is focused,
    /// plain characters never reach global bindings so they can be typed.
    #[must_use]
    pub fn resolve(&self, focus: FocusContext, key: KeyEvent) -> Option<Action> {
        let key = normalize(key);
        let scope = KeyScope::from_focus(focus);

        if let Some(action) = self.find(scope, key) {
            return Some(action);
        }

        if focus == FocusContext::Input && is_plain_char(key) {
            return None;
        }

        let action = self.find(KeyScope::Global, key)?;
        if focus == FocusContext::Dialog && !DIALOG_PASSTHROUGH.contains(&action) {
            return None;
        }
        Some(action)
    }

    /// Footer hints for the current focus.
    #[must_use]
    pub fn hints(&self, focus: FocusContext) -> Vec<Keybind> {
        let actions: &[Action] = match focus {
            FocusContext::Input => &[
                Action::AddTask,
                Action::FocusNext,
                Action::ToggleTheme,
                Action::ToggleCredits,
                Action::Quit,
            ],
            FocusContext::List => &[
                Action::CompleteTask,
                Action::NavigateUp,
                Action::NavigateDown,
                Action::FocusInput,
                Action::ToggleTheme,
                Action::Quit,
            ],
            FocusContext::Dialog => &[Action::CloseDialog, Action::Quit],
        };

        actions
            .iter()
            .filter_map(|&action| self.get(action).map(|key| Keybind::new(key, action)))
            .collect()
    }
}

/// Shifted characters arrive with SHIFT set; the char already carries it.
fn normalize(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(_) if key.modifiers == KeyModifiers::SHIFT => {
            KeyEvent::new(key.code, KeyModifiers::NONE)
        }
        _ => KeyEvent::new(key.code, key.modifiers),
    }
}

fn is_plain_char(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
