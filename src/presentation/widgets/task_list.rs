//! Scrollable list of task rows.
//!
//! Each task takes two lines: a checkbox row and a divider beneath it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::TaskList;
use crate::presentation::theme::Theme;

const ROW_HEIGHT: u16 = 2;
const CHECKBOX: &str = " [ ] ";
const DIVIDER: &str = "─";

#[derive(Debug, Clone, Default)]
pub struct TaskListState {
    selected: Option<usize>,
    offset: usize,
    area: Rect,
}

impl TaskListState {
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn select_first(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.checked_sub(1);
    }

    /// Keeps the selection inside a list of `len` tasks.
    pub fn clamp(&mut self, len: usize) {
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
        self.offset = self.offset.min(len.saturating_sub(1));
    }

    /// Maps a screen position from the last render to a task index.
    ///
    /// The flag is true when the position falls on the checkbox.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16, len: usize) -> Option<(usize, bool)> {
        let area = self.area;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }

        let index = self.offset + usize::from((row - area.y) / ROW_HEIGHT);
        if index >= len {
            return None;
        }

        #[allow(clippy::cast_possible_truncation)]
        let checkbox_end = area.x + CHECKBOX.len() as u16;
        let on_checkbox = (row - area.y) % ROW_HEIGHT == 0 && column < checkbox_end;
        Some((index, on_checkbox))
    }

    fn scroll_to_selection(&mut self, visible_rows: usize) {
        let Some(selected) = self.selected else {
            return;
        };
        if visible_rows == 0 {
            return;
        }
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + visible_rows {
            self.offset = selected + 1 - visible_rows;
        }
    }
}

pub struct TaskListWidget<'a> {
    tasks: &'a TaskList,
    theme: Theme,
    focused: bool,
    empty_message: &'a str,
}

impl<'a> TaskListWidget<'a> {
    #[must_use]
    pub fn new(tasks: &'a TaskList) -> Self {
        Self {
            tasks,
            theme: Theme::default(),
            focused: false,
            empty_message: "",
        }
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }
}

impl StatefulWidget for TaskListWidget<'_> {
    type State = TaskListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TaskListState) {
        state.area = area;
        state.clamp(self.tasks.len());

        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.tasks.is_empty() {
            Paragraph::new(self.empty_message)
                .alignment(Alignment::Center)
                .style(self.theme.dimmed_style)
                .render(Rect::new(area.x, area.y, area.width, 1), buf);
            return;
        }

        let visible_rows = usize::from(area.height.div_ceil(ROW_HEIGHT));
        state.scroll_to_selection(visible_rows);

        let divider = DIVIDER.repeat(usize::from(area.width));
        let mut y = area.y;

        for (index, task) in self.tasks.iter().enumerate().skip(state.offset) {
            if y >= area.bottom() {
                break;
            }

            let row_style: Style = if self.focused && state.selected == Some(index) {
                self.theme.selection_style
            } else {
                self.theme.row_style
            };

            let row = Rect::new(area.x, y, area.width, 1);
            for x in row.left()..row.right() {
                buf[(x, y)].set_char(' ').set_style(row_style);
            }
            Paragraph::new(Line::from(vec![
                Span::styled(CHECKBOX, row_style),
                Span::styled(task.text.as_str(), row_style),
            ]))
            .render(row, buf);
            y += 1;

            if y < area.bottom() {
                buf.set_string(area.x, y, &divider, self.theme.divider_style);
                y += 1;
            }
        }
    }
}
