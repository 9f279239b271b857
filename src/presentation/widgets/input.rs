//! Task input field and add control.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::InputBuffer;
use crate::presentation::theme::Theme;

/// Text input field widget.
pub struct TextInput<'a> {
    buffer: &'a InputBuffer,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
    theme: Theme,
}

impl<'a> TextInput<'a> {
    /// Creates new input over `buffer`.
    #[must_use]
    pub fn new(buffer: &'a InputBuffer, label: &'a str) -> Self {
        Self {
            buffer,
            label,
            placeholder: "",
            focused: false,
            theme: Theme::default(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub const fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Returns the visible slice and the cursor column within it.
    fn visible(&self, width: usize) -> (&str, usize) {
        let value = self.buffer.value();
        let before = self.buffer.before_cursor().width();
        let overflow = (before + 1).saturating_sub(width);

        let mut skipped = 0;
        let mut start = 0;
        for (i, c) in value.char_indices() {
            if skipped >= overflow {
                start = i;
                break;
            }
            skipped += c.width().unwrap_or(0);
            start = i + c.len_utf8();
        }

        (&value[start..], before - skipped.min(before))
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            self.theme.dimmed_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(self.theme.base_style)
            .title(format!(" {} ", self.label));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.buffer.is_empty() {
            Paragraph::new(self.placeholder)
                .style(self.theme.dimmed_style)
                .render(inner, buf);
        } else {
            let (text, _) = self.visible(inner.width as usize);
            Paragraph::new(text)
                .style(self.theme.base_style)
                .render(inner, buf);
        }

        if self.focused {
            let (_, column) = self.visible(inner.width as usize);
            let cursor_x = inner.x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
            if cursor_x < inner.right() {
                buf[(cursor_x, inner.y)].set_style(
                    Style::default()
                        .bg(self.theme.text)
                        .fg(self.theme.background),
                );
            }
        }
    }
}

/// The `+` control next to the input.
pub struct AddButton {
    theme: Theme,
    enabled: bool,
}

impl AddButton {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self {
            theme,
            enabled: true,
        }
    }

    /// Dims the button while the input is blank.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for AddButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.enabled {
            self.theme.bar_style
        } else {
            self.theme.dimmed_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(style);

        Paragraph::new("+")
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
            .render(area, buf);
    }
}
