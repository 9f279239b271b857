//! Static credits modal.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::theme::Theme;

const INFO_ICON: &str = "ⓘ";
const TITLE: &str = "Credits";
const MESSAGE: &str = "Developed by Govind Sankar using Kotlin & Jetpack Compose!";
const GITHUB_ICON: &str = "🐙";
const GITHUB_HANDLE: &str = "Govind-Sankar";
const CLOSE_LABEL: &str = " Close ";

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 13;

/// Where the dialog and its close label land on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogLayout {
    pub popup: Rect,
    pub close: Rect,
}

pub struct CreditsDialog {
    theme: Theme,
}

impl CreditsDialog {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Centers the dialog inside `area`.
    #[must_use]
    pub fn layout(area: Rect) -> DialogLayout {
        let width = DIALOG_WIDTH.min(area.width);
        let height = DIALOG_HEIGHT.min(area.height);
        let popup = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        #[allow(clippy::cast_possible_truncation)]
        let close_width = (CLOSE_LABEL.len() as u16).min(popup.width.saturating_sub(2));
        let close = Rect::new(
            popup.right().saturating_sub(close_width + 2),
            popup.bottom().saturating_sub(2),
            close_width,
            1.min(popup.height),
        );

        DialogLayout { popup, close }
    }

    fn divider(&self, width: u16) -> Line<'static> {
        Line::from(Span::styled(
            "─".repeat(usize::from(width)),
            Style::default().fg(self.theme.primary),
        ))
    }
}

impl Widget for CreditsDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let DialogLayout { popup, close } = Self::layout(area);
        if popup.area() == 0 {
            return;
        }

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary))
            .style(self.theme.base_style);
        let inner = block.inner(popup).inner(ratatui::layout::Margin::new(1, 0));
        block.render(popup, buf);

        let [icon, title, top, message, middle, github, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let text_style = self.theme.base_style;

        Paragraph::new(INFO_ICON)
            .alignment(Alignment::Center)
            .style(text_style)
            .render(icon, buf);
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(text_style.add_modifier(Modifier::BOLD))
            .render(title, buf);

        for divider_area in [top, middle, bottom] {
            Paragraph::new(self.divider(divider_area.width)).render(divider_area, buf);
        }

        Paragraph::new(MESSAGE)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(text_style)
            .render(message, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {GITHUB_ICON}  "), text_style),
            Span::styled(GITHUB_HANDLE, text_style.add_modifier(Modifier::ITALIC)),
        ]))
        .render(github, buf);

        Paragraph::new(CLOSE_LABEL)
            .style(
                Style::default()
                    .fg(self.theme.primary)
                    .bg(self.theme.background)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(close, buf);
    }
}
