use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::Notification;
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 40;
const TOP_OFFSET: u16 = 1;

/// Toast drawn in the top right corner, just below the header.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    /// Where the toast lands inside `area`.
    #[must_use]
    pub fn popup_area(&self, area: Rect) -> Rect {
        let message = &self.notification.message;

        let max_popup_width = MAX_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);
        let lines = content_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(2).min(6);

        let x = area.right().saturating_sub(width).saturating_sub(1);
        let y = area.y + TOP_OFFSET;

        area.intersection(Rect::new(x, y, width, height))
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.popup_area(area);
        if popup_area.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary))
            .style(self.theme.base_style);

        let para = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(self.theme.base_style.add_modifier(Modifier::BOLD));

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_sits_top_right() {
        let notification = Notification::new("Dark Theme Applied");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);

        let popup = NotificationPopup::new(&notification, &theme).popup_area(area);

        assert_eq!(popup.y, 1);
        assert_eq!(popup.right(), 79);
        assert_eq!(popup.height, 3);
        assert_eq!(popup.width, 22);
    }

    #[test]
    fn test_popup_renders_message() {
        let notification = Notification::new("Credits");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 2)].symbol().to_string())
            .collect();
        assert!(row.contains("Credits"));
    }
}
