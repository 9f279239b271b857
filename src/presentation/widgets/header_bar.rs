use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const DARK_MODE_ICON: &str = "☾";
const LIGHT_MODE_ICON: &str = "☀";
const CREDITS_ICON: &str = "ⓘ";

pub struct HeaderBarStyle {
    pub background: Style,
    pub title: Style,
    pub control: Style,
    pub key_hint: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.bar_style,
            title: theme.bar_style,
            control: theme.bar_style,
            key_hint: Style::default()
                .bg(theme.primary)
                .fg(theme.on_primary)
                .add_modifier(Modifier::DIM),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Clickable regions of the header, in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderControls {
    pub theme_toggle: Rect,
    pub credits: Rect,
}

pub struct HeaderBar<'a> {
    title: &'a str,
    is_dark: bool,
    theme_key: &'a str,
    credits_key: &'a str,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            is_dark: false,
            theme_key: "",
            credits_key: "",
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn dark(mut self, is_dark: bool) -> Self {
        self.is_dark = is_dark;
        self
    }

    /// Sets the key hints shown next to each control.
    #[must_use]
    pub const fn key_hints(mut self, theme_key: &'a str, credits_key: &'a str) -> Self {
        self.theme_key = theme_key;
        self.credits_key = credits_key;
        self
    }

    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn theme_icon(&self) -> &'static str {
        if self.is_dark {
            LIGHT_MODE_ICON
        } else {
            DARK_MODE_ICON
        }
    }

    fn control_spans(icon: &'static str, key: &str, style: &HeaderBarStyle) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(format!(" {icon}"), style.control)];
        if !key.is_empty() {
            spans.push(Span::styled(format!(" {key}"), style.key_hint));
        }
        spans.push(Span::styled(" ", style.control));
        spans
    }

    #[allow(clippy::cast_possible_truncation)]
    fn spans_width(spans: &[Span<'_>]) -> u16 {
        spans.iter().map(|s| s.content.width()).sum::<usize>() as u16
    }

    /// Computes where the controls land for a header drawn in `area`.
    #[must_use]
    pub fn controls(&self, area: Rect) -> HeaderControls {
        let theme = Self::control_spans(self.theme_icon(), self.theme_key, &self.style);
        let credits = Self::control_spans(CREDITS_ICON, self.credits_key, &self.style);
        let theme_width = Self::spans_width(&theme);
        let credits_width = Self::spans_width(&credits);

        let credits_x = area.right().saturating_sub(credits_width).max(area.x);
        let theme_x = credits_x.saturating_sub(theme_width).max(area.x);

        HeaderControls {
            theme_toggle: Rect::new(theme_x, area.y, credits_x - theme_x, 1.min(area.height)),
            credits: Rect::new(
                credits_x,
                area.y,
                area.right() - credits_x,
                1.min(area.height),
            ),
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let controls = self.controls(area);

        let title_width = controls.theme_toggle.x.saturating_sub(area.x);
        let title_area = Rect::new(area.x, area.y, title_width, 1);
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.title),
            self.style.title,
        )))
        .render(title_area, buf);

        let theme = Self::control_spans(self.theme_icon(), self.theme_key, &self.style);
        Paragraph::new(Line::from(theme)).render(controls.theme_toggle, buf);

        let credits = Self::control_spans(CREDITS_ICON, self.credits_key, &self.style);
        Paragraph::new(Line::from(credits)).render(controls.credits, buf);
    }
}
