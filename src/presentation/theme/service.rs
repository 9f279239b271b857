use super::adapter::ColorConverter;
use crate::infrastructure::config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const LIGHT_BACKGROUND: Color = Color::Rgb(0xff, 0xfb, 0xfe);
const LIGHT_TEXT: Color = Color::Rgb(0x1c, 0x1b, 0x1f);
const DARK_BACKGROUND: Color = Color::Rgb(0x1c, 0x1b, 0x1f);
const DARK_TEXT: Color = Color::Rgb(0xe6, 0xe1, 0xe5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub is_dark: bool,
    pub primary: Color,
    pub on_primary: Color,
    pub background: Color,
    pub text: Color,
    pub base_style: Style,
    pub bar_style: Style,
    pub row_style: Style,
    pub selection_style: Style,
    pub divider_style: Style,
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), false)
    }
}

impl Theme {
    #[must_use]
    pub fn from_config(config: &ThemeConfig, is_dark: bool) -> Self {
        let primary = if is_dark {
            parse_color(&config.dark_primary)
        } else {
            parse_color(&config.light_primary)
        };
        Self::from_color(primary, is_dark)
    }

    #[must_use]
    pub fn from_color(primary: Color, is_dark: bool) -> Self {
        let (background, text) = if is_dark {
            (DARK_BACKGROUND, DARK_TEXT)
        } else {
            (LIGHT_BACKGROUND, LIGHT_TEXT)
        };
        let on_primary = ColorConverter::readable_on(primary);

        let selection_bg = if is_dark {
            ColorConverter::with_lightness(primary, 0.35)
        } else {
            ColorConverter::with_lightness(primary, 0.8)
        };

        Self {
            is_dark,
            primary,
            on_primary,
            background,
            text,
            base_style: Style::default().bg(background).fg(text),
            bar_style: Style::default()
                .bg(primary)
                .fg(on_primary)
                .add_modifier(Modifier::BOLD),
            row_style: Style::default().bg(primary).fg(on_primary),
            selection_style: Style::default()
                .bg(selection_bg)
                .fg(ColorConverter::readable_on(selection_bg))
                .add_modifier(Modifier::BOLD),
            divider_style: Style::default().bg(background).fg(primary),
            dimmed_style: Style::default().bg(background).fg(Color::DarkGray),
        }
    }
}

/// Parses a color name or `#rgb` / `#rrggbb` hex code, falling back to purple.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Rgb(0x66, 0x50, 0xa4),
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();

    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let double = |i: usize| channel(&s[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}
