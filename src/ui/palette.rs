//! Base frame colors for the resolved color mode
//!
//! Accent colors come from the preference store's style tokens; everything
//! that is not accent-colored (backgrounds, body text, borders) comes from
//! here so the whole frame flips together when the mode changes.

use ratatui::style::Color;

use filetui::prefs::ColorMode;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => Self {
                background: Color::Rgb(9, 9, 11),
                surface: Color::Rgb(24, 24, 27),
                text: Color::Rgb(244, 244, 245),
                muted: Color::Rgb(161, 161, 170),
                border: Color::Rgb(63, 63, 70),
            },
            ColorMode::Light => Self {
                background: Color::Rgb(250, 250, 250),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                border: Color::Rgb(212, 212, 216),
            },
        }
    }
}
