//! Palette selection. One palette per persisted theme, fixed at startup.

use std::sync::OnceLock;

use colored::Color;
use contactr_common::config::Theme;

pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub separator: Color,
    pub text_default: Color,
    pub phone: Color,
}

static DARK: Palette = Palette {
    primary: Color::BrightGreen,
    accent: Color::BrightCyan,
    separator: Color::BrightBlack,
    text_default: Color::White,
    phone: Color::BrightYellow,
};

static LIGHT: Palette = Palette {
    primary: Color::Green,
    accent: Color::Blue,
    separator: Color::BrightBlack,
    text_default: Color::Black,
    phone: Color::Yellow,
};

static PALETTE: OnceLock<&'static Palette> = OnceLock::new();

/// Selects the palette for the whole process; later calls are ignored.
pub fn init(theme: Theme) {
    let palette = match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    };
    let _ = PALETTE.set(palette);
}

pub fn palette() -> &'static Palette {
    PALETTE.get().copied().unwrap_or(&DARK)
}
