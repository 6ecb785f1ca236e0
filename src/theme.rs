use ratatui::style::{Color, Modifier, Style};

use crate::meta::WinRateBand;

/// Complete theme configuration for ratatui
#[derive(Clone)]
pub struct ThemeConfig {
    pub background: Color,
    pub border: Style,
    pub title: Style,
    pub text: Style,
    /// Secondary text such as game counts and the footer URL
    pub muted: Style,
    pub tier_header: Style,
    pub row_selected: Style,
    pub strong: Color,
    pub fair: Color,
    pub weak: Color,
}

impl ThemeConfig {
    /// Bold win-rate style coloured by band.
    pub fn band_style(&self, band: WinRateBand) -> Style {
        let fg = match band {
            WinRateBand::Strong => self.strong,
            WinRateBand::Fair => self.fair,
            WinRateBand::Weak => self.weak,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}

/// Returns a ThemeConfig based on the HSReplay site palette.
pub fn hsreplay_theme() -> ThemeConfig {
    // HSReplay palette
    let navy = Color::Rgb(29, 54, 87);
    let dark_grey = Color::Rgb(51, 51, 51);
    let light_grey = Color::Rgb(238, 238, 238);
    let white = Color::Rgb(255, 255, 255);
    let slate = Color::Rgb(120, 134, 156);
    let green = Color::Rgb(34, 161, 23);
    let orange = Color::Rgb(244, 129, 0);
    let red = Color::Rgb(255, 80, 80);

    ThemeConfig {
        background: dark_grey,
        border: Style::default().fg(slate),
        title: Style::default().fg(white).add_modifier(Modifier::BOLD),
        text: Style::default().fg(light_grey),
        muted: Style::default().fg(slate),
        tier_header: Style::default()
            .fg(white)
            .bg(navy)
            .add_modifier(Modifier::BOLD),
        row_selected: Style::default()
            .bg(Color::Rgb(68, 71, 90))
            .add_modifier(Modifier::BOLD),
        strong: green,
        fair: orange,
        weak: red,
    }
}
