use ratatui::style::{Modifier, Style};

use crate::ui::Theme;

/// Concrete runtime styles derived from a [`Theme`].
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub control_style: Style,
    pub control_active_style: Style,
    pub control_hover_style: Style,
    pub control_disabled_style: Style,
    pub ellipsis_style: Style,
    pub item_style: Style,
    pub block_style: Style,
    pub header_style: Style,
    pub help_style: Style,
    pub status_style: Style,
}

impl Colors {
    pub fn from_theme(theme: &Theme) -> Self {
        let base = Style::default().fg(theme.text).bg(theme.background);
        Colors {
            control_style: base,
            control_active_style: Style::default()
                .fg(theme.active_text)
                .bg(theme.active_bg)
                .add_modifier(Modifier::BOLD),
            control_hover_style: Style::default().fg(theme.hover_text).bg(theme.hover_bg),
            control_disabled_style: Style::default()
                .fg(theme.disabled_text)
                .bg(theme.background),
            ellipsis_style: Style::default().fg(theme.disabled_text).bg(theme.background),
            item_style: base,
            block_style: base,
            header_style: base.add_modifier(Modifier::BOLD),
            help_style: Style::default().fg(theme.disabled_text).bg(theme.background),
            status_style: Style::default().fg(theme.active_bg).bg(theme.background),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors::from_theme(&Theme::default())
    }
}
