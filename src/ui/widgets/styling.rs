use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the base style painted under every page.
///
pub fn background_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.background.to_color())
        .fg(theme.text.to_color())
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the border style for inputs that failed validation.
///
pub fn error_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for headings.
///
pub fn heading_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the current navigation item.
///
pub fn active_nav_style(theme: &Theme) -> Style {
    heading_style(theme).add_modifier(Modifier::UNDERLINED)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for hints and placeholders.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for inline error messages.
///
pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for call-to-action buttons.
///
pub fn button_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.primary.to_color())
        .fg(theme.on_primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for disabled buttons.
///
pub fn disabled_button_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.disabled.to_color())
        .fg(theme.text_muted.to_color())
}
