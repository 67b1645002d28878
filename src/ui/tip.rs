use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::models::Theme;

use super::Palette;

const TIP_WIDTH: u16 = 14;
const TIP_HEIGHT: u16 = 3;

/// Draws the theme tip in the top-right corner, in the colours of `theme`.
pub fn render(frame: &mut Frame, area: Rect, theme: Theme) {
    if area.width < TIP_WIDTH || area.height < TIP_HEIGHT {
        return;
    }
    let tip_area = Rect::new(area.right() - TIP_WIDTH, area.y, TIP_WIDTH, TIP_HEIGHT);
    let palette = Palette::for_theme(theme);

    let label = format!("{} {}", dial_glyph(theme.dial_rotation()), theme_label(theme));
    let widget = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.foreground).bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dimmed)),
        );

    frame.render_widget(Clear, tip_area);
    frame.render_widget(widget, tip_area);
}

fn dial_glyph(rotation: f32) -> char {
    if rotation > 0.0 {
        '↗'
    } else if rotation < 0.0 {
        '↖'
    } else {
        '↑'
    }
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Medium => "Medium",
        Theme::Dark => "Dark",
    }
}
