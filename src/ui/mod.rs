mod question;
mod text;
mod tip;
mod title;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::models::Theme;
use crate::screen::Screen;

pub use text::plain_text;

/// Terminal colours for one theme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub highlight: Color,
    pub dimmed: Color,
    pub very_dimmed: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xf4, 0xf1, 0xea),
                foreground: Color::Rgb(0x22, 0x22, 0x22),
                highlight: Color::Rgb(0x05, 0x52, 0x9c),
                dimmed: Color::Rgb(0x70, 0x70, 0x70),
                very_dimmed: Color::Rgb(0xb0, 0xb0, 0xb0),
            },
            Theme::Medium => Self {
                background: Color::Rgb(0x05, 0x52, 0x9c),
                foreground: Color::White,
                highlight: Color::Rgb(0xff, 0xe5, 0x00),
                dimmed: Color::Rgb(0xc0, 0xd4, 0xe8),
                very_dimmed: Color::Rgb(0x6a, 0x93, 0xbf),
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::Rgb(0xbb, 0xbb, 0xbb),
                highlight: Color::Rgb(0xff, 0xbb, 0x50),
                dimmed: Color::Rgb(0x77, 0x77, 0x77),
                very_dimmed: Color::Rgb(0x44, 0x44, 0x44),
            },
        }
    }
}

pub fn render(frame: &mut Frame, screen: &Screen) {
    let area = frame.area();
    let palette = Palette::for_theme(screen.theme);
    frame.render_widget(Block::default().bg(palette.background), area);

    if screen.loading {
        render_loading(frame, area, &palette);
    } else if let Some(kind) = screen.title {
        title::render(frame, area, screen, kind, &palette);
    } else if screen.shows_question() {
        question::render(frame, area, screen, &palette);
    }

    if let Some(theme) = screen.theme_tip {
        tip::render(frame, area, theme);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let widget = Paragraph::new("Loading quiz...")
        .alignment(Alignment::Center)
        .fg(palette.dimmed);
    frame.render_widget(widget, chunks[1]);
}
