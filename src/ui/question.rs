use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::models::Score;
use crate::screen::Screen;

use super::{plain_text, Palette};

const WHAT_LINKS_PREFIX: &str = "What links:";

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], screen, palette);
    render_question_text(frame, chunks[1], screen, palette);
    render_answer_text(frame, chunks[2], &screen.answer_text, palette);
    render_controls(frame, chunks[3], screen.question_score.is_some(), palette);
}

fn render_header(frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
    let number = screen.question_number.unwrap_or_default();
    let mut spans = vec![Span::styled(
        format!("{number}."),
        Style::default().fg(palette.foreground).bold(),
    )];
    if let Some(score) = screen.question_score {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            score_label(score),
            Style::default().fg(palette.highlight),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
    let mut lines = Vec::new();
    if screen.what_links {
        lines.push(Line::from(WHAT_LINKS_PREFIX.fg(palette.dimmed)));
    }
    lines.extend(
        plain_text(&screen.question_text)
            .lines()
            .map(|line| Line::from(line.to_string().fg(palette.foreground))),
    );

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(widget, area);
}

fn render_answer_text(frame: &mut Frame, area: Rect, answer: &str, palette: &Palette) {
    let widget = Paragraph::new(plain_text(answer))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(palette.highlight).bold());
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, can_score: bool, palette: &Palette) {
    let hint = if can_score {
        "→ next  ·  ← back  ·  space score  ·  ↑↓ theme"
    } else {
        "→ next  ·  ← back  ·  ↑↓ theme"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(palette.very_dimmed);
    frame.render_widget(widget, area);
}

fn score_label(score: Score) -> &'static str {
    match score {
        Score::None => "○ No score",
        Score::Half => "◐ Half",
        Score::Full => "● Full",
    }
}
